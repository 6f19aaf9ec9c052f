//! Transient notification toast. At most one panel is on screen at a time;
//! showing a new message removes the current panel immediately and replaces
//! it, so a rapid second call never stacks a second element.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{NOTIFICATION_DWELL_MS, NOTIFICATION_EXIT_MS};

const PANEL_STYLE: &str = "position: fixed; top: 100px; right: 30px; \
    background: #000; color: white; padding: 1.25rem 1.75rem; \
    border-radius: 8px; box-shadow: 0 8px 24px rgba(0,0,0,0.2); \
    z-index: 10000; animation: slideInRight 0.4s ease; max-width: 400px;";

/// Shows `message` in a fixed-position toast for the dwell time, then plays
/// the exit animation and removes the panel from the document.
///
/// The timers are fire-and-forget; when a panel is replaced early, its
/// stale timers act on the already detached node, which is harmless.
pub fn show_notification(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if let Ok(Some(existing)) = document.query_selector(".custom-notification") {
        existing.remove();
    }

    let Ok(panel) = document.create_element("div") else {
        return;
    };
    let Ok(panel) = panel.dyn_into::<HtmlElement>() else {
        return;
    };
    panel.set_class_name("custom-notification");
    panel.set_inner_html(&format!(
        "<div style=\"display: flex; align-items: center; gap: 1rem;\">\
         <span style=\"font-size: 1.5rem;\">\u{2713}</span>\
         <p style=\"margin: 0;\">{message}</p></div>"
    ));
    let _ = panel.set_attribute("style", PANEL_STYLE);

    let Some(body) = document.body() else {
        return;
    };
    let _ = body.append_child(&panel);

    Timeout::new(NOTIFICATION_DWELL_MS, move || {
        let _ = panel.style().set_property("animation", "slideOutRight 0.4s ease");
        Timeout::new(NOTIFICATION_EXIT_MS, move || panel.remove()).forget();
    })
    .forget();
}

/// Keyframes consumed by the toast's entrance and exit animations.
#[function_component(NotificationStyles)]
pub fn notification_styles() -> Html {
    html! {
        <style>
            {r#"
                @keyframes slideInRight {
                    from { transform: translateX(100%); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                @keyframes slideOutRight {
                    from { transform: translateX(0); opacity: 1; }
                    to { transform: translateX(100%); opacity: 0; }
                }
            "#}
        </style>
    }
}
