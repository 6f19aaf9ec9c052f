//! Fixed header navigation: scrolled-state styling, active-section
//! highlighting, the mobile overlay menu and offset-aware anchor scrolling.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::notification::show_notification;
use crate::config::{HEADER_OFFSET, MOBILE_BREAKPOINT};
use crate::scroll;

const NAV_LINKS: [(&str, &str); 5] = [
    ("Startseite", "#home"),
    ("Kollektionen", "#collections"),
    ("Signatur", "#signature"),
    ("Duftnoten", "#notes"),
    ("Kontakt", "#contact"),
];

const MOBILE_PANEL_STYLE: &str = "display: flex; position: absolute; top: 100%; \
    left: 0; right: 0; background: white; flex-direction: column; \
    padding: 2rem; box-shadow: 0 10px 30px rgba(0,0,0,0.1); z-index: 999;";

/// Intercepts a click on an in-page anchor and scrolls smoothly to its
/// target, keeping the fixed header clear of it.
///
/// The bare `"#"` href is left to the browser. A parsed fragment always
/// suppresses default navigation; a fragment without a matching element
/// scrolls nowhere.
pub fn navigate_to_fragment(event: &MouseEvent, href: &str) {
    let Some(id) = scroll::anchor_fragment(href) else {
        return;
    };
    event.prevent_default();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|document| document.get_element_by_id(id))
    else {
        return;
    };
    let scroll_top = window.scroll_y().unwrap_or_default();
    let top = target.get_bounding_client_rect().top() + scroll_top - HEADER_OFFSET;
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Click adapter around [`navigate_to_fragment`] for plain anchor links.
pub fn anchor_callback(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| navigate_to_fragment(&event, href))
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

fn measure_sections(document: &Document) -> Vec<(String, f64)> {
    let mut sections = Vec::new();
    if let Ok(list) = document.query_selector_all("section[id]") {
        for index in 0..list.length() {
            if let Some(section) = list
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                sections.push((section.id(), f64::from(section.offset_top())));
            }
        }
    }
    sections
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| None::<String>);
    let links_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let win = window.clone();
                    let document = window.document();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = win.scroll_y().unwrap_or_default();
                        is_scrolled.set(scroll::header_scrolled(scroll_top));
                        if let Some(document) = &document {
                            let sections = measure_sections(document);
                            active_section.set(
                                scroll::active_section(&sections, scroll_top)
                                    .map(str::to_owned),
                            );
                        }
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // The trigger flag flips on every toggle; the panel itself only reacts
    // below the breakpoint, keyed off its current inline display so the
    // flag and the panel can disagree after a resize (known quirk).
    let toggle_menu = {
        let menu_open = menu_open.clone();
        let links_ref = links_ref.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
            if viewport_width() <= MOBILE_BREAKPOINT {
                if let Some(panel) = links_ref.cast::<HtmlElement>() {
                    let shown = panel
                        .style()
                        .get_property_value("display")
                        .map(|display| display == "flex")
                        .unwrap_or(false);
                    if shown {
                        let _ = panel.set_attribute("style", "display: none");
                    } else {
                        let _ = panel.set_attribute("style", MOBILE_PANEL_STYLE);
                    }
                }
            }
        })
    };

    let nav_link_click = {
        let menu_open = menu_open.clone();
        let links_ref = links_ref.clone();
        move |href: &'static str| {
            let menu_open = menu_open.clone();
            let links_ref = links_ref.clone();
            Callback::from(move |event: MouseEvent| {
                navigate_to_fragment(&event, href);
                // A link click always closes the mobile panel.
                if viewport_width() <= MOBILE_BREAKPOINT {
                    if let Some(panel) = links_ref.cast::<HtmlElement>() {
                        let _ = panel.set_attribute("style", "display: none");
                    }
                    menu_open.set(false);
                }
            })
        }
    };

    let on_search = Callback::from(|_: MouseEvent| {
        gloo_console::log!("Suche angefordert");
        show_notification("Suchfunktion in Entwicklung");
    });

    html! {
        <header class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a class="logo" href="#home" onclick={anchor_callback("#home")}>
                    {"Qaed Al Fursan"}
                </a>
                <div class="nav-links" ref={links_ref.clone()}>
                    { for NAV_LINKS.iter().map(|&(label, href)| {
                        let active = (*active_section).as_deref() == scroll::anchor_fragment(href);
                        html! {
                            <a class={classes!("nav-link", active.then(|| "active"))}
                                href={href}
                                onclick={nav_link_click(href)}>
                                {label}
                            </a>
                        }
                    }) }
                </div>
                <button class="search-btn" onclick={on_search} aria-label="Suche">
                    {"⌕"}
                </button>
                <button class={classes!("mobile-menu-btn", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::NAV_LINKS;
    use crate::scroll::anchor_fragment;

    #[test]
    fn every_nav_link_targets_a_fragment() {
        for (_, href) in NAV_LINKS {
            assert!(anchor_fragment(href).is_some(), "{href} is not an in-page link");
        }
    }
}
