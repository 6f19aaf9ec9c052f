//! Newsletter signup form. The submission is simulated: a non-empty input
//! is answered with the success toast and the field is cleared. The only
//! validation is "non-empty", matching the page's best-effort character.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::show_notification;

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let email = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if email.is_empty() {
                return;
            }
            show_notification("Vielen Dank! Sie wurden erfolgreich angemeldet.");
            email.set(String::new());
        })
    };

    let oninput = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    html! {
        <form class="newsletter-form" onsubmit={onsubmit}>
            <input class="newsletter-input"
                type="email"
                placeholder="Ihre E-Mail-Adresse"
                value={(*email).clone()}
                oninput={oninput} />
            <button class="newsletter-submit" type="submit">{"Anmelden"}</button>
        </form>
    }
}
