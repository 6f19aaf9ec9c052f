//! The showcase page: hero, collections, signature product, fragrance
//! notes and the newsletter block. Mounting wires up the reveal observers
//! and the hero parallax listener.

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::gallery::Gallery;
use crate::components::nav::anchor_callback;
use crate::components::newsletter::Newsletter;
use crate::components::reveal;
use crate::scroll;

const COLLECTIONS: [(&str, &str); 3] = [
    (
        "Wüstennacht",
        "Dunkle Amber und Oud, getragen von einem Hauch Rauch.",
    ),
    (
        "Rosengarten",
        "Arabische Rose und Safran, weich gezeichnet auf Moschus.",
    ),
    (
        "Karawane",
        "Leder, Kardamom und warme Hölzer für lange Abende.",
    ),
];

const NOTES: [(&str, &str); 3] = [
    ("Kopfnote", "Safran, Bergamotte und ein Hauch Kardamom."),
    ("Herznote", "Arabische Rose, Oud und dunkle Amber."),
    ("Basisnote", "Sandelholz, Moschus und Vanille."),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Startseite initialisiert");
            reveal::reveal_cards(".collection-card, .note-card");
            reveal::reveal_staggered(
                ".hero-content-wrapper, .section-header, .product-showcase",
            );

            let listener = web_sys::window().map(|window| {
                let win = window.clone();
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = win.scroll_y().unwrap_or_default();
                    // Past the limit the last transform stays in place.
                    let Some(offset) = scroll::parallax_offset(scroll_top) else {
                        return;
                    };
                    let hero = document
                        .as_ref()
                        .and_then(|document| document.query_selector(".hero-image").ok().flatten())
                        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
                    if let Some(hero) = hero {
                        let _ = hero
                            .style()
                            .set_property("transform", &format!("translateY({offset}px)"));
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

    html! {
        <main class="page">
            <section id="home" class="hero">
                <img class="hero-image"
                    src="/assets/hero-duene.jpg"
                    alt="Wüstendüne im Abendlicht" />
                <div class="hero-content-wrapper">
                    <p class="hero-eyebrow">{"Parfum Maison"}</p>
                    <h1 class="hero-title">{"Qaed Al Fursan"}</h1>
                    <p class="hero-subtitle">
                        {"Ein orientalisches Parfum aus Safran, Oud und Amber, \
                          komponiert in kleinen Auflagen."}
                    </p>
                    <a class="hero-cta"
                        href="#collections"
                        onclick={anchor_callback("#collections")}>
                        {"Kollektion entdecken"}
                    </a>
                </div>
            </section>

            <section id="collections" class="collections">
                <div class="section-header">
                    <h2>{"Unsere Kollektionen"}</h2>
                    <p>{"Drei Linien, ein Haus: jede Komposition erzählt eine eigene Nacht."}</p>
                </div>
                <div class="collection-grid">
                    { for COLLECTIONS.iter().map(|&(name, description)| html! {
                        <article class="collection-card">
                            <h3>{name}</h3>
                            <p>{description}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="signature" class="signature">
                <div class="product-showcase">
                    <Gallery />
                    <div class="product-copy">
                        <h2>{"Die Signatur"}</h2>
                        <p>
                            {"Unser Flakon wird von Hand graviert. Wählen Sie eine \
                              Ansicht, um Fassung und Gravur im Detail zu sehen."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="notes" class="notes">
                <div class="section-header">
                    <h2>{"Duftnoten"}</h2>
                    <p>{"Der Verlauf eines Abends, in drei Akkorden."}</p>
                </div>
                <div class="note-grid">
                    { for NOTES.iter().map(|&(name, description)| html! {
                        <article class="note-card">
                            <h3>{name}</h3>
                            <p>{description}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="section-header">
                    <h2>{"Bleiben Sie informiert"}</h2>
                    <p>{"Neuigkeiten zu Auflagen und Maison-Terminen, ein- bis zweimal im Monat."}</p>
                </div>
                <Newsletter />
            </section>

            <footer class="footer">
                <a class="footer-link" href="#home" onclick={anchor_callback("#home")}>
                    {"Nach oben"}
                </a>
                <p class="footer-legal">{"© Qaed Al Fursan. Alle Rechte vorbehalten."}</p>
            </footer>
        </main>
    }
}
