use log::{info, Level};
use yew::prelude::*;

mod config;
mod scroll;

mod components {
    pub mod gallery;
    pub mod nav;
    pub mod newsletter;
    pub mod notification;
    pub mod reveal;
}

mod pages {
    pub mod home;
}

use components::nav::Nav;
use components::notification::NotificationStyles;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <NotificationStyles />
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Qaed Al Fursan - Website geladen");
    yew::Renderer::<App>::new().render();
}
