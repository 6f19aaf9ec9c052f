//! Product image gallery: a strip of mutually exclusive thumbnails that
//! mirror their image into the main display with a short crossfade.

use gloo_timers::callback::Timeout;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config::CROSSFADE_DELAY_MS;

const PRODUCT_VIEWS: [(&str, &str); 4] = [
    ("/assets/flakon-front.jpg", "Qaed Al Fursan Flakon, Frontansicht"),
    ("/assets/flakon-seite.jpg", "Qaed Al Fursan Flakon, Seitenansicht"),
    ("/assets/flakon-gravur.jpg", "Gravur im Detail"),
    ("/assets/flakon-schatulle.jpg", "Qaed Al Fursan Geschenkschatulle"),
];

/// Selection state for the thumbnail strip. Exactly one thumbnail is
/// active at any time; selecting out of range leaves the state unchanged.
#[derive(Clone, PartialEq)]
pub struct ThumbnailStrip {
    count: usize,
    active: usize,
}

impl ThumbnailStrip {
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.active = index;
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let strip = use_state(|| ThumbnailStrip::new(PRODUCT_VIEWS.len()));
    let main_image = use_node_ref();

    let select = {
        let strip = strip.clone();
        let main_image = main_image.clone();
        move |index: usize| {
            let strip = strip.clone();
            let main_image = main_image.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*strip).clone();
                next.select(index);
                strip.set(next);

                // Without a main display the selection alone still succeeds.
                if let Some(image) = main_image.cast::<HtmlImageElement>() {
                    image.set_src(PRODUCT_VIEWS[index].0);
                    let _ = image.style().set_property("opacity", "0");
                    Timeout::new(CROSSFADE_DELAY_MS, move || {
                        let _ = image
                            .style()
                            .set_property("transition", "opacity 0.3s ease");
                        let _ = image.style().set_property("opacity", "1");
                    })
                    .forget();
                }
            })
        }
    };

    html! {
        <div class="product-gallery">
            <div class="main-image">
                <img ref={main_image.clone()}
                    src={PRODUCT_VIEWS[strip.active()].0}
                    alt={PRODUCT_VIEWS[strip.active()].1} />
            </div>
            <div class="thumbnail-row">
                { for PRODUCT_VIEWS.iter().enumerate().map(|(index, &(src, alt))| html! {
                    <img class={classes!("thumbnail", strip.is_active(index).then(|| "active"))}
                        src={src}
                        alt={alt}
                        onclick={select(index)} />
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::ThumbnailStrip;

    fn active_count(strip: &ThumbnailStrip, count: usize) -> usize {
        (0..count).filter(|index| strip.is_active(*index)).count()
    }

    #[test]
    fn exactly_one_active_for_any_click_sequence() {
        let mut strip = ThumbnailStrip::new(4);
        assert_eq!(strip.active(), 0);
        for index in [2, 2, 0, 3, 1, 3] {
            strip.select(index);
            assert_eq!(active_count(&strip, 4), 1);
            assert_eq!(strip.active(), index);
        }
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut strip = ThumbnailStrip::new(3);
        strip.select(1);
        strip.select(7);
        assert_eq!(strip.active(), 1);
        assert_eq!(active_count(&strip, 3), 1);
    }
}
