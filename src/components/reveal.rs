//! Scroll-triggered reveal animations driven by `IntersectionObserver`.
//!
//! Two configurations exist: cards get their hidden state and reveal applied
//! as inline styles, while the larger layout blocks are tagged `fade-in` and
//! revealed by adding a `visible` class, staggered inside each observer
//! batch. Revealed elements stay revealed; scrolling away never hides them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::{REVEAL_STAGGER_MS, REVEAL_THRESHOLD};

/// Tracks which observed elements have been revealed. Membership only
/// grows: `mark` reports a first-time reveal exactly once per element.
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Marks `index` as revealed. Returns `true` only on the first call
    /// for that index; out-of-range indexes are ignored.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

/// Delay before the element at `batch_index` plays its reveal.
///
/// The index is local to one observer callback batch, so a later batch
/// starts again at zero. That reset matches the page's observed behavior
/// and is kept as is.
pub fn stagger_delay(batch_index: usize) -> u32 {
    batch_index as u32 * REVEAL_STAGGER_MS
}

/// Registers `selectors` for the inline-style reveal: hidden and offset at
/// setup, faded in and moved back on first intersection.
pub fn reveal_cards(selectors: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let targets = query_targets(&document, selectors);
    if targets.is_empty() {
        return;
    }

    for element in &targets {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            let style = element.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(30px)");
            let _ = style.set_property("transition", "all 0.6s ease");
        }
    }

    let callback = Closure::wrap(Box::new(move |entries: web_sys::js_sys::Array| {
        for entry in entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        {
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                let style = element.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            }
        }
    }) as Box<dyn FnMut(web_sys::js_sys::Array)>);

    let Some(observer) = new_observer(&callback, "0px 0px -50px 0px") else {
        return;
    };
    for element in &targets {
        observer.observe(element);
    }
    callback.forget();
}

/// Registers `selectors` for the class-based reveal: tagged `fade-in` at
/// setup, given the `visible` class on first intersection, delayed by the
/// element's position within that callback's batch of new reveals.
pub fn reveal_staggered(selectors: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let targets = Rc::new(query_targets(&document, selectors));
    if targets.is_empty() {
        return;
    }

    for element in targets.iter() {
        let _ = element.class_list().add_1("fade-in");
    }

    let revealed = Rc::new(RefCell::new(RevealSet::new(targets.len())));
    let observed = targets.clone();
    let callback = Closure::wrap(Box::new(move |entries: web_sys::js_sys::Array| {
        let mut revealed = revealed.borrow_mut();
        let fresh: Vec<Element> = entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(IntersectionObserverEntry::is_intersecting)
            .map(|entry| entry.target())
            .filter(|target| {
                observed
                    .iter()
                    .position(|element| element == target)
                    .is_some_and(|index| revealed.mark(index))
            })
            .collect();
        for (batch_index, target) in fresh.into_iter().enumerate() {
            Timeout::new(stagger_delay(batch_index), move || {
                let _ = target.class_list().add_1("visible");
            })
            .forget();
        }
    }) as Box<dyn FnMut(web_sys::js_sys::Array)>);

    let Some(observer) = new_observer(&callback, "0px 0px -100px 0px") else {
        return;
    };
    for element in targets.iter() {
        observer.observe(element);
    }
    callback.forget();
}

fn query_targets(document: &Document, selectors: &str) -> Vec<Element> {
    let mut targets = Vec::new();
    if let Ok(list) = document.query_selector_all(selectors) {
        for index in 0..list.length() {
            if let Some(element) = list
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                targets.push(element);
            }
        }
    }
    targets
}

fn new_observer(
    callback: &Closure<dyn FnMut(web_sys::js_sys::Array)>,
    root_margin: &str,
) -> Option<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    options.set_root_margin(root_margin);
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_membership_is_monotonic() {
        let mut set = RevealSet::new(3);
        assert!(set.mark(1));
        assert!(set.is_revealed(1));
        // a second intersection never un-reveals or re-reveals
        assert!(!set.mark(1));
        assert!(set.is_revealed(1));
        assert!(!set.is_revealed(0));
    }

    #[test]
    fn out_of_range_marks_are_ignored() {
        let mut set = RevealSet::new(2);
        assert!(!set.mark(5));
        assert!(!set.is_revealed(5));
    }

    #[test]
    fn stagger_grows_linearly_within_a_batch() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(4), 400);
    }

    #[test]
    fn each_batch_restarts_at_zero() {
        // Two partial scroll batches: both lead with a zero delay, so two
        // elements can share delay slot 0 across batches.
        let mut set = RevealSet::new(4);
        let first: Vec<usize> = [0, 1].iter().filter(|i| set.mark(**i)).copied().collect();
        let second: Vec<usize> = [1, 2, 3].iter().filter(|i| set.mark(**i)).copied().collect();
        assert_eq!(first, vec![0, 1]);
        assert_eq!(second, vec![2, 3]);
        assert_eq!(stagger_delay(0), stagger_delay(0));
        assert_eq!(
            second.iter().enumerate().map(|(i, _)| stagger_delay(i)).collect::<Vec<_>>(),
            vec![0, 100]
        );
    }
}
