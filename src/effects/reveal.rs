//! Reveal-on-scroll: content cards start transparent and slide into place
//! the first time they enter the viewport. Items inside the events/team
//! grids get a stagger proportional to their position.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

const REVEAL_SELECTORS: &str =
    ".mission-card, .event-card, .team-card, .gallery-item, .contact-item";
const STAGGERED_GRIDS: [&str; 2] = ["events-grid", "team-grid"];
const INDEX_ATTR: &str = "data-reveal-index";

/// One-shot bookkeeping: an element reveals exactly once, no matter how
/// often the observer re-fires for it.
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self { revealed: HashSet::new() }
    }

    /// True only the first time a key is seen.
    pub fn first_reveal(&mut self, key: usize) -> bool {
        self.revealed.insert(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Transition delay for the nth child of a staggered grid.
pub fn stagger_delay_ms(sibling_index: usize) -> u32 {
    sibling_index as u32 * config::REVEAL_STAGGER_STEP_MS
}

fn sibling_index(el: &Element) -> usize {
    let mut index = 0;
    let mut cursor = el.previous_element_sibling();
    while let Some(prev) = cursor {
        index += 1;
        cursor = prev.previous_element_sibling();
    }
    index
}

fn in_staggered_grid(el: &Element) -> bool {
    el.parent_element()
        .map(|parent| {
            STAGGERED_GRIDS
                .iter()
                .any(|grid| parent.class_list().contains(grid))
        })
        .unwrap_or(false)
}

fn apply_reveal(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let style = html.style();
        if in_staggered_grid(el) {
            let delay = stagger_delay_ms(sibling_index(el));
            let _ = style.set_property("transition-delay", &format!("{}ms", delay));
        }
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "translateY(0)");
    }
}

/// Hides the content cards and reveals each one the first time it
/// intersects the viewport. Page-lifetime; the observer is leaked on
/// purpose, matching the page's lifetime.
pub fn install_reveal_observer() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTORS) else { return };

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let callback = {
        let tracker = tracker.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let key = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok());
                let Some(key) = key else { continue };
                if tracker.borrow_mut().first_reveal(key) {
                    apply_reveal(&target);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let _ = el.set_attribute(INDEX_ATTR, &i.to_string());
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let style = html.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(30px)");
            let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
        }
        observer.observe(&el);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_reveal_fires_once_per_key() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.first_reveal(3));
        assert!(!tracker.first_reveal(3));
        assert!(tracker.first_reveal(4));
        assert_eq!(tracker.revealed_count(), 2);
    }

    #[test]
    fn stagger_grows_linearly_with_position() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(5), 500);
    }
}
