//! Scroll-position effects: navbar treatment, hide-on-scroll-down, and the
//! back-to-top affordance.
//!
//! The model is pure and sampled at most once per animation frame by the
//! browser binding (flag-and-requestAnimationFrame throttle).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::Callback;

use crate::config;

/// What the page should look like for the current scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub navbar_solid: bool,
    pub back_to_top: bool,
    pub navbar_hidden: bool,
}

/// Threshold and direction state. Direction only reacts to movements
/// larger than the jitter delta, so tiny scroll corrections never flip the
/// navbar.
pub struct ScrollModel {
    last_y: f64,
    hidden: bool,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self { last_y: 0.0, hidden: false }
    }

    pub fn sample(&mut self, y: f64) -> ScrollFrame {
        if (y - self.last_y).abs() > config::SCROLL_DIRECTION_DELTA_PX {
            self.hidden = y > self.last_y && y > config::NAVBAR_SOLID_AT_PX;
            self.last_y = y;
        }
        ScrollFrame {
            navbar_solid: y > config::NAVBAR_SOLID_AT_PX,
            back_to_top: y > config::BACK_TO_TOP_AT_PX,
            navbar_hidden: self.hidden,
        }
    }
}

impl Default for ScrollModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Attaches the throttled scroll listener; at most one sample per frame
/// reaches `on_frame`. Returns the cleanup that detaches the listener.
pub fn install_scroll_watcher(on_frame: Callback<ScrollFrame>) -> impl FnOnce() {
    let window = web_sys::window().expect("no window");
    let model = Rc::new(RefCell::new(ScrollModel::new()));
    let ticking = Rc::new(Cell::new(false));

    let frame = {
        let window = window.clone();
        let ticking = ticking.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            ticking.set(false);
            let y = window.scroll_y().unwrap_or(0.0);
            on_frame.emit(model.borrow_mut().sample(y));
        }) as Box<dyn FnMut()>))
    };

    let on_scroll = {
        let window = window.clone();
        let ticking = ticking.clone();
        let frame = frame.clone();
        Closure::wrap(Box::new(move || {
            if !ticking.get() {
                ticking.set(true);
                let _ = window.request_animation_frame((*frame).as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .expect("scroll listener");

    move || {
        let _ = window
            .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        drop(frame);
    }
}

/// Smooth scroll to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Where to land so the anchor target sits below the fixed header.
pub fn anchor_scroll_target(element_top: f64, page_y: f64) -> f64 {
    element_top + page_y - config::HEADER_OFFSET_PX
}

/// Smooth scroll to an in-page anchor (`#section`), compensating for the
/// fixed header. Missing targets are ignored.
pub fn scroll_to_anchor(href: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document.query_selector(href).ok().flatten() else { return };
    let top = target.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let opts = ScrollToOptions::new();
    opts.set_top(anchor_scroll_target(top, page_y));
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_crosses_at_100px() {
        let mut model = ScrollModel::new();
        let before = model.sample(99.0);
        assert!(!before.navbar_solid);
        assert!(!before.back_to_top);
        let after = model.sample(101.0);
        assert!(after.navbar_solid);
        assert!(!after.back_to_top);
    }

    #[test]
    fn back_to_top_threshold_crosses_at_300px() {
        let mut model = ScrollModel::new();
        assert!(!model.sample(299.0).back_to_top);
        assert!(model.sample(301.0).back_to_top);
    }

    #[test]
    fn scrolling_down_past_the_header_hides_the_navbar() {
        let mut model = ScrollModel::new();
        model.sample(200.0);
        assert!(model.sample(250.0).navbar_hidden);
        assert!(!model.sample(150.0).navbar_hidden);
    }

    #[test]
    fn jitter_within_the_delta_keeps_the_last_direction() {
        let mut model = ScrollModel::new();
        model.sample(200.0);
        assert!(model.sample(400.0).navbar_hidden);
        // Within +-5px of the last accepted sample: state holds.
        assert!(model.sample(397.0).navbar_hidden);
        assert!(model.sample(403.0).navbar_hidden);
        // A real upward move reveals again.
        assert!(!model.sample(350.0).navbar_hidden);
    }

    #[test]
    fn downward_moves_near_the_top_do_not_hide() {
        let mut model = ScrollModel::new();
        assert!(!model.sample(50.0).navbar_hidden);
        assert!(!model.sample(80.0).navbar_hidden);
    }

    #[test]
    fn anchor_target_compensates_for_the_header() {
        assert_eq!(anchor_scroll_target(500.0, 1_000.0), 1_420.0);
        assert_eq!(anchor_scroll_target(-20.0, 400.0), 300.0);
    }
}
