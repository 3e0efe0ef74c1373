//! Site-wide utility surface: an explicitly constructed value handed to
//! components through context rather than hung off a window global.

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::effects::scroll;

/// A section's id with its viewport-relative bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// The section whose box straddles the header line. When several do, the
/// one latest in document order wins.
pub fn section_at(sections: &[SectionBox]) -> Option<&str> {
    let line = config::NAVBAR_SOLID_AT_PX;
    sections
        .iter()
        .filter(|s| s.top <= line && s.bottom >= line)
        .last()
        .map(|s| s.id.as_str())
}

/// Color scheme marker. Only the dark scheme exists today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteApi {
    theme: Theme,
}

impl SiteApi {
    pub fn new() -> Self {
        Self { theme: Theme::Dark }
    }

    pub fn scroll_to_top(&self) {
        scroll::scroll_to_top();
    }

    /// Id of the section currently under the header line, if any.
    pub fn current_section(&self) -> Option<String> {
        let document = web_sys::window().and_then(|w| w.document())?;
        let nodes = document.query_selector_all("section[id]").ok()?;
        let mut sections = Vec::new();
        for i in 0..nodes.length() {
            let Some(el) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            let rect = el.get_bounding_client_rect();
            sections.push(SectionBox {
                id: el.id(),
                top: rect.top(),
                bottom: rect.bottom(),
            });
        }
        section_at(&sections).map(str::to_owned)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Inert placeholder; there is no light scheme yet.
    pub fn toggle_theme(&self) {
        info!("Theme toggle feature coming soon!");
    }

    /// Logs the page load time once the window `load` event fires.
    pub fn measure_page_load(&self) {
        let Some(window) = web_sys::window() else { return };
        let on_load = Closure::wrap(Box::new(move || {
            if let Some(perf) = web_sys::window().and_then(|w| w.performance()) {
                info!("Page loaded in {:.2}ms", perf.now());
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        on_load.forget();
    }
}

impl Default for SiteApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(id: &str, top: f64, bottom: f64) -> SectionBox {
        SectionBox { id: id.into(), top, bottom }
    }

    #[test]
    fn picks_the_section_straddling_the_header_line() {
        let sections = vec![
            boxed("home", -500.0, 80.0),
            boxed("events", 80.0, 700.0),
            boxed("contact", 700.0, 1_400.0),
        ];
        assert_eq!(section_at(&sections), Some("events"));
    }

    #[test]
    fn none_when_nothing_covers_the_line() {
        let sections = vec![boxed("home", 200.0, 900.0)];
        assert_eq!(section_at(&sections), None);
        assert_eq!(section_at(&[]), None);
    }

    #[test]
    fn later_section_wins_when_boxes_overlap() {
        let sections = vec![
            boxed("home", 0.0, 120.0),
            boxed("events", 90.0, 600.0),
        ];
        assert_eq!(section_at(&sections), Some("events"));
    }
}
