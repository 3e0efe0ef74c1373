//! Browser implementation of the overlay port.
//!
//! Builds the actual nodes, toggles the `visible` class that the page CSS
//! transitions on, and wires the lightbox close triggers (click anywhere,
//! Escape). Appearance lives entirely in the page stylesheet; this module
//! only writes classes and the stacking offset.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent};

use crate::config;
use crate::overlay::manager::{OverlayId, OverlayPort, OverlaySpec};

/// Late-bound dismissal callback. The port is constructed before the host
/// that owns it, so user-triggered dismissals route through this cell.
#[derive(Clone, Default)]
pub struct DismissHandle {
    callback: Rc<RefCell<Option<Box<dyn Fn(OverlayId)>>>>,
}

impl DismissHandle {
    pub fn bind(&self, f: impl Fn(OverlayId) + 'static) {
        *self.callback.borrow_mut() = Some(Box::new(f));
    }

    fn emit(&self, id: OverlayId) {
        if let Some(f) = self.callback.borrow().as_ref() {
            f(id);
        }
    }
}

pub struct DomPort {
    document: Document,
    nodes: HashMap<OverlayId, Element>,
    click_closures: HashMap<OverlayId, Closure<dyn FnMut(MouseEvent)>>,
    key_closures: HashMap<OverlayId, Closure<dyn FnMut(KeyboardEvent)>>,
    // Escape closures detached mid-dispatch; dropped on the next unmount,
    // which always runs from a timer rather than inside the handler.
    retired: Vec<Closure<dyn FnMut(KeyboardEvent)>>,
    dismiss: DismissHandle,
}

impl DomPort {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            nodes: HashMap::new(),
            click_closures: HashMap::new(),
            key_closures: HashMap::new(),
            retired: Vec::new(),
            dismiss: DismissHandle::default(),
        }
    }

    pub fn dismiss_handle(&self) -> DismissHandle {
        self.dismiss.clone()
    }

    fn append_to_body(&self, el: &Element) {
        if let Some(body) = self.document.body() {
            let _ = body.append_child(el);
        }
    }

    fn build_notification(&self, message: &str, variant_class: &str) -> Option<Element> {
        let el = self.document.create_element("div").ok()?;
        el.set_class_name(&format!("site-notification {}", variant_class));
        el.set_text_content(Some(message));
        Some(el)
    }

    fn build_lightbox(
        &mut self,
        id: OverlayId,
        image: &str,
        title: &str,
        description: &str,
    ) -> Option<Element> {
        let overlay = self.document.create_element("div").ok()?;
        overlay.set_class_name("lightbox");

        let content = self.document.create_element("div").ok()?;
        content.set_class_name("lightbox-content");

        let img = self.document.create_element("img").ok()?;
        let _ = img.set_attribute("src", image);
        let _ = img.set_attribute("alt", title);
        let _ = content.append_child(&img);

        if !title.is_empty() {
            if let Ok(heading) = self.document.create_element("h3") {
                heading.set_text_content(Some(title));
                let _ = content.append_child(&heading);
            }
        }
        if !description.is_empty() {
            if let Ok(text) = self.document.create_element("p") {
                text.set_text_content(Some(description));
                let _ = content.append_child(&text);
            }
        }
        let _ = overlay.append_child(&content);

        // Click anywhere on the overlay closes it.
        let on_click = {
            let dismiss = self.dismiss.clone();
            Closure::wrap(Box::new(move |_: MouseEvent| dismiss.emit(id)) as Box<dyn FnMut(_)>)
        };
        let _ = overlay
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        self.click_closures.insert(id, on_click);

        // Escape closes too; one listener per open lightbox, dropped again
        // when it starts dismissing.
        let on_key = {
            let dismiss = self.dismiss.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    dismiss.emit(id);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let _ = self
            .document
            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
        self.key_closures.insert(id, on_key);

        Some(overlay)
    }

    fn detach_key_listener(&mut self, id: OverlayId) {
        if let Some(closure) = self.key_closures.remove(&id) {
            let _ = self
                .document
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            self.retired.push(closure);
        }
    }
}

impl OverlayPort for DomPort {
    fn mount(&mut self, id: OverlayId, spec: &OverlaySpec) {
        let node = match spec {
            OverlaySpec::Notification { message, variant } => {
                self.build_notification(message, variant.class_name())
            }
            OverlaySpec::Lightbox { image, title, description } => {
                self.build_lightbox(id, image, title, description)
            }
        };
        if let Some(el) = node {
            self.append_to_body(&el);
            self.nodes.insert(id, el);
        }
    }

    fn set_visible(&mut self, id: OverlayId, visible: bool) {
        if let Some(el) = self.nodes.get(&id) {
            if visible {
                let _ = el.class_list().add_1("visible");
            } else {
                let _ = el.class_list().remove_1("visible");
            }
        }
        if !visible {
            self.detach_key_listener(id);
        }
    }

    fn set_slot(&mut self, id: OverlayId, slot: usize) {
        let top = config::NOTIFICATION_BASE_OFFSET_PX
            + slot as u32 * config::NOTIFICATION_SLOT_STEP_PX;
        if let Some(style) = self
            .nodes
            .get(&id)
            .and_then(|el| el.dyn_ref::<HtmlElement>())
            .map(|el| el.style())
        {
            let _ = style.set_property("top", &format!("{}px", top));
        }
    }

    fn unmount(&mut self, id: OverlayId) {
        self.detach_key_listener(id);
        self.retired.clear();
        self.click_closures.remove(&id);
        if let Some(el) = self.nodes.remove(&id) {
            el.remove();
        }
    }
}
