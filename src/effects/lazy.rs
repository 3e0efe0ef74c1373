//! Lazy image loading: every image starts as `lazy-image` and swaps in its
//! deferred `data-src` the first time it intersects the viewport. One-shot
//! per image; loaded images are unobserved.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

pub fn install_lazy_loading() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(images) = document.query_selector_all("img") else { return };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                    if let Some(src) = img.get_attribute("data-src") {
                        img.set_src(&src);
                    }
                    let _ = img.class_list().add_1("loaded");
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    callback.forget();

    for i in 0..images.length() {
        let Some(img) = images.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let _ = img.class_list().add_1("lazy-image");
        observer.observe(&img);
    }
}
