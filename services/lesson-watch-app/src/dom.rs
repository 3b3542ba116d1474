//! DOM elements as click delegation targets

use lesson_watch::delegation::ClickTarget;
use wasm_bindgen::JsCast;

/// A clicked DOM element
#[derive(Debug, Clone)]
pub struct DomTarget(pub web_sys::Element);

impl ClickTarget for DomTarget {
    fn closest(&self, selector: &str) -> Option<Self> {
        self.0.closest(selector).ok().flatten().map(DomTarget)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

/// The element a click event was dispatched to
pub fn click_target(ev: &web_sys::MouseEvent) -> Option<DomTarget> {
    ev.target()?.dyn_into::<web_sys::Element>().ok().map(DomTarget)
}

/// `origin` of the page, e.g. `http://127.0.0.1:5000`
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
