//! Small helpers over web-sys element creation and event wiring.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

use crate::error::CraftError;

pub fn by_id(document: &Document, id: &'static str) -> Result<HtmlElement, JsValue> {
    Ok(document
        .get_element_by_id(id)
        .ok_or(CraftError::MissingElement(id))?
        .dyn_into::<HtmlElement>()?)
}

/// `<tag class="class">`, optionally with text.
pub fn element(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn text(document: &Document, tag: &str, class: &str, content: &str) -> Result<HtmlElement, JsValue> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

pub fn style(el: &HtmlElement, properties: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = el.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

pub fn set_visible(el: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    el.style().set_property("display", if visible { "" } else { "none" })
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>())?;
    // The page never tears showcases down.
    closure.forget();
    Ok(())
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// `performance.now()` in ms, the same clock as animation-frame timestamps.
pub fn now(window: &Window) -> f64 {
    window.performance().map_or(0.0, |p| p.now())
}
