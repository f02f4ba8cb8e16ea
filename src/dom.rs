use crate::core::Viewport;
use crate::error::MountError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> MountError {
    MountError::Dom(format!("{:?}", e))
}

/// Current inner size of the window in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Option<Viewport> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(w as f32, h as f32))
}

/// Match the canvas backing store to the viewport so one canvas unit is one
/// CSS pixel.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width.max(1.0) as u32);
    canvas.set_height(viewport.height.max(1.0) as u32);
}

/// Create `<tag style="...">`.
pub fn element(doc: &web::Document, tag: &str, style: &str) -> Result<web::Element, MountError> {
    let el = doc.create_element(tag).map_err(js_err)?;
    if !style.is_empty() {
        el.set_attribute("style", style).map_err(js_err)?;
    }
    Ok(el)
}

/// Create a styled element holding plain text.
pub fn text_element(
    doc: &web::Document,
    tag: &str,
    style: &str,
    text: &str,
) -> Result<web::Element, MountError> {
    let el = element(doc, tag, style)?;
    el.set_text_content(Some(text));
    Ok(el)
}

#[inline]
pub fn append(parent: &web::Element, child: &web::Node) -> Result<(), MountError> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

#[inline]
pub fn append_text(doc: &web::Document, parent: &web::Element, text: &str) -> Result<(), MountError> {
    append(parent, &doc.create_text_node(text))
}

/// An event listener that stays registered for as long as this value lives
/// and is removed from its target on drop.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, MountError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    /// Same as [`Listener::new`], registered as passive so it never blocks
    /// native scrolling.
    pub fn passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, MountError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
