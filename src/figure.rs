use crate::core::{FigureView, ImageCatalog, Lightbox};
use crate::dom::{self, Listener};
use crate::error::MountError;
use crate::overlay;
use crate::theme;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live listeners and the overlay of one figure. Dropping it detaches both.
pub struct FigureBinding {
    overlay: web::Element,
    _listeners: Vec<Listener>,
}

impl Drop for FigureBinding {
    fn drop(&mut self) {
        self.overlay.remove();
    }
}

/// Bring the overlay in line with the lightbox state.
fn sync(lightbox: &Lightbox, el: &web::Element) {
    match (lightbox.is_open(), overlay::is_shown(el)) {
        (true, false) => overlay::show(el),
        (false, true) => overlay::hide(el),
        _ => {}
    }
}

fn image(doc: &web::Document, view: &FigureView<'_>, style: &str) -> Result<web::Element, MountError> {
    let img = dom::element(doc, "img", style)?;
    if let Some(src) = view.src {
        img.set_attribute("src", src).map_err(dom::js_err)?;
    }
    img.set_attribute("alt", view.alt).map_err(dom::js_err)?;
    Ok(img)
}

fn set_transform(el: &web::Element, transform: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("transform", transform);
    }
}

/// Build the thumbnail `<figure>` for `key` and its full-screen overlay.
///
/// The overlay is appended to `body` rather than next to the figure so that
/// a transformed ancestor (the reveal wrapper) cannot re-anchor its fixed
/// positioning.
pub fn build(
    doc: &web::Document,
    body: &web::Element,
    catalog: &ImageCatalog,
    key: &str,
    caption: Option<&str>,
    wide: bool,
) -> Result<(web::Element, FigureBinding), MountError> {
    let view = FigureView::resolve(catalog, key, caption, wide);

    let figure = dom::element(doc, "figure", &theme::figure_style(view.wide))?;
    let thumb = image(doc, &view, theme::FIGURE_IMG_STYLE)?;
    dom::append(&figure, &thumb)?;
    if let Some(text) = view.caption {
        let cap = dom::text_element(doc, "figcaption", &theme::figcaption_style(), text)?;
        dom::append(&figure, &cap)?;
    }

    let overlay_el = dom::element(doc, "div", theme::OVERLAY_HIDDEN_STYLE)?;
    let full = image(doc, &view, theme::OVERLAY_IMG_STYLE)?;
    dom::append(&overlay_el, &full)?;
    dom::append(body, &overlay_el)?;

    let lightbox = Rc::new(RefCell::new(Lightbox::new()));
    let mut listeners = Vec::with_capacity(4);

    {
        let lightbox = lightbox.clone();
        let overlay_el = overlay_el.clone();
        let key = key.to_string();
        listeners.push(Listener::new(&figure, "click", move |_| {
            let mut lb = lightbox.borrow_mut();
            if lb.open() {
                log::debug!("[lightbox] open {}", key);
            }
            sync(&lb, &overlay_el);
        })?);
    }
    {
        let lightbox = lightbox.clone();
        let target = overlay_el.clone();
        listeners.push(Listener::new(&overlay_el, "click", move |_| {
            let mut lb = lightbox.borrow_mut();
            lb.close();
            sync(&lb, &target);
        })?);
    }
    {
        let img = thumb.clone();
        listeners.push(Listener::new(&thumb, "mouseover", move |_| {
            set_transform(&img, theme::FIGURE_IMG_HOVER_TRANSFORM);
        })?);
    }
    {
        let img = thumb.clone();
        listeners.push(Listener::new(&thumb, "mouseout", move |_| {
            set_transform(&img, theme::FIGURE_IMG_REST_TRANSFORM);
        })?);
    }

    Ok((
        figure,
        FigureBinding {
            overlay: overlay_el,
            _listeners: listeners,
        },
    ))
}
