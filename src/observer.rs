use crate::constants::REVEAL_THRESHOLD;
use crate::core::{RevealSet, Visibility};
use crate::dom;
use crate::error::MountError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const ID_ATTR: &str = "data-reveal-id";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Fades blocks in the first time they scroll into view.
///
/// All wrappers share one `IntersectionObserver`; each element is unobserved
/// as soon as it has been revealed. Without `IntersectionObserver` every
/// block is shown immediately.
pub struct RevealController {
    set: Rc<RefCell<RevealSet>>,
    elements: Rc<RefCell<Vec<web::Element>>>,
    observer: Option<web::IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

fn apply_style(set: &RevealSet, elements: &[web::Element], id: usize) {
    if let (Some(target), Some(el)) = (set.get(id), elements.get(id)) {
        _ = el.set_attribute("style", &target.style().to_css());
    }
}

impl RevealController {
    pub fn new() -> Self {
        Self {
            set: Rc::new(RefCell::new(RevealSet::new())),
            elements: Rc::new(RefCell::new(Vec::new())),
            observer: None,
            _callback: None,
        }
    }

    /// Wrap `content` in a hidden reveal container that starts its
    /// transition `delay_sec` after becoming visible.
    pub fn wrap(
        &mut self,
        doc: &web::Document,
        content: &web::Node,
        delay_sec: f32,
    ) -> Result<web::Element, MountError> {
        let id = self.set.borrow_mut().add(delay_sec);
        let wrapper = dom::element(doc, "div", "")?;
        wrapper
            .set_attribute(ID_ATTR, &id.to_string())
            .map_err(dom::js_err)?;
        dom::append(&wrapper, content)?;
        self.elements.borrow_mut().push(wrapper.clone());
        apply_style(&self.set.borrow(), &self.elements.borrow(), id);
        Ok(wrapper)
    }

    /// Start observing every wrapper created so far.
    pub fn activate(&mut self, window: &web::Window) {
        let supported =
            js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        let observer = if supported { self.build_observer() } else { None };
        match observer {
            Some(observer) => {
                for el in self.elements.borrow().iter() {
                    observer.observe(el);
                }
                log::info!("[reveal] observing {} blocks", self.set.borrow().len());
                self.observer = Some(observer);
            }
            None => self.reveal_all(),
        }
    }

    fn build_observer(&mut self) -> Option<web::IntersectionObserver> {
        let set = self.set.clone();
        let elements = self.elements.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                let events = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let id = entry.target().get_attribute(ID_ATTR)?.parse::<usize>().ok()?;
                        let visibility =
                            Visibility::new(entry.is_intersecting(), entry.intersection_ratio());
                        Some((id, visibility))
                    });
                let revealed = set.borrow_mut().observe_batch(events);
                let set = set.borrow();
                let elements = elements.borrow();
                for id in revealed {
                    apply_style(&set, &elements, id);
                    if let Some(el) = elements.get(id) {
                        observer.unobserve(el);
                    }
                    log::debug!("[reveal] block {} revealed", id);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                self._callback = Some(callback);
                Some(observer)
            }
            Err(e) => {
                log::warn!("[reveal] IntersectionObserver failed: {:?}", e);
                None
            }
        }
    }

    /// Fail open: show every pending block without animating it.
    fn reveal_all(&self) {
        let changed = self.set.borrow_mut().reveal_all();
        log::warn!(
            "[reveal] visibility observation unavailable; showing {} blocks",
            changed.len()
        );
        let set = self.set.borrow();
        let elements = self.elements.borrow();
        for id in changed {
            apply_style(&set, &elements, id);
        }
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}
