#![cfg(target_arch = "wasm32")]
use crate::core::article::ARTICLE;
use crate::core::{FieldConfig, ImageCatalog};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod background;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod figure;
mod observer;
mod overlay;
mod page;
mod theme;

use background::NeuronField;
use dom::Listener;
use error::MountError;
use page::Page;

/// Everything the mounted page keeps alive. Field order is drop order:
/// listeners and the animation loop go before the DOM they touch.
struct App {
    _parallax: Option<Listener>,
    _field: Option<NeuronField>,
    _page: Page,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neuron-article starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Unmount the page: stop the background, detach every listener and
/// observer, and remove the added markup.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("neuron-article torn down");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let body: web::Element = document.body().ok_or(MountError::NoBody)?.into();

    let catalog = ImageCatalog::standard();
    let mut page = page::build(&document, &body, &ARTICLE, &catalog)?;

    let field = match NeuronField::mount(&window, &page.canvas, FieldConfig::default()) {
        Ok(field) => Some(field),
        Err(e) => {
            log::warn!("[field] background disabled: {}", e);
            None
        }
    };

    // Measure reveal positions against the final font metrics.
    if let Ok(ready) = document.fonts().ready() {
        if let Err(e) = JsFuture::from(ready).await {
            log::warn!("[fonts] not ready: {:?}", e);
        }
    }
    page.reveals.activate(&window);

    let parallax = match events::wire_hero_parallax(&window, page.glow.clone()) {
        Ok(listener) => Some(listener),
        Err(e) => {
            log::warn!("[hero] parallax disabled: {}", e);
            None
        }
    };

    let app = App {
        _parallax: parallax,
        _field: field,
        _page: page,
    };
    let previous = APP.with(|slot| slot.borrow_mut().replace(app));
    if previous.is_some() {
        log::warn!("replaced an already mounted page");
    }
    Ok(())
}
