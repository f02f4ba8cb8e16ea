use crate::core::hero;
use crate::dom::Listener;
use crate::error::MountError;
use web_sys as web;

/// Drift the hero glow with the page scroll. Passive, unthrottled.
pub fn wire_hero_parallax(
    window: &web::Window,
    glow: web::HtmlElement,
) -> Result<Listener, MountError> {
    let apply = move |scroll_y: f64| {
        _ = glow
            .style()
            .set_property("transform", &hero::glow_transform(scroll_y));
    };
    apply(window.scroll_y().unwrap_or(0.0));

    let win = window.clone();
    Listener::passive(window, "scroll", move |_| {
        apply(win.scroll_y().unwrap_or(0.0));
    })
}
