use crate::theme;
use web_sys as web;

const OPEN_CLASS: &str = "lightbox-open";

#[inline]
pub fn show(overlay: &web::Element) {
    _ = overlay.class_list().add_1(OPEN_CLASS);
    _ = overlay.set_attribute("style", theme::OVERLAY_STYLE);
}

#[inline]
pub fn hide(overlay: &web::Element) {
    _ = overlay.class_list().remove_1(OPEN_CLASS);
    _ = overlay.set_attribute("style", theme::OVERLAY_HIDDEN_STYLE);
}

#[inline]
pub fn is_shown(overlay: &web::Element) -> bool {
    if overlay.class_list().contains(OPEN_CLASS) {
        return true;
    }
    // fallback for markup whose class list was rewritten elsewhere
    overlay
        .get_attribute("style")
        .map(|s| !s.contains("display:none"))
        .unwrap_or(false)
}
