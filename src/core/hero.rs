use crate::constants::HERO_PARALLAX_FACTOR;

/// Vertical offset of the hero glow for a page scroll offset.
#[inline]
pub fn glow_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_PARALLAX_FACTOR
}

/// CSS transform keeping the glow centred while it drifts with the scroll.
pub fn glow_transform(scroll_y: f64) -> String {
    // overscroll reports negative offsets; the glow stays put
    let offset = if scroll_y > 0.0 { glow_offset(scroll_y) } else { 0.0 };
    format!("translate(-50%,-50%) translateY({}px)", offset)
}
