// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_MAX_SPEED > 0.0);
    assert!(PHASE_STEP > 0.0);
    assert!(LINK_DISTANCE > 0.0);
    assert!(LINK_LINE_WIDTH > 0.0);
    assert!(STATS_LOG_INTERVAL_FRAMES > 0);

    // Threshold is a fraction of the element
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(REVEAL_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_stay_between_zero_and_one() {
    assert!(PULSE_ALPHA_BASE - PULSE_ALPHA_SPAN > 0.0);
    assert!(PULSE_ALPHA_BASE + PULSE_ALPHA_SPAN < 1.0);
    assert!(LINK_ALPHA_MAX > 0.0 && LINK_ALPHA_MAX < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Radius range is non-empty and positive
    assert!(PARTICLE_RADIUS_MAX > PARTICLE_RADIUS_MIN);
    assert!(PARTICLE_RADIUS_MIN > 0.0);

    // A particle moves far less than the link distance per frame
    assert!(PARTICLE_MAX_SPEED * 2.0 < LINK_DISTANCE);

    // Lines stay fainter than the dimmest dot
    assert!(LINK_ALPHA_MAX < PULSE_ALPHA_BASE - PULSE_ALPHA_SPAN);

    // Glow moves against the scroll, and slowly
    assert!(HERO_PARALLAX_FACTOR < 0.0 && HERO_PARALLAX_FACTOR > -1.0);
}

#[test]
fn pulse_period_is_about_524_frames() {
    let period = std::f32::consts::TAU / PHASE_STEP;
    assert!((period - 523.6).abs() < 0.5, "period = {period}");
}
