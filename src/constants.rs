// Particle field and reveal tuning constants.
// Units are CSS pixels and display frames unless stated otherwise.

pub const PARTICLE_COUNT: usize = 50;

// Per-axis velocity is drawn from [-MAX, MAX] units per frame
pub const PARTICLE_MAX_SPEED: f32 = 0.15;

// Dot radius range
pub const PARTICLE_RADIUS_MIN: f32 = 0.8;
pub const PARTICLE_RADIUS_MAX: f32 = 2.6;

// Pulse phase advance (radians per frame); period is TAU / PHASE_STEP frames
pub const PHASE_STEP: f32 = 0.012;

// Dot fill opacity = BASE + SPAN * sin(phase)
pub const PULSE_ALPHA_BASE: f32 = 0.22;
pub const PULSE_ALPHA_SPAN: f32 = 0.12;

// Pairs strictly closer than this are connected
pub const LINK_DISTANCE: f32 = 130.0;
pub const LINK_ALPHA_MAX: f32 = 0.045;
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element inside the viewport
pub const REVEAL_OFFSET_PX: f32 = 32.0;
pub const REVEAL_DURATION_SEC: f32 = 0.7;
pub const REVEAL_EASING: &str = "cubic-bezier(.16,1,.3,1)";

// Hero glow drifts up at this fraction of the scroll offset
pub const HERO_PARALLAX_FACTOR: f64 = -0.06;

// Frame-rate report cadence (frames)
pub const STATS_LOG_INTERVAL_FRAMES: u32 = 600;
