// Shared loader and widget tuning constants used by the web frontend.

// Loader animation
pub const WAVE_PERIOD_MS: f64 = 1400.0; // one full oscillation per dot
pub const DOT_COUNT: usize = 3;

// Dot radius in SVG user units
pub const RADIUS_MIN: f64 = 9.0;
pub const RADIUS_MAX: f64 = 15.0;
pub const RADIUS_STARTS: [f64; DOT_COUNT] = [9.0, 11.0, 13.0];

// Dot fill opacity (0..1)
pub const OPACITY_MIN: f64 = 0.4;
pub const OPACITY_MAX: f64 = 1.0;
pub const OPACITY_STARTS: [f64; DOT_COUNT] = [0.4, 0.6, 0.8];

// Container defaults
pub const DEFAULT_ROWS: usize = 50;
pub const BASE_CLASS_NAME: &str = "hire-faceted-search";
