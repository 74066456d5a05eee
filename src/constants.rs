// SVG layout for the three-dot loader.

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const LOADER_WIDTH: &str = "120";
pub const LOADER_HEIGHT: &str = "30";
pub const LOADER_VIEW_BOX: &str = "0 0 120 30";
pub const LOADER_FILL: &str = "#fff";

// Dots sit on one horizontal line, evenly spread across the viewbox
pub const DOT_CENTERS_X: [f64; 3] = [15.0, 60.0, 105.0];
pub const DOT_CENTER_Y: f64 = 15.0;
