// Defaults shared by every front-end. These match the `dock` preset.

// Panel box
pub const DEFAULT_WIDTH: f64 = 336.0; // px
pub const DEFAULT_HEIGHT: f64 = 96.0; // px
pub const DEFAULT_RADIUS: f64 = 16.0; // px

// Inner mask of the displacement map
pub const DEFAULT_BORDER: f64 = 0.07; // fraction of min(width, height)
pub const DEFAULT_LIGHTNESS: f64 = 50.0; // percent
pub const DEFAULT_ALPHA: f64 = 0.93;
pub const DEFAULT_BLUR: f64 = 11.0; // px, applied inside the map

// Displacement
pub const DEFAULT_SCALE: f64 = -180.0;
pub const DEFAULT_CHANNEL_OFFSETS: [f64; 3] = [0.0, 10.0, 20.0]; // r, g, b
pub const DEFAULT_OUTPUT_BLUR: f64 = 0.2; // stdDeviation of the final blur
pub const DEFAULT_FROST: f64 = 0.05;

// Slider ranges as (min, max, step)
pub const WIDTH_RANGE: (f64, f64, f64) = (80.0, 500.0, 1.0);
pub const HEIGHT_RANGE: (f64, f64, f64) = (35.0, 500.0, 1.0);
pub const RADIUS_RANGE: (f64, f64, f64) = (0.0, 500.0, 1.0);
pub const BORDER_RANGE: (f64, f64, f64) = (0.0, 1.0, 0.01);
pub const ALPHA_RANGE: (f64, f64, f64) = (0.0, 1.0, 0.01);
pub const LIGHTNESS_RANGE: (f64, f64, f64) = (0.0, 100.0, 1.0);
pub const BLUR_RANGE: (f64, f64, f64) = (0.0, 20.0, 1.0);
pub const OUTPUT_BLUR_RANGE: (f64, f64, f64) = (0.0, 5.0, 0.1);
pub const FROST_RANGE: (f64, f64, f64) = (0.0, 1.0, 0.01);
pub const SCALE_RANGE: (f64, f64, f64) = (-1000.0, 1000.0, 1.0);
pub const CHANNEL_OFFSET_RANGE: (f64, f64, f64) = (-100.0, 100.0, 1.0);

// Markup
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const NUM_DECIMALS: usize = 4; // max fractional digits written into markup
