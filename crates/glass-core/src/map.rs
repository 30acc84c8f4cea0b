//! Displacement-map generation.
//!
//! The map is a small SVG document: a black backdrop, a horizontal red
//! gradient, a vertical blue gradient blended over it, and a blurred greyscale
//! rounded rectangle inset from the edges. `feDisplacementMap` reads the red
//! and blue channels as x/y offsets; the grey inset flattens the centre so only
//! the rim of the panel refracts.

use crate::constants::{NUM_DECIMALS, SVG_NS};
use crate::params::{BlendMode, GlassParams};
use base64::Engine;
use std::fmt::Write;

/// Geometry of the inner mask rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsetRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Inputs of the map generator, captured from a [`GlassParams`] snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplacementMap {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub border: f64,
    pub blend: BlendMode,
    pub lightness: f64,
    pub alpha: f64,
    pub blur: f64,
}

impl DisplacementMap {
    pub fn from_params(params: &GlassParams) -> Self {
        Self {
            width: params.width,
            height: params.height,
            radius: params.radius,
            border: params.border,
            blend: params.blend,
            lightness: params.lightness,
            alpha: params.alpha,
            blur: params.blur,
        }
    }

    /// Distance of the inner mask from every edge: `min(w, h) * border / 2`.
    ///
    /// `border` is clamped to `[0, 1]` (non-finite reads as 0), so the offset
    /// never exceeds half the smaller side.
    pub fn border_offset(&self) -> f64 {
        let border = if self.border.is_finite() {
            self.border.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.width.min(self.height).max(0.0) * border * 0.5
    }

    /// Inner mask rectangle; extents are clamped at zero.
    pub fn inset(&self) -> InsetRect {
        let offset = self.border_offset();
        InsetRect {
            x: offset,
            y: offset,
            width: (self.width - offset * 2.0).max(0.0),
            height: (self.height - offset * 2.0).max(0.0),
        }
    }

    /// Render the map as standalone SVG markup.
    ///
    /// Identical inputs produce byte-identical output.
    pub fn to_svg(&self) -> String {
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        let rx = fmt_num(self.radius);
        let inset = self.inset();

        let mut svg = String::with_capacity(1024);
        // Writing into a String cannot fail.
        let _ = write!(
            svg,
            r#"<svg class="displacement-image" viewBox="0 0 {w} {h}" xmlns="{SVG_NS}">"#
        );
        svg.push_str(concat!(
            "<defs>",
            r##"<linearGradient id="red" x1="100%" y1="0%" x2="0%" y2="0%">"##,
            r##"<stop offset="0%" stop-color="#0000"/><stop offset="100%" stop-color="red"/>"##,
            "</linearGradient>",
            r##"<linearGradient id="blue" x1="0%" y1="0%" x2="0%" y2="100%">"##,
            r##"<stop offset="0%" stop-color="#0000"/><stop offset="100%" stop-color="blue"/>"##,
            "</linearGradient>",
            "</defs>",
        ));
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="black"/>"#
        );
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{w}" height="{h}" rx="{rx}" fill="url(#red)"/>"#
        );
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{w}" height="{h}" rx="{rx}" fill="url(#blue)" style="mix-blend-mode: {}"/>"#,
            self.blend.as_str()
        );
        let _ = write!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{rx}" fill="hsl(0 0% {}% / {})" style="filter:blur({}px)"/>"#,
            fmt_num(inset.x),
            fmt_num(inset.y),
            fmt_num(inset.width),
            fmt_num(inset.height),
            fmt_num(self.lightness),
            fmt_num(self.alpha),
            fmt_num(self.blur.max(0.0)),
        );
        svg.push_str("</svg>");
        svg
    }

    /// Render the map as a `data:` URI usable as an `feImage` href.
    pub fn to_data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(self.to_svg());
        format!("data:image/svg+xml;base64,{}", b64)
    }
}

/// Format a number for markup: at most `NUM_DECIMALS` fractional digits, no
/// trailing zeros, and never `-0`.
pub fn fmt_num(value: f64) -> String {
    let mut s = format!("{:.*}", NUM_DECIMALS, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_and_rounds() {
        assert_eq!(fmt_num(336.0), "336");
        assert_eq!(fmt_num(3.3600000000000003), "3.36");
        assert_eq!(fmt_num(0.93), "0.93");
        assert_eq!(fmt_num(-180.0), "-180");
        assert_eq!(fmt_num(0.123456), "0.1235");
        assert_eq!(fmt_num(-0.00001), "0");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn non_finite_border_is_ignored() {
        let mut map = DisplacementMap::from_params(&GlassParams::default());
        map.border = f64::NAN;
        assert_eq!(map.border_offset(), 0.0);
        assert_eq!(map.inset().width, map.width);
    }
}
