//! The parameter set: a complete, immutable description of the effect.
//!
//! A `GlassParams` value is never edited in place by consumers. Every control
//! change produces a new snapshot through [`GlassParams::with_change`] or
//! [`GlassParams::with_preset`], and the snapshot is what gets synchronised into
//! the filter graph.

use crate::error::ParamError;
use crate::preset::{self, PresetBundle};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Colour channel of the displacement map read along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    pub const NAMES: &'static [&'static str] = &["R", "G", "B"];

    /// Attribute value understood by `xChannelSelector` / `yChannelSelector`.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
        }
    }
}

impl FromStr for Channel {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" | "r" => Ok(Channel::R),
            "G" | "g" => Ok(Channel::G),
            "B" | "b" => Ok(Channel::B),
            _ => Err(ParamError::UnknownChoice {
                kind: "channel",
                value: s.to_string(),
            }),
        }
    }
}

/// CSS `mix-blend-mode` used to composite the blue gradient over the red one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    pub const ALL: [BlendMode; 16] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];
    pub const NAMES: &'static [&'static str] = &[
        "normal",
        "multiply",
        "screen",
        "overlay",
        "darken",
        "lighten",
        "color-dodge",
        "color-burn",
        "hard-light",
        "soft-light",
        "difference",
        "exclusion",
        "hue",
        "saturation",
        "color",
        "luminosity",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }
}

impl FromStr for BlendMode {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlendMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParamError::UnknownChoice {
                kind: "blend mode",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];
    pub const NAMES: &'static [&'static str] = &["system", "light", "dark"];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParamError::UnknownChoice {
                kind: "theme",
                value: s.to_string(),
            })
    }
}

/// Named shape of the glass panel. Each one owns a fixed bundle of values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Dock,
    Pill,
    Bubble,
    Free,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Dock, Preset::Pill, Preset::Bubble, Preset::Free];
    pub const NAMES: &'static [&'static str] = &["dock", "pill", "bubble", "free"];

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Dock => "dock",
            Preset::Pill => "pill",
            Preset::Bubble => "bubble",
            Preset::Free => "free",
        }
    }
}

impl FromStr for Preset {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParamError::UnknownChoice {
                kind: "preset",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full visual configuration at one instant.
///
/// Fields:
/// - `width`, `height`, `radius`: panel box in CSS pixels
/// - `border`: inset of the inner mask as a fraction of `min(width, height)`
/// - `lightness`, `alpha`, `blur`: greyscale fill and blur of the inner mask
/// - `blend`: how the blue gradient is composited over the red one
/// - `scale`: base displacement; sign picks the direction of the offset
/// - `r`, `g`, `b`: per-channel offsets added to `scale`
/// - `x`, `y`: map channel read along each axis
/// - `displace`: stdDeviation of the output blur
/// - `frost`, `icons`, `theme`, `debug`, `top`: presentation only
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GlassParams {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub border: f64,
    pub lightness: f64,
    pub alpha: f64,
    pub blur: f64,
    pub blend: BlendMode,
    pub scale: f64,
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub x: Channel,
    pub y: Channel,
    pub displace: f64,
    pub frost: f64,
    pub icons: bool,
    pub theme: Theme,
    pub debug: bool,
    pub top: bool,
    pub preset: Preset,
}

impl Default for GlassParams {
    fn default() -> Self {
        preset::compose(&PresetBundle::for_preset(Preset::Dock), Theme::System, false, false)
    }
}

impl GlassParams {
    /// New snapshot with `preset`'s bundle merged over the current meta fields.
    pub fn with_preset(&self, preset: Preset) -> Self {
        preset::apply_bundle(self, &PresetBundle::for_preset(preset))
    }
}
