//! Control descriptors and the single `(field, value)` dispatch.
//!
//! The control panel is built from [`SPECS`] and reports every edit as one
//! `(Field, ControlValue)` pair, which [`GlassParams::with_change`] reduces into
//! a new snapshot.

use crate::constants::*;
use crate::error::ParamError;
use crate::params::{BlendMode, Channel, GlassParams, Preset, Theme};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Debug,
    Top,
    Preset,
    Theme,
    Frost,
    Icons,
    Width,
    Height,
    Radius,
    Border,
    Alpha,
    Lightness,
    Blur,
    Displace,
    X,
    Y,
    Blend,
    Scale,
    R,
    G,
    B,
}

impl Field {
    pub const ALL: [Field; 21] = [
        Field::Debug,
        Field::Top,
        Field::Preset,
        Field::Theme,
        Field::Frost,
        Field::Icons,
        Field::Width,
        Field::Height,
        Field::Radius,
        Field::Border,
        Field::Alpha,
        Field::Lightness,
        Field::Blur,
        Field::Displace,
        Field::X,
        Field::Y,
        Field::Blend,
        Field::Scale,
        Field::R,
        Field::G,
        Field::B,
    ];

    /// Stable key used in markup (`name` attributes) and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Field::Debug => "debug",
            Field::Top => "top",
            Field::Preset => "preset",
            Field::Theme => "theme",
            Field::Frost => "frost",
            Field::Icons => "icons",
            Field::Width => "width",
            Field::Height => "height",
            Field::Radius => "radius",
            Field::Border => "border",
            Field::Alpha => "alpha",
            Field::Lightness => "lightness",
            Field::Blur => "blur",
            Field::Displace => "displace",
            Field::X => "x",
            Field::Y => "y",
            Field::Blend => "blend",
            Field::Scale => "scale",
            Field::R => "r",
            Field::G => "g",
            Field::B => "b",
        }
    }

    pub fn spec(self) -> &'static ControlSpec {
        match self {
            Field::Debug => &DEBUG,
            Field::Top => &TOP,
            Field::Preset => &MODE,
            Field::Theme => &THEME,
            Field::Frost => &FROST,
            Field::Icons => &ICONS,
            Field::Width => &WIDTH,
            Field::Height => &HEIGHT,
            Field::Radius => &RADIUS,
            Field::Border => &BORDER,
            Field::Alpha => &ALPHA,
            Field::Lightness => &LIGHTNESS,
            Field::Blur => &BLUR,
            Field::Displace => &DISPLACE,
            Field::X => &CHANNEL_X,
            Field::Y => &CHANNEL_Y,
            Field::Blend => &BLEND,
            Field::Scale => &SCALE,
            Field::R => &RED,
            Field::G => &GREEN,
            Field::B => &BLUE,
        }
    }
}

impl FromStr for Field {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "mode" is the label the panel shows for the preset selector
        if s == "mode" {
            return Ok(Field::Preset);
        }
        Field::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| ParamError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A value as carried by one control change.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    Number(f64),
    Choice(String),
}

impl ControlValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ControlValue::Bool(_) => "bool",
            ControlValue::Number(_) => "number",
            ControlValue::Choice(_) => "choice",
        }
    }

    /// Read raw text (an `<input>` value or a `field=value` override) as the
    /// kind of value `field`'s control produces.
    pub fn parse_for(field: Field, raw: &str) -> Result<Self, ParamError> {
        let raw = raw.trim();
        let invalid = || ParamError::InvalidValue {
            field: field.key(),
            value: raw.to_string(),
        };
        match field.spec().kind {
            ControlKind::Toggle => match raw {
                "true" | "on" | "1" => Ok(ControlValue::Bool(true)),
                "false" | "off" | "0" => Ok(ControlValue::Bool(false)),
                _ => Err(invalid()),
            },
            ControlKind::Slider { .. } => raw
                .parse::<f64>()
                .map(ControlValue::Number)
                .map_err(|_| invalid()),
            ControlKind::Select { .. } => Ok(ControlValue::Choice(raw.to_string())),
        }
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlValue::Bool(b) => write!(f, "{b}"),
            ControlValue::Number(n) => f.write_str(&crate::map::fmt_num(*n)),
            ControlValue::Choice(c) => f.write_str(c),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlKind {
    Toggle,
    Slider { min: f64, max: f64, step: f64 },
    Select { options: &'static [&'static str] },
}

impl ControlKind {
    const fn slider(range: (f64, f64, f64)) -> Self {
        ControlKind::Slider {
            min: range.0,
            max: range.1,
            step: range.2,
        }
    }
}

/// Panel grouping, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Folder {
    Root,
    Settings,
    Chromatic,
}

impl Folder {
    pub fn title(self) -> Option<&'static str> {
        match self {
            Folder::Root => None,
            Folder::Settings => Some("settings"),
            Folder::Chromatic => Some("chromatic"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSpec {
    pub field: Field,
    pub label: &'static str,
    pub kind: ControlKind,
    pub folder: Folder,
}

impl ControlSpec {
    /// Clamp a number into this control's range and snap it to the slider
    /// step. Non-slider controls pass it through unchanged.
    ///
    /// Snapped values are rounded to `NUM_DECIMALS` places, so they print in
    /// markup exactly as stored.
    pub fn clamp(&self, value: f64) -> f64 {
        match self.kind {
            ControlKind::Slider { min, max, step } => {
                let snapped = if step > 0.0 {
                    min + ((value - min) / step).round() * step
                } else {
                    value
                };
                let scale = 10f64.powi(NUM_DECIMALS as i32);
                ((snapped * scale).round() / scale).clamp(min, max)
            }
            _ => value,
        }
    }
}

const fn spec(field: Field, label: &'static str, kind: ControlKind, folder: Folder) -> ControlSpec {
    ControlSpec {
        field,
        label,
        kind,
        folder,
    }
}

const DEBUG: ControlSpec = spec(Field::Debug, "debug", ControlKind::Toggle, Folder::Root);
const TOP: ControlSpec = spec(Field::Top, "top", ControlKind::Toggle, Folder::Root);
const MODE: ControlSpec = spec(
    Field::Preset,
    "mode",
    ControlKind::Select {
        options: Preset::NAMES,
    },
    Folder::Root,
);
const THEME: ControlSpec = spec(
    Field::Theme,
    "theme",
    ControlKind::Select {
        options: Theme::NAMES,
    },
    Folder::Root,
);
const FROST: ControlSpec =
    spec(Field::Frost, "frost", ControlKind::slider(FROST_RANGE), Folder::Settings);
const ICONS: ControlSpec = spec(Field::Icons, "icons", ControlKind::Toggle, Folder::Settings);
const WIDTH: ControlSpec =
    spec(Field::Width, "width (px)", ControlKind::slider(WIDTH_RANGE), Folder::Settings);
const HEIGHT: ControlSpec =
    spec(Field::Height, "height (px)", ControlKind::slider(HEIGHT_RANGE), Folder::Settings);
const RADIUS: ControlSpec =
    spec(Field::Radius, "radius (px)", ControlKind::slider(RADIUS_RANGE), Folder::Settings);
const BORDER: ControlSpec =
    spec(Field::Border, "border", ControlKind::slider(BORDER_RANGE), Folder::Settings);
const ALPHA: ControlSpec =
    spec(Field::Alpha, "alpha", ControlKind::slider(ALPHA_RANGE), Folder::Settings);
const LIGHTNESS: ControlSpec =
    spec(Field::Lightness, "lightness", ControlKind::slider(LIGHTNESS_RANGE), Folder::Settings);
const BLUR: ControlSpec =
    spec(Field::Blur, "input blur", ControlKind::slider(BLUR_RANGE), Folder::Settings);
const DISPLACE: ControlSpec =
    spec(Field::Displace, "output blur", ControlKind::slider(OUTPUT_BLUR_RANGE), Folder::Settings);
const CHANNEL_X: ControlSpec = spec(
    Field::X,
    "channel x",
    ControlKind::Select {
        options: Channel::NAMES,
    },
    Folder::Settings,
);
const CHANNEL_Y: ControlSpec = spec(
    Field::Y,
    "channel y",
    ControlKind::Select {
        options: Channel::NAMES,
    },
    Folder::Settings,
);
const BLEND: ControlSpec = spec(
    Field::Blend,
    "blend",
    ControlKind::Select {
        options: BlendMode::NAMES,
    },
    Folder::Settings,
);
const SCALE: ControlSpec =
    spec(Field::Scale, "scale", ControlKind::slider(SCALE_RANGE), Folder::Settings);
const RED: ControlSpec =
    spec(Field::R, "red", ControlKind::slider(CHANNEL_OFFSET_RANGE), Folder::Chromatic);
const GREEN: ControlSpec =
    spec(Field::G, "green", ControlKind::slider(CHANNEL_OFFSET_RANGE), Folder::Chromatic);
const BLUE: ControlSpec =
    spec(Field::B, "blue", ControlKind::slider(CHANNEL_OFFSET_RANGE), Folder::Chromatic);

/// Every control in panel order.
pub const SPECS: &[ControlSpec] = &[
    DEBUG, TOP, MODE, THEME, FROST, ICONS, WIDTH, HEIGHT, RADIUS, BORDER, ALPHA, LIGHTNESS, BLUR,
    DISPLACE, CHANNEL_X, CHANNEL_Y, BLEND, SCALE, RED, GREEN, BLUE,
];

fn expect_bool(field: Field, value: &ControlValue) -> Result<bool, ParamError> {
    match value {
        ControlValue::Bool(b) => Ok(*b),
        other => Err(wrong_kind(field, "bool", other)),
    }
}

fn expect_number(field: Field, value: &ControlValue) -> Result<f64, ParamError> {
    match value {
        ControlValue::Number(n) if n.is_finite() => {
            let clamped = field.spec().clamp(*n);
            if clamped != *n {
                log::debug!("[controls] {} adjusted {} -> {}", field, n, clamped);
            }
            Ok(clamped)
        }
        ControlValue::Number(_) => Err(ParamError::NonFinite { field: field.key() }),
        other => Err(wrong_kind(field, "number", other)),
    }
}

fn expect_choice<T: FromStr<Err = ParamError>>(
    field: Field,
    value: &ControlValue,
) -> Result<T, ParamError> {
    match value {
        ControlValue::Choice(s) => s.parse(),
        other => Err(wrong_kind(field, "choice", other)),
    }
}

fn wrong_kind(field: Field, expected: &'static str, got: &ControlValue) -> ParamError {
    ParamError::WrongKind {
        field: field.key(),
        expected,
        got: got.kind_name(),
    }
}

impl GlassParams {
    /// Reduce one control change into a new snapshot.
    ///
    /// Numbers are clamped to the control's slider range and snapped to its
    /// step. Selecting a preset replaces every preset-owned field at once.
    pub fn with_change(&self, field: Field, value: ControlValue) -> Result<Self, ParamError> {
        let mut next = self.clone();
        match field {
            Field::Preset => {
                let preset: Preset = expect_choice(field, &value)?;
                return Ok(self.with_preset(preset));
            }
            Field::Debug => next.debug = expect_bool(field, &value)?,
            Field::Top => next.top = expect_bool(field, &value)?,
            Field::Icons => next.icons = expect_bool(field, &value)?,
            Field::Theme => next.theme = expect_choice(field, &value)?,
            Field::X => next.x = expect_choice(field, &value)?,
            Field::Y => next.y = expect_choice(field, &value)?,
            Field::Blend => next.blend = expect_choice(field, &value)?,
            Field::Frost => next.frost = expect_number(field, &value)?,
            Field::Width => next.width = expect_number(field, &value)?,
            Field::Height => next.height = expect_number(field, &value)?,
            Field::Radius => next.radius = expect_number(field, &value)?,
            Field::Border => next.border = expect_number(field, &value)?,
            Field::Alpha => next.alpha = expect_number(field, &value)?,
            Field::Lightness => next.lightness = expect_number(field, &value)?,
            Field::Blur => next.blur = expect_number(field, &value)?,
            Field::Displace => next.displace = expect_number(field, &value)?,
            Field::Scale => next.scale = expect_number(field, &value)?,
            Field::R => next.r = expect_number(field, &value)?,
            Field::G => next.g = expect_number(field, &value)?,
            Field::B => next.b = expect_number(field, &value)?,
        }
        Ok(next)
    }

    /// Read one field back as the value its control displays.
    pub fn value(&self, field: Field) -> ControlValue {
        let choice = |s: &str| ControlValue::Choice(s.to_string());
        match field {
            Field::Debug => ControlValue::Bool(self.debug),
            Field::Top => ControlValue::Bool(self.top),
            Field::Icons => ControlValue::Bool(self.icons),
            Field::Preset => choice(self.preset.as_str()),
            Field::Theme => choice(self.theme.as_str()),
            Field::X => choice(self.x.as_str()),
            Field::Y => choice(self.y.as_str()),
            Field::Blend => choice(self.blend.as_str()),
            Field::Frost => ControlValue::Number(self.frost),
            Field::Width => ControlValue::Number(self.width),
            Field::Height => ControlValue::Number(self.height),
            Field::Radius => ControlValue::Number(self.radius),
            Field::Border => ControlValue::Number(self.border),
            Field::Alpha => ControlValue::Number(self.alpha),
            Field::Lightness => ControlValue::Number(self.lightness),
            Field::Blur => ControlValue::Number(self.blur),
            Field::Displace => ControlValue::Number(self.displace),
            Field::Scale => ControlValue::Number(self.scale),
            Field::R => ControlValue::Number(self.r),
            Field::G => ControlValue::Number(self.g),
            Field::B => ControlValue::Number(self.b),
        }
    }
}
