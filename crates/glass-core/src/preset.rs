//! Preset bundles and the pure merge that applies them.

use crate::constants::*;
use crate::params::{BlendMode, Channel, GlassParams, Preset, Theme};

/// Every field a preset owns. Meta fields (`theme`, `debug`, `top`) are absent
/// on purpose: they survive preset changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BundleValues {
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
}

pub const DOCK: BundleValues = BundleValues {
    width: DEFAULT_WIDTH,
    height: DEFAULT_HEIGHT,
    radius: DEFAULT_RADIUS,
    border: DEFAULT_BORDER,
    lightness: DEFAULT_LIGHTNESS,
    alpha: DEFAULT_ALPHA,
    blur: DEFAULT_BLUR,
    blend: BlendMode::Difference,
    scale: DEFAULT_SCALE,
    r: DEFAULT_CHANNEL_OFFSETS[0],
    g: DEFAULT_CHANNEL_OFFSETS[1],
    b: DEFAULT_CHANNEL_OFFSETS[2],
    x: Channel::R,
    y: Channel::B,
    displace: DEFAULT_OUTPUT_BLUR,
    frost: DEFAULT_FROST,
    icons: true,
};

pub const PILL: BundleValues = BundleValues {
    width: 200.0,
    height: 80.0,
    radius: 40.0,
    displace: 0.0,
    frost: 0.0,
    icons: false,
    ..DOCK
};

pub const BUBBLE: BundleValues = BundleValues {
    width: 140.0,
    height: 140.0,
    radius: 70.0,
    displace: 0.0,
    frost: 0.0,
    icons: false,
    ..DOCK
};

pub const FREE: BundleValues = BundleValues {
    width: 140.0,
    height: 280.0,
    radius: 80.0,
    border: 0.15,
    alpha: 0.74,
    lightness: 60.0,
    blur: 10.0,
    displace: 0.0,
    scale: -300.0,
    icons: false,
    ..DOCK
};

/// One fixed bundle per preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresetBundle {
    Dock(BundleValues),
    Pill(BundleValues),
    Bubble(BundleValues),
    Free(BundleValues),
}

impl PresetBundle {
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Dock => PresetBundle::Dock(DOCK),
            Preset::Pill => PresetBundle::Pill(PILL),
            Preset::Bubble => PresetBundle::Bubble(BUBBLE),
            Preset::Free => PresetBundle::Free(FREE),
        }
    }

    pub fn preset(&self) -> Preset {
        match self {
            PresetBundle::Dock(_) => Preset::Dock,
            PresetBundle::Pill(_) => Preset::Pill,
            PresetBundle::Bubble(_) => Preset::Bubble,
            PresetBundle::Free(_) => Preset::Free,
        }
    }

    pub fn values(&self) -> &BundleValues {
        match self {
            PresetBundle::Dock(v)
            | PresetBundle::Pill(v)
            | PresetBundle::Bubble(v)
            | PresetBundle::Free(v) => v,
        }
    }
}

/// Merge `bundle` over `params`, keeping only the meta fields of `params`.
pub fn apply_bundle(params: &GlassParams, bundle: &PresetBundle) -> GlassParams {
    log::debug!("[preset] {} -> {}", params.preset, bundle.preset());
    compose(bundle, params.theme, params.debug, params.top)
}

// Every field is listed so a new preset-owned field cannot be forgotten here.
pub(crate) fn compose(bundle: &PresetBundle, theme: Theme, debug: bool, top: bool) -> GlassParams {
    let v = bundle.values();
    GlassParams {
        width: v.width,
        height: v.height,
        radius: v.radius,
        border: v.border,
        lightness: v.lightness,
        alpha: v.alpha,
        blur: v.blur,
        blend: v.blend,
        scale: v.scale,
        r: v.r,
        g: v.g,
        b: v.b,
        x: v.x,
        y: v.y,
        displace: v.displace,
        frost: v.frost,
        icons: v.icons,
        theme,
        debug,
        top,
        preset: bundle.preset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_tag_matches_preset() {
        for p in Preset::ALL {
            assert_eq!(PresetBundle::for_preset(p).preset(), p);
        }
    }

    #[test]
    fn shared_fields_come_from_dock() {
        for v in [PILL, BUBBLE, FREE] {
            assert_eq!(v.blend, BlendMode::Difference);
            assert_eq!((v.x, v.y), (Channel::R, Channel::B));
            assert_eq!((v.r, v.g, v.b), (0.0, 10.0, 20.0));
        }
    }
}
