//! Pushing a parameter snapshot into the filter graph and layout.
//!
//! The live graph is owned by the front-end. This module only knows the
//! capabilities it needs ([`FilterGraph`], [`LayoutTarget`]) so the same
//! synchronisation runs against the DOM in the browser and against a plain
//! record ([`FilterState`]) natively and in tests.

use crate::map::{fmt_num, DisplacementMap};
use crate::params::{Channel, GlassParams, Preset, Theme};
use serde::Serialize;

/// Channels of the map read along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelSelectors {
    pub x: Channel,
    pub y: Channel,
}

impl ChannelSelectors {
    pub fn from_params(params: &GlassParams) -> Self {
        Self {
            x: params.x,
            y: params.y,
        }
    }
}

/// Displacement scale per output colour channel.
///
/// Each channel is displaced by a slightly different amount, which produces
/// the chromatic fringing at the rim of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChannelScales {
    pub base: f64,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ChannelScales {
    pub fn from_params(params: &GlassParams) -> Self {
        Self {
            base: params.scale,
            red: params.scale + params.r,
            green: params.scale + params.g,
            blue: params.scale + params.b,
        }
    }

    /// `[red, green, blue]`
    pub fn per_channel(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Sizing variables read by the page stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayoutVars {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub frost: f64,
}

impl LayoutVars {
    pub fn from_params(params: &GlassParams) -> Self {
        Self {
            width: params.width,
            height: params.height,
            radius: params.radius,
            frost: params.frost,
        }
    }

    /// Custom-property declarations, e.g. `("--width", "336px")`.
    pub fn css_declarations(&self) -> [(&'static str, String); 4] {
        [
            ("--width", format!("{}px", fmt_num(self.width))),
            ("--height", format!("{}px", fmt_num(self.height))),
            ("--radius", format!("{}px", fmt_num(self.radius))),
            ("--frost", fmt_num(self.frost)),
        ]
    }
}

/// Presentation switches mirrored onto the root element as `data-*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PresentationFlags {
    pub icons: bool,
    pub mode: Preset,
    pub top: bool,
    pub debug: bool,
    pub theme: Theme,
}

impl PresentationFlags {
    pub fn from_params(params: &GlassParams) -> Self {
        Self {
            icons: params.icons,
            mode: params.preset,
            top: params.top,
            debug: params.debug,
            theme: params.theme,
        }
    }

    pub fn data_attributes(&self) -> [(&'static str, &'static str); 5] {
        fn flag(b: bool) -> &'static str {
            if b {
                "true"
            } else {
                "false"
            }
        }
        [
            ("data-icons", flag(self.icons)),
            ("data-mode", self.mode.as_str()),
            ("data-top", flag(self.top)),
            ("data-debug", flag(self.debug)),
            ("data-theme", self.theme.as_str()),
        ]
    }
}

/// The filter primitives this crate drives.
pub trait FilterGraph {
    /// `href` of the `feImage` feeding the displacement passes.
    fn set_image_source(&mut self, href: &str);
    /// Channel selectors and scale of every `feDisplacementMap`.
    fn set_displacement(&mut self, selectors: ChannelSelectors, scales: ChannelScales);
    /// `stdDeviation` of the final `feGaussianBlur`.
    fn set_blur(&mut self, std_deviation: f64);
}

pub trait LayoutTarget {
    fn set_layout(&mut self, vars: &LayoutVars);
    fn set_flags(&mut self, flags: &PresentationFlags);
}

/// Push every value derived from `params` into `surface`.
///
/// The map is regenerated and applied before the scales so the graph never
/// sees new scales with a stale map. Applying the same snapshot twice leaves
/// the surface unchanged.
pub fn apply<S>(params: &GlassParams, surface: &mut S)
where
    S: FilterGraph + LayoutTarget + ?Sized,
{
    let map = DisplacementMap::from_params(params);
    surface.set_image_source(&map.to_data_uri());
    let scales = ChannelScales::from_params(params);
    surface.set_displacement(ChannelSelectors::from_params(params), scales);
    surface.set_blur(params.displace.max(0.0));
    surface.set_layout(&LayoutVars::from_params(params));
    surface.set_flags(&PresentationFlags::from_params(params));
    log::debug!(
        "[sync] {} {}x{} scales=({}, {}, {})",
        params.preset,
        params.width,
        params.height,
        scales.red,
        scales.green,
        scales.blue
    );
}

/// Everything last pushed into a surface, as plain data.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub image_source: Option<String>,
    pub selectors: Option<ChannelSelectors>,
    pub scales: Option<ChannelScales>,
    pub blur: Option<f64>,
    pub layout: Option<LayoutVars>,
    pub flags: Option<PresentationFlags>,
}

impl FilterState {
    pub fn from_params(params: &GlassParams) -> Self {
        let mut state = Self::default();
        apply(params, &mut state);
        state
    }
}

impl FilterGraph for FilterState {
    fn set_image_source(&mut self, href: &str) {
        self.image_source = Some(href.to_string());
    }

    fn set_displacement(&mut self, selectors: ChannelSelectors, scales: ChannelScales) {
        self.selectors = Some(selectors);
        self.scales = Some(scales);
    }

    fn set_blur(&mut self, std_deviation: f64) {
        self.blur = Some(std_deviation);
    }
}

impl LayoutTarget for FilterState {
    fn set_layout(&mut self, vars: &LayoutVars) {
        self.layout = Some(*vars);
    }

    fn set_flags(&mut self, flags: &PresentationFlags) {
        self.flags = Some(*flags);
    }
}
