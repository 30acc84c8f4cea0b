use crate::filter::FilterNodes;
use glass_core::{
    fmt_num, ChannelScales, ChannelSelectors, FilterGraph, LayoutTarget, LayoutVars,
    PresentationFlags,
};
use web_sys as web;

/// CSS custom property holding the current map, shown by the page in debug mode.
const MAP_IMAGE_VAR: &str = "--map-image";

/// The live filter graph plus the root element that carries layout variables.
pub struct DomSurface {
    nodes: FilterNodes,
    root: web::HtmlElement,
}

impl DomSurface {
    pub fn new(nodes: FilterNodes, root: web::HtmlElement) -> Self {
        Self { nodes, root }
    }
}

impl FilterGraph for DomSurface {
    fn set_image_source(&mut self, href: &str) {
        _ = self.nodes.image.set_attribute("href", href);
        _ = self
            .root
            .style()
            .set_property(MAP_IMAGE_VAR, &format!("url(\"{}\")", href));
    }

    fn set_displacement(&mut self, selectors: ChannelSelectors, scales: ChannelScales) {
        for (node, scale) in self.nodes.channels.iter().zip(scales.per_channel()) {
            _ = node.set_attribute("xChannelSelector", selectors.x.as_str());
            _ = node.set_attribute("yChannelSelector", selectors.y.as_str());
            _ = node.set_attribute("scale", &fmt_num(scale));
        }
    }

    fn set_blur(&mut self, std_deviation: f64) {
        _ = self
            .nodes
            .blur
            .set_attribute("stdDeviation", &fmt_num(std_deviation));
    }
}

impl LayoutTarget for DomSurface {
    fn set_layout(&mut self, vars: &LayoutVars) {
        let style = self.root.style();
        for (name, value) in vars.css_declarations() {
            _ = style.set_property(name, &value);
        }
    }

    fn set_flags(&mut self, flags: &PresentationFlags) {
        for (name, value) in flags.data_attributes() {
            _ = self.root.set_attribute(name, value);
        }
    }
}
