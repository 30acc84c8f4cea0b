//! Construction of the SVG filter the glass panel references via
//! `backdrop-filter: url(#filter)`.
//!
//! Each colour channel gets its own `feDisplacementMap` pass, isolated by an
//! `feColorMatrix`, and the three results are screened back together before a
//! final blur. Only attributes change after this is mounted.

use crate::constants::*;
use crate::dom;
use glass_core::fmt_num;
use web_sys as web;

/// Handles to the primitives that get updated on every sync.
pub struct FilterNodes {
    pub image: web::Element,
    pub channels: [web::Element; 3],
    pub blur: web::Element,
}

pub fn mount(document: &web::Document, parent: &web::Element) -> anyhow::Result<FilterNodes> {
    let svg = dom::append_with_attrs(document, parent, "svg", true, &[("class", FILTER_CLASS)])?;
    let defs = dom::append_with_attrs(document, &svg, "defs", true, &[])?;
    let filter = dom::append_with_attrs(
        document,
        &defs,
        "filter",
        true,
        &[("id", FILTER_ID), ("color-interpolation-filters", "sRGB")],
    )?;

    let image = dom::append_with_attrs(
        document,
        &filter,
        "feImage",
        true,
        &[
            ("x", "0"),
            ("y", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("result", MAP_RESULT),
            ("href", ""),
        ],
    )?;

    let mut channels = Vec::with_capacity(3);
    for i in 0..3 {
        let displaced = format!("disp-{}", CHANNEL_RESULTS[i]);
        let node = dom::append_with_attrs(
            document,
            &filter,
            "feDisplacementMap",
            true,
            &[
                ("in", "SourceGraphic"),
                ("in2", MAP_RESULT),
                ("id", CHANNEL_IDS[i]),
                ("xChannelSelector", INITIAL_SELECTORS.0),
                ("yChannelSelector", INITIAL_SELECTORS.1),
                ("result", displaced.as_str()),
            ],
        )?;
        dom::append_with_attrs(
            document,
            &filter,
            "feColorMatrix",
            true,
            &[
                ("in", displaced.as_str()),
                ("type", "matrix"),
                ("values", CHANNEL_MATRICES[i]),
                ("result", CHANNEL_RESULTS[i]),
            ],
        )?;
        channels.push(node);
    }

    dom::append_with_attrs(
        document,
        &filter,
        "feBlend",
        true,
        &[("in", "red"), ("in2", "green"), ("mode", "screen"), ("result", "rg")],
    )?;
    dom::append_with_attrs(
        document,
        &filter,
        "feBlend",
        true,
        &[("in", "rg"), ("in2", "blue"), ("mode", "screen"), ("result", "output")],
    )?;
    let std_deviation = fmt_num(INITIAL_OUTPUT_BLUR);
    let blur = dom::append_with_attrs(
        document,
        &filter,
        "feGaussianBlur",
        true,
        &[("in", "output"), ("stdDeviation", std_deviation.as_str())],
    )?;

    let channels: [web::Element; 3] = channels
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected three displacement passes"))?;
    log::info!("[filter] mounted #{}", FILTER_ID);
    Ok(FilterNodes {
        image,
        channels,
        blur,
    })
}
