//! Plain-HTML control panel built from `glass_core::SPECS`.
//!
//! Every control carries its field key in `name`; a single delegated `input`
//! listener on the container turns any edit into one `(Field, ControlValue)`
//! dispatch.

use crate::app::GlassApp;
use crate::constants::PANE_TITLE;
use crate::dom;
use glass_core::{ControlKind, ControlValue, Field, Folder, GlassParams, ParamError, SPECS};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const FOLDERS: [Folder; 3] = [Folder::Root, Folder::Settings, Folder::Chromatic];

pub fn build(
    document: &web::Document,
    container: &web::Element,
    params: &GlassParams,
) -> anyhow::Result<()> {
    let pane = dom::append_with_attrs(document, container, "div", false, &[("class", "pane")])?;
    let title = dom::append_with_attrs(document, &pane, "div", false, &[("class", "pane-title")])?;
    title.set_text_content(Some(PANE_TITLE));

    for folder in FOLDERS {
        let group = match folder.title() {
            Some(name) => {
                let set = dom::append_with_attrs(
                    document,
                    &pane,
                    "fieldset",
                    false,
                    &[("class", "pane-folder"), ("data-folder", name)],
                )?;
                let legend = dom::append_with_attrs(document, &set, "legend", false, &[])?;
                legend.set_text_content(Some(name));
                set
            }
            None => pane.clone(),
        };
        for spec in SPECS.iter().filter(|s| s.folder == folder) {
            build_control(document, &group, spec.field, spec.label, spec.kind)?;
        }
    }
    refresh(container, params);
    Ok(())
}

fn build_control(
    document: &web::Document,
    parent: &web::Element,
    field: Field,
    label: &str,
    kind: ControlKind,
) -> anyhow::Result<()> {
    let key = field.key();
    let row = dom::append_with_attrs(
        document,
        parent,
        "label",
        false,
        &[("class", "pane-control"), ("data-field", key)],
    )?;
    let caption = dom::append_with_attrs(document, &row, "span", false, &[])?;
    caption.set_text_content(Some(label));

    match kind {
        ControlKind::Toggle => {
            dom::append_with_attrs(
                document,
                &row,
                "input",
                false,
                &[("type", "checkbox"), ("name", key)],
            )?;
        }
        ControlKind::Slider { min, max, step } => {
            let (min, max, step) = (min.to_string(), max.to_string(), step.to_string());
            dom::append_with_attrs(
                document,
                &row,
                "input",
                false,
                &[
                    ("type", "range"),
                    ("name", key),
                    ("min", min.as_str()),
                    ("max", max.as_str()),
                    ("step", step.as_str()),
                ],
            )?;
            dom::append_with_attrs(document, &row, "output", false, &[])?;
        }
        ControlKind::Select { options } => {
            let select =
                dom::append_with_attrs(document, &row, "select", false, &[("name", key)])?;
            for &option in options {
                let el =
                    dom::append_with_attrs(document, &select, "option", false, &[("value", option)])?;
                el.set_text_content(Some(option));
            }
        }
    }
    Ok(())
}

/// Show `params` in every control, e.g. after a preset replaced many fields.
pub fn refresh(container: &web::Element, params: &GlassParams) {
    for field in Field::ALL {
        refresh_field(container, params, field);
    }
}

pub fn refresh_field(container: &web::Element, params: &GlassParams, field: Field) {
    let selector = format!("[data-field=\"{}\"]", field.key());
    let Ok(Some(row)) = container.query_selector(&selector) else {
        return;
    };
    let value = params.value(field);
    let text = value.to_string();
    if let Ok(Some(el)) = row.query_selector("input, select") {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            match value {
                ControlValue::Bool(b) => input.set_checked(b),
                _ => input.set_value(&text),
            }
        } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
            select.set_value(&text);
        }
    }
    if let Ok(Some(output)) = row.query_selector("output") {
        output.set_text_content(Some(&text));
    }
}

/// Read the `(field, value)` a control currently holds. `Ok(None)` for
/// elements that are not controls.
fn read_change(target: &web::Element) -> Result<Option<(Field, ControlValue)>, ParamError> {
    let Some(name) = target.get_attribute("name") else {
        return Ok(None);
    };
    let field: Field = name.parse()?;
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        if input.type_() == "checkbox" {
            return Ok(Some((field, ControlValue::Bool(input.checked()))));
        }
        return ControlValue::parse_for(field, &input.value()).map(|v| Some((field, v)));
    }
    if let Some(select) = target.dyn_ref::<web::HtmlSelectElement>() {
        return ControlValue::parse_for(field, &select.value()).map(|v| Some((field, v)));
    }
    Ok(None)
}

pub fn wire(container: &web::Element, app: Rc<GlassApp>) {
    dom::add_listener::<web::Event>(container.as_ref(), "input", move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        match read_change(&target) {
            Ok(Some((field, value))) => app.dispatch(field, value),
            Ok(None) => {}
            Err(e) => log::warn!("[panel] ignored change: {}", e),
        }
    });
}
