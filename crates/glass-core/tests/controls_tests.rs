// Integration tests for the single (field, value) dispatch.

use glass_core::*;

#[test]
fn numbers_are_clamped_to_slider_range() {
    let p = GlassParams::default();
    let wide = p.with_change(Field::Width, ControlValue::Number(9000.0)).unwrap();
    assert_eq!(wide.width, 500.0);
    let narrow = p.with_change(Field::Width, ControlValue::Number(1.0)).unwrap();
    assert_eq!(narrow.width, 80.0);
    let border = p.with_change(Field::Border, ControlValue::Number(1.5)).unwrap();
    assert_eq!(border.border, 1.0);
    let red = p.with_change(Field::R, ControlValue::Number(-250.0)).unwrap();
    assert_eq!(red.r, -100.0);
}

#[test]
fn numbers_are_snapped_to_slider_step() {
    let p = GlassParams::default();
    let wide = p.with_change(Field::Width, ControlValue::Number(200.123456)).unwrap();
    assert_eq!(wide.width, 200.0);
    let svg = DisplacementMap::from_params(&wide).to_svg();
    assert!(svg.contains(r#"viewBox="0 0 200 96""#), "{svg}");

    let alpha = p.with_change(Field::Alpha, ControlValue::Number(0.456789)).unwrap();
    assert_eq!(alpha.alpha, 0.46);
    let blur = p.with_change(Field::Displace, ControlValue::Number(1.26)).unwrap();
    assert_eq!(blur.displace, 1.3);
    let red = p.with_change(Field::R, ControlValue::Number(-7.6)).unwrap();
    assert_eq!(red.r, -8.0);
}

#[test]
fn change_only_touches_its_field() {
    let p = GlassParams::default();
    let next = p.with_change(Field::Scale, ControlValue::Number(-250.0)).unwrap();
    assert_eq!(next, GlassParams { scale: -250.0, ..p.clone() });
    // the previous snapshot is untouched
    assert_eq!(p.scale, -180.0);
}

#[test]
fn choices_are_parsed() {
    let p = GlassParams::default();
    let p = p.with_change(Field::Blend, ControlValue::Choice("color-dodge".into())).unwrap();
    assert_eq!(p.blend, BlendMode::ColorDodge);
    let p = p.with_change(Field::X, ControlValue::Choice("G".into())).unwrap();
    assert_eq!(p.x, Channel::G);
    let p = p.with_change(Field::Theme, ControlValue::Choice("dark".into())).unwrap();
    assert_eq!(p.theme, Theme::Dark);
}

#[test]
fn preset_field_routes_to_preset_application() {
    let p = GlassParams {
        debug: true,
        ..GlassParams::default()
    };
    let via_dispatch = p
        .with_change(Field::Preset, ControlValue::Choice("bubble".into()))
        .unwrap();
    assert_eq!(via_dispatch, p.with_preset(Preset::Bubble));
    assert!(via_dispatch.debug);
}

#[test]
fn misuse_is_reported() {
    let p = GlassParams::default();
    assert!(matches!(
        p.with_change(Field::Width, ControlValue::Bool(true)),
        Err(ParamError::WrongKind { field: "width", .. })
    ));
    assert!(matches!(
        p.with_change(Field::Blend, ControlValue::Choice("sparkle".into())),
        Err(ParamError::UnknownChoice { .. })
    ));
    assert!(matches!(
        p.with_change(Field::Height, ControlValue::Number(f64::NAN)),
        Err(ParamError::NonFinite { field: "height" })
    ));
}

#[test]
fn value_reads_back_what_was_set() {
    let p = GlassParams::default();
    for field in Field::ALL {
        let v = p.value(field);
        let again = p.with_change(field, v.clone()).unwrap();
        assert_eq!(again.value(field), v, "{field}");
    }
    assert_eq!(p.value(Field::Preset), ControlValue::Choice("dock".into()));
    assert_eq!(p.value(Field::Width), ControlValue::Number(336.0));
}

#[test]
fn select_options_parse_back() {
    for spec in SPECS {
        if let ControlKind::Select { options } = spec.kind {
            for option in options {
                let v = ControlValue::Choice(option.to_string());
                assert!(
                    GlassParams::default().with_change(spec.field, v).is_ok(),
                    "{} rejects {option}",
                    spec.field
                );
            }
        }
    }
}

#[test]
fn panel_groups_follow_folders() {
    let chromatic: Vec<Field> = SPECS
        .iter()
        .filter(|s| s.folder == Folder::Chromatic)
        .map(|s| s.field)
        .collect();
    assert_eq!(chromatic, vec![Field::R, Field::G, Field::B]);
    assert_eq!(SPECS[2].label, "mode");
}
