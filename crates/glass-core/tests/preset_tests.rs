// Integration tests for preset bundles and their application.

use glass_core::*;

#[test]
fn defaults_equal_dock_preset() {
    let params = GlassParams::default();
    assert_eq!(params.preset, Preset::Dock);
    assert_eq!(params, params.with_preset(Preset::Dock));
    assert_eq!(params.theme, Theme::System);
    assert!(!params.debug && !params.top);
    assert_eq!((params.width, params.height, params.radius), (336.0, 96.0, 16.0));
}

#[test]
fn pill_keeps_meta_fields() {
    let before = GlassParams {
        theme: Theme::Dark,
        debug: true,
        top: true,
        ..GlassParams::default()
    };
    let pill = before.with_preset(Preset::Pill);
    assert_eq!(pill.preset, Preset::Pill);
    assert_eq!((pill.width, pill.height, pill.radius), (200.0, 80.0, 40.0));
    assert_eq!(pill.displace, 0.0);
    assert!(!pill.icons);
    assert_eq!(pill.theme, Theme::Dark);
    assert!(pill.debug);
    assert!(pill.top);
}

#[test]
fn bubble_replaces_every_owned_field() {
    let edited = GlassParams {
        theme: Theme::Light,
        border: 0.5,
        scale: 700.0,
        r: -40.0,
        blend: BlendMode::Hue,
        x: Channel::G,
        frost: 0.9,
        ..GlassParams::default()
    };
    let bubble = edited.with_preset(Preset::Bubble);
    let expected = GlassParams {
        theme: Theme::Light,
        ..GlassParams::default().with_preset(Preset::Bubble)
    };
    assert_eq!(bubble, expected);
    assert_eq!((bubble.width, bubble.height, bubble.radius), (140.0, 140.0, 70.0));
    assert_eq!(bubble.border, 0.07);
    assert_eq!(bubble.frost, 0.0);
}

#[test]
fn free_has_its_own_mask() {
    let free = GlassParams::default().with_preset(Preset::Free);
    assert_eq!((free.width, free.height, free.radius), (140.0, 280.0, 80.0));
    assert_eq!((free.border, free.alpha, free.lightness, free.blur), (0.15, 0.74, 60.0, 10.0));
    assert_eq!(free.scale, -300.0);
    assert_eq!(free.frost, 0.05);
}

#[test]
fn apply_bundle_is_pure() {
    let params = GlassParams::default();
    let bundle = PresetBundle::for_preset(Preset::Free);
    let a = apply_bundle(&params, &bundle);
    let b = apply_bundle(&params, &bundle);
    assert_eq!(a, b);
    assert_eq!(params, GlassParams::default());
}

#[test]
fn switching_back_restores_bundle() {
    let round_trip = GlassParams::default()
        .with_preset(Preset::Free)
        .with_preset(Preset::Pill)
        .with_preset(Preset::Dock);
    assert_eq!(round_trip, GlassParams::default());
}
