// Integration tests for the filter synchronizer, run against a recording
// stand-in for the live filter graph.

use glass_core::*;

#[derive(Default)]
struct RecordingGraph {
    calls: Vec<String>,
    state: FilterState,
}

impl FilterGraph for RecordingGraph {
    fn set_image_source(&mut self, href: &str) {
        self.calls.push("image".into());
        self.state.set_image_source(href);
    }

    fn set_displacement(&mut self, selectors: ChannelSelectors, scales: ChannelScales) {
        self.calls.push("displacement".into());
        self.state.set_displacement(selectors, scales);
    }

    fn set_blur(&mut self, std_deviation: f64) {
        self.calls.push("blur".into());
        self.state.set_blur(std_deviation);
    }
}

impl LayoutTarget for RecordingGraph {
    fn set_layout(&mut self, vars: &LayoutVars) {
        self.calls.push("layout".into());
        self.state.set_layout(vars);
    }

    fn set_flags(&mut self, flags: &PresentationFlags) {
        self.calls.push("flags".into());
        self.state.set_flags(flags);
    }
}

#[test]
fn channel_scales_add_offsets() {
    let scales = ChannelScales::from_params(&GlassParams::default());
    assert_eq!(scales.base, -180.0);
    assert_eq!(scales.per_channel(), [-180.0, -170.0, -160.0]);

    let p = GlassParams {
        scale: 42.0,
        r: -7.0,
        g: 0.5,
        b: 100.0,
        ..GlassParams::default()
    };
    let scales = ChannelScales::from_params(&p);
    assert_eq!(scales.per_channel(), [35.0, 42.5, 142.0]);
}

#[test]
fn apply_pushes_everything_map_first() {
    let mut graph = RecordingGraph::default();
    let params = GlassParams::default();
    sync::apply(&params, &mut graph);
    assert_eq!(graph.calls, ["image", "displacement", "blur", "layout", "flags"]);

    let state = &graph.state;
    let expected_map = DisplacementMap::from_params(&params).to_data_uri();
    assert_eq!(state.image_source.as_deref(), Some(expected_map.as_str()));
    assert_eq!(
        state.selectors,
        Some(ChannelSelectors {
            x: Channel::R,
            y: Channel::B
        })
    );
    assert_eq!(state.blur, Some(0.2));
    assert_eq!(state.layout.map(|l| l.frost), Some(0.05));
}

#[test]
fn apply_is_idempotent() {
    let params = GlassParams::default().with_preset(Preset::Free);
    let mut once = FilterState::default();
    sync::apply(&params, &mut once);
    let mut twice = once.clone();
    sync::apply(&params, &mut twice);
    assert_eq!(once, twice);
    assert_eq!(once, FilterState::from_params(&params));
}

#[test]
fn every_change_refreshes_map_and_scales() {
    let mut graph = RecordingGraph::default();
    let p = GlassParams::default();
    sync::apply(&p, &mut graph);
    let first_map = graph.state.image_source.clone();

    let p = p.with_change(Field::Width, ControlValue::Number(250.0)).unwrap();
    let p = p.with_change(Field::G, ControlValue::Number(-30.0)).unwrap();
    sync::apply(&p, &mut graph);

    assert_ne!(graph.state.image_source, first_map);
    let scales = graph.state.scales.expect("scales pushed");
    assert_eq!(scales.green, -210.0);
    assert_eq!(graph.state.layout.map(|l| l.width), Some(250.0));
}

#[test]
fn layout_declarations_carry_units() {
    let vars = LayoutVars::from_params(&GlassParams::default());
    let decls = vars.css_declarations();
    assert_eq!(decls[0], ("--width", "336px".to_string()));
    assert_eq!(decls[1], ("--height", "96px".to_string()));
    assert_eq!(decls[2], ("--radius", "16px".to_string()));
    assert_eq!(decls[3], ("--frost", "0.05".to_string()));
}

#[test]
fn flags_mirror_meta_fields() {
    let p = GlassParams {
        debug: true,
        theme: Theme::Light,
        ..GlassParams::default().with_preset(Preset::Pill)
    };
    let attrs = PresentationFlags::from_params(&p).data_attributes();
    assert!(attrs.contains(&("data-icons", "false")));
    assert!(attrs.contains(&("data-mode", "pill")));
    assert!(attrs.contains(&("data-debug", "true")));
    assert!(attrs.contains(&("data-theme", "light")));
    assert!(attrs.contains(&("data-top", "false")));
}

#[test]
fn filter_state_serializes_for_inspection() {
    let state = FilterState::from_params(&GlassParams::default());
    let json = serde_json::to_value(&state).expect("serializable");
    assert_eq!(json["scales"]["blue"], -160.0);
    assert_eq!(json["selectors"]["x"], "R");
    assert_eq!(json["flags"]["mode"], "dock");
}
