/// DOM hooks and filter-graph constants for the web front-end.
///
/// The host page provides the elements named here; the filter itself is built
/// by `filter::mount`.
// Page elements
pub const EFFECT_SELECTOR: &str = ".effect";
pub const PLACEHOLDER_SELECTOR: &str = ".dock-placeholder";
pub const PANE_CONTAINER_ID: &str = "pane-container";
pub const PANE_TITLE: &str = "Glass Controls";

// Filter graph
pub const FILTER_CLASS: &str = "filter";
pub const FILTER_ID: &str = "filter";
pub const MAP_RESULT: &str = "map";
pub const CHANNEL_IDS: [&str; 3] = ["redchannel", "greenchannel", "bluechannel"];
pub const CHANNEL_RESULTS: [&str; 3] = ["red", "green", "blue"];

// feColorMatrix rows that keep one colour channel plus alpha
pub const CHANNEL_MATRICES: [&str; 3] = [
    "1 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0",
    "0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0 0 0 1 0",
    "0 0 0 0 0 0 0 0 0 0 0 0 1 0 0 0 0 0 1 0",
];

// Attribute values the graph starts with before the first sync
pub const INITIAL_OUTPUT_BLUR: f64 = 0.7;
pub const INITIAL_SELECTORS: (&str, &str) = ("R", "G");
