//! Platform-free core of the glass displacement effect.
//!
//! Nothing in here touches the DOM. The web front-end owns the live filter
//! graph and implements [`sync::FilterGraph`] / [`sync::LayoutTarget`] over it;
//! the native front-end renders the same maps to files.

pub mod constants;
pub mod controls;
pub mod error;
pub mod map;
pub mod params;
pub mod preset;
pub mod sync;

pub use constants::*;
pub use controls::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use preset::*;
pub use sync::*;
