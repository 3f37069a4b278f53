//! Network module - deployment profiles and version-byte lookup

mod params;
mod registry;

pub use params::*;
pub use registry::*;
