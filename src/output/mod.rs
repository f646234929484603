//! Output formatting for generated instances

pub mod config;
pub mod json;

pub use config::{OutputConfig, OutputStyle};
pub use json::{to_vec, SpacedFormatter};
