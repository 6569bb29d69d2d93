//! Rendering of conversion results.

mod json;

pub use json::{from_json, to_json, write_json, JsonFormat};
