//! Configuration for rmtk.
//!
//! - [load]: locating, reading and generating `rmtk.toml`, and the main [Config] struct.
//! - [general]: the `[general]` and `[viewer]` tables.

pub mod general;
pub mod load;

pub use general::{General, Viewer};
pub use load::Config;
