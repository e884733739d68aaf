//! Miscellaneous utilities for rmtk.
//!
//! - [cli]: command-line parsing
//! - [helpers]: home directory expansion and width clipping for display strings

pub mod cli;
pub mod helpers;

pub use helpers::{clip_to_width, expand_home_path, get_home};
