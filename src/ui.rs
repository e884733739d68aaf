//! Terminal UI for rmtk.
//!
//! - [render]: projects navigator state onto the screen and draws it
//! - [widgets]: small ratatui drawing helpers

pub mod render;
pub mod widgets;

pub use render::{Screen, render, viewport_height};
