//! Rendering layer for ttyglow.
//!
//! Builds the dashboard's [`content`] lines, centers them with [`layout`], and
//! composites a frame onto any [`surface::Surface`]. All drawing goes through
//! that trait so frames can be rendered into a plain [`ratatui`] buffer.

pub mod content;
pub mod format;
pub mod layout;
pub mod renderer;
pub mod surface;
