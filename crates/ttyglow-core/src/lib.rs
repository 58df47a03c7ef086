//! Shared model and runtime plumbing for ttyglow.
//!
//! Owns the metrics [`snapshot`] model, the breathing [`clock`], static text
//! [`assets`], and [`logging`] setup. Drawing lives in `ttyglow-ui`.

pub mod assets;
pub mod clock;
pub mod logging;
pub mod snapshot;
