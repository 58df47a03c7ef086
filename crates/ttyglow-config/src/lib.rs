//! Configuration types and loaders for ttyglow.
//!
//! Only deployment concerns are configurable: where assets and logs live and
//! which login unit is restarted on exit.

pub mod settings;

pub use settings::Settings;
