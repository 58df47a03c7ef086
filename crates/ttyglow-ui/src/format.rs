//! Human-readable formatting for dashboard values.
//!
//! All functions are pure and easy to test in isolation.

use ttyglow_core::snapshot::{Uptime, NOT_AVAILABLE};

/// Format a percentage value for display.
///
/// Returns `"--%"` for NaN values, otherwise formats as `"45.2%"`.
pub fn format_percent(value: f32) -> String {
    if value.is_nan() {
        "--%".into()
    } else {
        format!("{:.1}%", value)
    }
}

/// Format each uptime component with its unit suffix.
///
/// Returns `["3d", "4h", "5m", "6s"]`; zero components are kept.
pub fn format_uptime_parts(uptime: &Uptime) -> [String; 4] {
    [
        format!("{}d", uptime.days),
        format!("{}h", uptime.hours),
        format!("{}m", uptime.minutes),
        format!("{}s", uptime.seconds),
    ]
}

/// Format a temperature reading, passing the `N/A` sentinel through.
pub fn format_temperature(reading: &str) -> String {
    if reading == NOT_AVAILABLE {
        NOT_AVAILABLE.into()
    } else {
        format!("{reading}°C")
    }
}
