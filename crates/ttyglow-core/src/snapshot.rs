/// Sentinel shown for any metric that could not be read.
pub const NOT_AVAILABLE: &str = "N/A";

/// Host uptime split into whole days, hours, minutes and seconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Uptime {
    /// Split a number of seconds since boot.
    pub fn from_secs(total: u64) -> Self {
        let (minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        let (days, hours) = (hours / 24, hours % 24);
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

/// A point-in-time bundle of host metrics used to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub hostname: String,
    /// Local wall-clock time as `HH:MM:SS`.
    pub time: String,
    /// Global CPU usage (0.0–100.0).
    pub cpu_pct: f32,
    /// Physical memory in use (0.0–100.0).
    pub ram_pct: f32,
    /// Root filesystem usage (0.0–100.0).
    pub disk_pct: f32,
    pub uptime: Uptime,
    /// IPv4 address of the primary interface, or [`NOT_AVAILABLE`].
    pub ip: String,
    /// MAC address of the primary interface, or [`NOT_AVAILABLE`].
    pub mac: String,
    /// Temperature in °C with one decimal, or [`NOT_AVAILABLE`].
    pub temperature_c: String,
    /// Bytes sent on the primary interface. Collected, not yet displayed.
    pub bytes_sent: u64,
    /// Bytes received on the primary interface. Collected, not yet displayed.
    pub bytes_recv: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            hostname: NOT_AVAILABLE.into(),
            time: "00:00:00".into(),
            cpu_pct: 0.0,
            ram_pct: 0.0,
            disk_pct: 0.0,
            uptime: Uptime::default(),
            ip: NOT_AVAILABLE.into(),
            mac: NOT_AVAILABLE.into(),
            temperature_c: NOT_AVAILABLE.into(),
            bytes_sent: 0,
            bytes_recv: 0,
        }
    }
}

/// Source of host metrics.
///
/// Implementations never fail observably: anything that cannot be read is
/// reported as [`NOT_AVAILABLE`] or zero.
pub trait MetricsSource {
    /// Name of the interface whose address and counters are reported.
    ///
    /// Called once at startup.
    fn primary_interface(&mut self) -> String;

    /// Take a fresh snapshot, reporting network fields for `interface`.
    fn snapshot(&mut self, interface: &str) -> Snapshot;
}
