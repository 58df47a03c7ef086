/// Metrics collector wrapping `sysinfo`.
///
/// Every call to [`MetricsSource::snapshot`] performs targeted refreshes and
/// builds a fresh [`Snapshot`]; nothing is cached between frames apart from
/// the `sysinfo` handles themselves.
use std::path::Path;

use sysinfo::{Component, Components, Disks, Networks, System};

use ttyglow_core::snapshot::{MetricsSource, Snapshot, Uptime, NOT_AVAILABLE};

use crate::net::{first_ipv4, pick_primary};

/// Mount point whose usage is reported as disk usage.
const ROOT_MOUNT: &str = "/";

/// `sysinfo`-backed [`MetricsSource`].
pub struct SystemCollector {
    sys: System,
    disks: Disks,
    networks: Networks,
}

impl SystemCollector {
    /// Create a collector and take the CPU baseline.
    ///
    /// The first sysinfo CPU reading is always 0%, so one refresh happens
    /// here and the first snapshot already shows a real delta.
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();

        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
        }
    }

    fn memory_percent(&self) -> f32 {
        let total = self.sys.total_memory();
        if total == 0 {
            return 0.0;
        }
        let used = total.saturating_sub(self.sys.available_memory());
        used as f32 / total as f32 * 100.0
    }

    fn root_disk_percent(&self) -> f32 {
        self.disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == Path::new(ROOT_MOUNT))
            .filter(|disk| disk.total_space() > 0)
            .map(|disk| {
                let used = disk.total_space().saturating_sub(disk.available_space());
                used as f32 / disk.total_space() as f32 * 100.0
            })
            .unwrap_or(0.0)
    }

    /// Address, MAC and byte counters of `interface`.
    fn interface_details(&self, interface: &str) -> (String, String, u64, u64) {
        let Some(data) = self.networks.list().get(interface) else {
            tracing::debug!(interface, "interface not found");
            return (NOT_AVAILABLE.into(), NOT_AVAILABLE.into(), 0, 0);
        };

        let ip = first_ipv4(data.ip_networks().iter().map(|net| net.addr))
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.into());
        let mac = data.mac_address();
        let mac = if mac.is_unspecified() {
            NOT_AVAILABLE.into()
        } else {
            mac.to_string()
        };

        (ip, mac, data.total_transmitted(), data.total_received())
    }
}

impl Default for SystemCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// First sensor reporting a non-zero temperature, formatted to one decimal.
fn read_temperature() -> String {
    let components = Components::new_with_refreshed_list();
    components
        .iter()
        .filter_map(Component::temperature)
        .find(|t| *t != 0.0 && t.is_finite())
        .map(|t| format!("{t:.1}"))
        .unwrap_or_else(|| NOT_AVAILABLE.into())
}

impl MetricsSource for SystemCollector {
    fn primary_interface(&mut self) -> String {
        self.networks.refresh(true);
        let name = pick_primary(self.networks.list().iter().map(|(name, data)| {
            (
                name.as_str(),
                data.ip_networks().iter().map(|net| net.addr).collect::<Vec<_>>(),
            )
        }));
        tracing::info!(interface = %name, "primary interface selected");
        name
    }

    fn snapshot(&mut self, interface: &str) -> Snapshot {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();
        self.disks.refresh(true);
        self.networks.refresh(true);

        let (ip, mac, bytes_sent, bytes_recv) = self.interface_details(interface);

        Snapshot {
            hostname: System::host_name().unwrap_or_else(|| NOT_AVAILABLE.into()),
            time: chrono::Local::now().format("%H:%M:%S").to_string(),
            cpu_pct: self.sys.global_cpu_usage(),
            ram_pct: self.memory_percent(),
            disk_pct: self.root_disk_percent(),
            uptime: Uptime::from_secs(System::uptime()),
            ip,
            mac,
            temperature_c: read_temperature(),
            bytes_sent,
            bytes_recv,
        }
    }
}
