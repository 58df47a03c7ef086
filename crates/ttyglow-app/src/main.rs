mod hook;
mod login;
mod run;
mod session;

use anyhow::Result;

use ttyglow_config::Settings;
use ttyglow_core::{assets::Assets, logging};
use ttyglow_stats::SystemCollector;

use crate::hook::ExitHook;
use crate::run::Dashboard;
use crate::session::TerminalSession;

fn load_settings() -> Settings {
    match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("warning: {err:#}; using default settings");
            Settings::default()
        }
    }
}

fn main() -> Result<()> {
    let settings = load_settings();

    // Registered first so it runs on every way out, and drops after the
    // terminal is restored.
    let _restart_login = ExitHook::new(|| login::restart_or_report(&settings));

    match logging::init(settings.log_dir.as_deref()) {
        Some(dir) => tracing::info!(log_dir = %dir.display(), "ttyglow starting up"),
        None => eprintln!("warning: no usable log directory; file logging disabled"),
    }

    let asset_dir = settings.asset_dir();
    let assets = Assets::load(&asset_dir);
    tracing::info!(
        asset_dir = %asset_dir.display(),
        logo_lines = assets.logo.len(),
        mascot_lines = assets.mascot.len(),
        "assets loaded"
    );

    let mut dashboard = Dashboard::new(SystemCollector::new(), assets);
    tracing::info!(interface = dashboard.interface(), "dashboard ready");
    let frames = dashboard.run_in(TerminalSession::enter);

    tracing::info!(frames, "ttyglow exiting");
    Ok(())
}
