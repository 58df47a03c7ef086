use std::process::Command;

use anyhow::{bail, Context, Result};

use ttyglow_config::Settings;

/// Restart the login unit with `systemctl restart <unit>`.
pub fn restart_login(unit: &str) -> Result<()> {
    restart_with("systemctl", unit)
}

fn restart_with(program: &str, unit: &str) -> Result<()> {
    let status = Command::new(program)
        .args(["restart", unit])
        .status()
        .with_context(|| format!("failed to run {program} restart {unit}"))?;

    if !status.success() {
        bail!("{program} restart {unit} exited with {status}");
    }
    Ok(())
}

/// Exit action: restart the login prompt, reporting instead of failing.
///
/// Called after the terminal has been restored, so the message printed on
/// failure is visible on the console.
pub fn restart_or_report(settings: &Settings) {
    restart_or_report_with(settings, restart_login);
}

fn restart_or_report_with(settings: &Settings, restart: impl FnOnce(&str) -> Result<()>) {
    if !settings.restart_login {
        tracing::info!(unit = %settings.login_unit, "login restart disabled");
        return;
    }

    tracing::info!(unit = %settings.login_unit, "restarting login prompt");
    if let Err(err) = restart(&settings.login_unit) {
        tracing::error!(error = %format!("{err:#}"), "failed to restart login prompt");
        eprintln!("Failed to restart login prompt: {err:#}");
    }
}
