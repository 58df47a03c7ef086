use std::path::Path;

/// File name of the logo drawn above the metrics.
pub const LOGO_FILE: &str = "logo.txt";

/// File name of the mascot art drawn below the metrics.
pub const MASCOT_FILE: &str = "mascot.txt";

/// Static text blocks loaded once at startup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Assets {
    pub logo: Vec<String>,
    pub mascot: Vec<String>,
}

impl Assets {
    /// Load both blocks from `dir`. Absent files yield empty blocks.
    pub fn load(dir: &Path) -> Self {
        Self {
            logo: load_block(dir, LOGO_FILE),
            mascot: load_block(dir, MASCOT_FILE),
        }
    }
}

/// Read a text asset as lines with trailing whitespace removed.
///
/// A missing or unreadable file is not an error; it renders as nothing.
pub fn load_block(dir: &Path, name: &str) -> Vec<String> {
    let path = dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(raw) => raw.lines().map(|line| line.trim_end().to_string()).collect(),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "asset not loaded");
            Vec::new()
        }
    }
}
