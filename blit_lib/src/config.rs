use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use tracing::{error, info, warn};

use crate::error::ConfigError;

/// Window and asset settings shared by every demo.
///
/// ```ini
/// [Window]
/// Title = SDL Tutorial
/// Width = 640
/// Height = 480
/// VSync = true
///
/// [Assets]
/// Root = assets
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub asset_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: "SDL Tutorial".to_string(),
            width: 640,
            height: 480,
            vsync: true,
            asset_root: PathBuf::from("assets"),
        }
    }
}

impl Settings {
    pub const DEFAULT_PATH: &'static str = "assets/config/window.ini";

    /// Reads `path`. A missing file is not an error: defaults are used instead.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!("No config file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Settings::from_ini(&ini)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`load`](Self::load), but a broken file is logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Settings::load(path).unwrap_or_else(|e| {
            error!("{}", e);
            Settings::default()
        })
    }

    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(window) = ini.section(Some("Window")) {
            if let Some(v) = window.get("Title") {
                settings.title = v.to_string();
            }
            if let Some(v) = window.get("Width") {
                settings.width = parse_positive("Window", "Width", v)?;
            }
            if let Some(v) = window.get("Height") {
                settings.height = parse_positive("Window", "Height", v)?;
            }
            if let Some(v) = window.get("VSync") {
                settings.vsync = parse_flag("Window", "VSync", v)?;
            }
        }
        if let Some(root) = ini.section(Some("Assets")).and_then(|s| s.get("Root")) {
            settings.asset_root = PathBuf::from(root);
        }

        Ok(settings)
    }

    /// Path of an asset file under the configured root.
    pub fn asset(&self, name: &str) -> PathBuf {
        self.asset_root.join(name)
    }
}

fn parse_positive(section: &'static str, key: &'static str, value: &str) -> Result<u32, ConfigError> {
    match u32::from_str(value.trim()) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::BadValue {
            section,
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_flag(section: &'static str, key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::BadValue {
            section,
            key,
            value: value.to_string(),
        }),
    }
}
