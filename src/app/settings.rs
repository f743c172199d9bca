//! Optional user settings read from `settings.toml`.
//!
//! The file lives in the platform config directory
//! (`~/.config/stampprompt/settings.toml` on Linux). It is only read, never
//! written, and none of the form state goes into it.
//!
//! # settings.toml Format
//!
//! ```toml
//! theme = "Mocha"
//! log_filter = "stampprompt=debug,egui=warn"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

pub const DEFAULT_LOG_FILTER: &str =
    "stampprompt=info,eframe=info,egui=warn,wgpu=warn,winit=warn,arboard=warn";

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 4] = [
        ThemeChoice::Latte,
        ThemeChoice::Frappe,
        ThemeChoice::Macchiato,
        ThemeChoice::Mocha,
    ];

    pub fn apply(self, ctx: &egui::Context) {
        match self {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: ThemeChoice,
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppSettings {
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "", "stampprompt")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    /// Settings from the default location. A missing file gives defaults;
    /// an unreadable or invalid one is an error the caller decides about.
    pub fn try_load() -> anyhow::Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!("No settings file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let settings: AppSettings = toml::from_str(contents)?;
        if settings.log_filter.trim().is_empty() {
            anyhow::bail!("log_filter must not be empty");
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = AppSettings::from_toml("").unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.theme, ThemeChoice::Latte);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = AppSettings::from_toml("theme = \"Mocha\"").unwrap();
        assert_eq!(settings.theme, ThemeChoice::Mocha);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_rejects_unknown_theme_and_blank_filter() {
        assert!(AppSettings::from_toml("theme = \"Solarized\"").is_err());
        assert!(AppSettings::from_toml("log_filter = \"  \"").is_err());
    }
}
