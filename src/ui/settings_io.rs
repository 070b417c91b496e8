use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::llm_client::api_key_from_env;
use crate::ui::settings::AppSettings;

const APP_DIR: &str = "green_prom_planner";

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push("settings.json");
    path
}

/// Loads settings, falling back to defaults if the file is missing or bad.
/// The remote API key always comes from the environment.
pub fn load_settings() -> AppSettings {
    let path = settings_path();
    let mut settings = match load_from(&path) {
        Ok(Some(settings)) => settings,
        Ok(None) => AppSettings::default(),
        Err(e) => {
            tracing::warn!("Using default settings: {:#}", e);
            AppSettings::default()
        }
    };

    settings.remote.api_key = api_key_from_env();
    settings
}

pub fn save_settings(settings: &AppSettings) -> anyhow::Result<()> {
    save_to(&settings_path(), settings)
}

fn load_from(path: &Path) -> anyhow::Result<Option<AppSettings>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let settings: AppSettings = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", path.display()))?;

    Ok(Some(settings.sanitized()))
}

fn save_to(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}
