use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_MEMBERS_URL, DEFAULT_TEAMS_URL, MEMBERS_URL_ENV, TEAMS_URL_ENV};
use crate::error::{RosterError, RosterResult};
use crate::store::AssignedOrdering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_teams_url")]
    pub teams_url: String,
    #[serde(default = "default_members_url")]
    pub members_url: String,
    #[serde(default)]
    pub assigned_ordering: AssignedOrdering,
}

fn default_teams_url() -> String {
    DEFAULT_TEAMS_URL.to_string()
}

fn default_members_url() -> String {
    DEFAULT_MEMBERS_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            teams_url: default_teams_url(),
            members_url: default_members_url(),
            assigned_ordering: AssignedOrdering::default(),
        }
    }
}

impl Config {
    /// Environment variables win over whatever the file says.
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var(TEAMS_URL_ENV) {
            self.teams_url = url;
        }
        if let Ok(url) = env::var(MEMBERS_URL_ENV) {
            self.members_url = url;
        }
        self
    }
}

pub fn config_path() -> RosterResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| RosterError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Load the config from the home directory, falling back to defaults.
pub fn load_config() -> Config {
    let file_config = match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    };
    file_config.apply_env_overrides()
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    fs::read_to_string(path)
        .ok()
        .and_then(|config_str| serde_json::from_str(&config_str).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> RosterResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> RosterResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;

    Ok(())
}
