use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    model::Beach,
    stormglass::{DEFAULT_FORECAST_DAYS, STORMGLASS_API_URL},
};

/// StormGlass access settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StormGlassConfig {
    pub api_token: Option<String>,
    pub api_url: String,
    /// Length of the requested forecast window, in days from now.
    pub forecast_days: u32,
}

impl Default for StormGlassConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_url: STORMGLASS_API_URL.to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub stormglass: StormGlassConfig,

    /// Example TOML:
    /// [[beaches]]
    /// name = "Manly"
    /// lat = -33.792726
    /// lng = 151.289824
    /// position = "E"
    pub beaches: Vec<Beach>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml).with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "surf-forecast", "surf-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The StormGlass token, or an error telling the user how to set one.
    pub fn api_token(&self) -> Result<&str> {
        self.stormglass.api_token.as_deref().ok_or_else(|| {
            anyhow!(
                "No StormGlass API token configured.\n\
                 Hint: run `surf configure` and enter your API token."
            )
        })
    }

    pub fn set_api_token(&mut self, api_token: String) {
        self.stormglass.api_token = Some(api_token);
    }

    /// Add a beach, replacing any existing beach with the same name.
    pub fn add_beach(&mut self, beach: Beach) {
        match self.beaches.iter_mut().find(|b| b.name == beach.name) {
            Some(existing) => *existing = beach,
            None => self.beaches.push(beach),
        }
    }

    /// Remove a beach by name. Returns whether anything was removed.
    pub fn remove_beach(&mut self, name: &str) -> bool {
        let before = self.beaches.len();
        self.beaches.retain(|b| b.name != name);
        self.beaches.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BeachPosition;

    fn beach(name: &str, position: BeachPosition) -> Beach {
        Beach { name: name.into(), lat: -33.792726, lng: 151.289824, position }
    }

    #[test]
    fn api_token_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_token().unwrap_err();

        assert!(err.to_string().contains("No StormGlass API token configured"));
        assert!(err.to_string().contains("Hint: run `surf configure`"));
    }

    #[test]
    fn set_api_token() {
        let mut cfg = Config::default();
        cfg.set_api_token("TOKEN".into());

        assert_eq!(cfg.api_token().unwrap(), "TOKEN");
    }

    #[test]
    fn defaults_point_at_stormglass() {
        let cfg = Config::default();

        assert_eq!(cfg.stormglass.api_url, STORMGLASS_API_URL);
        assert_eq!(cfg.stormglass.forecast_days, 1);
        assert!(cfg.beaches.is_empty());
    }

    #[test]
    fn add_beach_replaces_same_name() {
        let mut cfg = Config::default();

        cfg.add_beach(beach("Manly", BeachPosition::East));
        cfg.add_beach(beach("Bondi", BeachPosition::North));
        cfg.add_beach(beach("Manly", BeachPosition::South));

        assert_eq!(cfg.beaches.len(), 2);
        assert_eq!(cfg.beaches[0].name, "Manly");
        assert_eq!(cfg.beaches[0].position, BeachPosition::South);
    }

    #[test]
    fn remove_beach_reports_whether_found() {
        let mut cfg = Config::default();
        cfg.add_beach(beach("Manly", BeachPosition::East));

        assert!(!cfg.remove_beach("Bondi"));
        assert!(cfg.remove_beach("Manly"));
        assert!(cfg.beaches.is_empty());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [stormglass]
            api_token = "abc"

            [[beaches]]
            name = "Manly"
            lat = -33.792726
            lng = 151.289824
            position = "E"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.api_token().unwrap(), "abc");
        assert_eq!(cfg.stormglass.api_url, STORMGLASS_API_URL);
        assert_eq!(cfg.beaches, vec![beach("Manly", BeachPosition::East)]);
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_token("TOKEN".into());
        cfg.add_beach(beach("Manly", BeachPosition::East));
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }
}
