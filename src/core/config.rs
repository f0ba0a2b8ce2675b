use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Analysis endpoint override; the built-in default is used when unset.
    pub endpoint: Option<String>,
    /// UI theme name (e.g., "dark", "light").
    pub theme: Option<String>,
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(config_path: &PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();
        self.save_to_path(&config_path)
    }

    pub fn save_to_path(&self, config_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    fn get_config_path() -> PathBuf {
        let proj_dirs = ProjectDirs::from("org", "permacommons", "revlens")
            .expect("Failed to determine config directory");
        proj_dirs.config_dir().join("config.toml")
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.endpoint {
            Some(endpoint) => println!("  endpoint: {endpoint}"),
            None => println!("  endpoint: (unset)"),
        }
        match &self.theme {
            Some(theme) => println!("  theme: {theme}"),
            None => println!("  theme: (unset)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from_path(&path).unwrap();
        assert!(config.endpoint.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            endpoint: Some("https://analysis.example.com".to_string()),
            theme: Some("light".to_string()),
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.endpoint.as_deref(), Some("https://analysis.example.com"));
        assert_eq!(loaded.theme.as_deref(), Some("light"));
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let parsed: Config =
            toml::from_str("endpoint = \"https://x.example\"\nfuture_flag = true\n").unwrap();
        assert_eq!(parsed.endpoint.as_deref(), Some("https://x.example"));
    }
}
