//! Navigation bar configuration
//!
//! Stored as JSON. Both fields are optional; missing tabs fall back to the
//! built-in tab set.

use serde::{Deserialize, Serialize};
use std::path::Path;

use navtab_routes::{TabDefinition, TabSet};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default `tracing` filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Tabs in declaration order; earlier tabs win overlapping paths
    #[serde(default = "default_tabs")]
    pub tabs: Vec<TabDefinition>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_tabs() -> Vec<TabDefinition> {
    vec![
        TabDefinition::new("Home", "/home"),
        TabDefinition::new("Pay", "/pay").with_prefixes(["/payment", "/scan"]),
        TabDefinition::new("Invest", "/invest").with_prefixes(["/stocks"]),
        TabDefinition::new("Profile", "/profile").with_prefixes(["/notifications"]),
    ]
}

impl Config {
    pub fn new(tabs: Vec<TabDefinition>) -> Self {
        Self {
            log_filter: default_log_filter(),
            tabs,
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            tabs = config.tabs.len(),
            "Loaded navigation config"
        );

        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Build the validated tab set
    pub fn tab_set(&self) -> Result<TabSet> {
        Ok(TabSet::new(self.tabs.clone())?)
    }

    fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("log_filter cannot be empty".to_string()));
        }
        Ok(TabSet::check(&self.tabs)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(default_tabs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navtab_routes::RouteError;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("navtab-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");

        let labels: Vec<&str> = config.tabs.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Home", "Pay", "Invest", "Profile"]);

        let set = config.tab_set().unwrap();
        assert!(set.overlaps().is_empty());
        assert_eq!(set.classify(&"/notifications/42".into()).unwrap().label(), "Profile");
    }

    #[test]
    fn test_from_json_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_json(
            r#"{"log_filter":"navtab=debug","tabs":[{"label":"Home","primary_path":"/home"}]}"#,
        )
        .unwrap();
        assert_eq!(config.log_filter, "navtab=debug");
        assert_eq!(config.tabs.len(), 1);
    }

    #[test]
    fn test_from_json_rejects_invalid_tabs() {
        let result = Config::from_json(
            r#"{"tabs":[{"label":"Pay","primary_path":"/pay","match_prefixes":["scan"]}]}"#,
        );
        assert!(matches!(
            result,
            Err(CoreError::Route(RouteError::InvalidPrefix { .. }))
        ));

        let result = Config::from_json(r#"{"log_filter":" "}"#);
        assert!(matches!(result, Err(CoreError::Config(_))));

        let result = Config::from_json("not json");
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_overlapping_tabs_pass_validation() {
        let config = Config::from_json(
            r#"{"tabs":[
                {"label":"Account","primary_path":"/account"},
                {"label":"Security","primary_path":"/account/security"}
            ]}"#,
        )
        .unwrap();

        // Validation does not build a set; the overlap surfaces once here.
        let set = config.tab_set().unwrap();
        assert_eq!(set.overlaps().len(), 1);
        assert_eq!(TabSet::check(&config.tabs), Ok(()));
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save-load");
        let config = Config::new(vec![
            TabDefinition::new("Home", "/home"),
            TabDefinition::new("Cards", "/cards").with_prefix("/cards/virtual"),
        ]);

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(temp_path("missing"));
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
