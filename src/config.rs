use crate::error::{DashboardError, Result};
use crate::state::{MenuItem, SectionRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "h4-console";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub sidebar: SidebarConfig,
    pub font: FontConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    /// Replaces the built-in sidebar menu when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<MenuItem>>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Sidebar layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SidebarConfig {
    /// Width of the expanded sidebar (in pixels)
    pub expanded_width: f32,
    /// Width of the icon-only sidebar (in pixels)
    pub collapsed_width: f32,
    /// Open the dashboard with the sidebar collapsed
    pub start_collapsed: bool,
}

/// Font and text rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FontConfig {
    /// Size of the main interface font (in points)
    pub font_size: f32,
    /// Size of icons (in points)
    pub icon_size: f32,
}

/// Where destination clusters and applications come from
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct InventoryConfig {
    /// JSON inventory file; the built-in sample data is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            sidebar: SidebarConfig {
                expanded_width: 288.0,
                collapsed_width: 64.0,
                start_collapsed: false,
            },
            font: FontConfig {
                font_size: 13.0,
                icon_size: 16.0,
            },
            inventory: InventoryConfig::default(),
            menu: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(&path)
            .map_err(DashboardError::from)
            .and_then(|contents| Self::parse(&contents))
        {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "using default configuration: {e}");
                Config::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        // Reject a broken menu at load time rather than mid-session
        config.registry()?;
        Ok(config)
    }

    /// The sidebar menu, either configured or built in.
    pub fn registry(&self) -> Result<SectionRegistry> {
        match &self.menu {
            Some(items) => SectionRegistry::new(items.clone()),
            None => Ok(SectionRegistry::default()),
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(DashboardError::NoConfigDir)?;
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
                tracing::info!(path = %path.display(), "wrote default configuration");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Section;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.sidebar.expanded_width, 288.0);
        assert_eq!(config.sidebar.collapsed_width, 64.0);
        assert!(!config.sidebar.start_collapsed);
        assert_eq!(config.font.font_size, 13.0);
        assert!(config.inventory.path.is_none());
        assert_eq!(config.registry().unwrap(), SectionRegistry::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized = Config::parse(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.sidebar.expanded_width, deserialized.sidebar.expanded_width);
    }

    #[test]
    fn test_custom_menu() {
        let toml_str = r#"
            [theme]
            mode = "light"

            [sidebar]
            expanded_width = 260.0
            collapsed_width = 56.0
            start_collapsed = true

            [font]
            font_size = 12.0
            icon_size = 14.0

            [inventory]
            path = "/srv/h4/clusters.json"

            [[menu]]
            section = "Deploy"
            icon = "workflow"
            sub_items = ["ArgoApplication", "DestinationCluster"]

            [[menu]]
            section = "Settings"
            icon = "settings"
        "#;

        let config = Config::parse(toml_str).expect("Failed to parse");
        assert!(config.sidebar.start_collapsed);
        assert_eq!(
            config.inventory.path.as_deref(),
            Some(std::path::Path::new("/srv/h4/clusters.json"))
        );
        let registry = config.registry().unwrap();
        assert_eq!(
            registry.get(Section::Deploy).unwrap().sub_items,
            ["ArgoApplication", "DestinationCluster"]
        );
        assert!(registry.get(Section::Bill).is_err());
    }

    #[test]
    fn test_bad_menu_is_rejected() {
        let toml_str = r#"
            [theme]
            mode = "dark"
            [sidebar]
            expanded_width = 288.0
            collapsed_width = 64.0
            start_collapsed = false
            [font]
            font_size = 13.0
            icon_size = 16.0

            [[menu]]
            section = "Billing"
            icon = "credit-card"
        "#;
        assert!(Config::parse(toml_str).is_err());

        let toml_str = toml_str.replace("Billing", "Bill");
        assert!(matches!(
            Config::parse(&toml_str),
            Err(DashboardError::InvalidRegistry(_))
        ));
    }
}
