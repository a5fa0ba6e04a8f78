//! Configuration management for semnav.
//!
//! Parses `semnav.toml` with serde and provides auto-discovery of the
//! config file in parent directories. CLI settings can be applied during
//! load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! style = "breadcrumb"
//! last_as_link = false
//!
//! [markup]
//! list_class = "breadcrumb"
//! divider = "/"
//! base_url = "${SITE_URL:-}"
//!
//! [[navigation]]
//! name = "menu"
//!
//! [[navigation.item]]
//! id = "guide"
//! label = "Guide"
//! target = "/guide"
//!
//! [[navigation.item.item]]
//! id = "setup"
//! target = "/guide/setup"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `markup.base_url` supports `${VAR}` and `${VAR:-default}`.

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use semnav_render::{HtmlMarkup, RenderOptions, Style};
use semnav_tree::{Items, Navigation, NavigationBuilder, Registry, TreeError};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "semnav.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override rendering style.
    pub style: Option<Style>,
    /// Override the outer list class.
    pub list_class: Option<String>,
    /// Override the link base URL.
    pub base_url: Option<String>,
    /// Override the last-as-link flag.
    pub last_as_link: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default render settings.
    pub render: RenderConfig,
    /// HTML markup settings.
    pub markup: MarkupConfig,
    /// Navigation definitions.
    #[serde(rename = "navigation")]
    pub navigations: Vec<NavigationConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Default render settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Rendering style.
    pub style: Style,
    /// Default options, overridable per call.
    #[serde(flatten)]
    pub options: RenderOptions,
}

/// HTML markup settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Class of the outermost list.
    pub list_class: String,
    /// Divider text after ancestor links.
    pub divider: String,
    /// Class of active list items.
    pub active_class: String,
    /// Prefix for link targets that are not absolute URLs.
    pub base_url: Option<String>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            list_class: "breadcrumb".to_owned(),
            divider: "/".to_owned(),
            active_class: "active".to_owned(),
            base_url: None,
        }
    }
}

impl MarkupConfig {
    /// Build the HTML markup described by this section.
    #[must_use]
    pub fn html(&self) -> HtmlMarkup {
        let markup = HtmlMarkup::new(&self.list_class)
            .with_divider(&self.divider)
            .with_active_class(&self.active_class);
        match &self.base_url {
            Some(base_url) => markup.with_base_url(base_url),
            None => markup,
        }
    }
}

/// One named navigation.
#[derive(Debug, Deserialize)]
pub struct NavigationConfig {
    /// Navigation name used for lookup.
    pub name: String,
    /// Top-level items.
    #[serde(default, rename = "item")]
    pub items: Vec<ItemConfig>,
}

/// One navigation item with optional nested items.
#[derive(Debug, Deserialize)]
pub struct ItemConfig {
    /// Item id, unique within its navigation.
    pub id: String,
    /// Display text (defaults to the id).
    pub label: Option<String>,
    /// Link target.
    pub target: String,
    /// Nested items.
    #[serde(default, rename = "item")]
    pub items: Vec<ItemConfig>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`markup.base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
    /// Invalid navigation tree.
    #[error("{0}")]
    Tree(#[from] TreeError),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `semnav.toml` in the current directory and
    /// parents, falling back to defaults with no navigations.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(style) = settings.style {
            self.render.style = style;
        }
        if let Some(list_class) = &settings.list_class {
            self.markup.list_class.clone_from(list_class);
        }
        if let Some(base_url) = &settings.base_url {
            self.markup.base_url = Some(base_url.clone());
        }
        if let Some(last_as_link) = settings.last_as_link {
            self.render.options.last_as_link = last_as_link;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for empty or repeated navigation
    /// names and empty targets, `ConfigError::Tree` for invalid item ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for navigation in &self.navigations {
            if navigation.name.is_empty() {
                return Err(ConfigError::Validation(
                    "navigation.name cannot be empty".to_owned(),
                ));
            }
            if !names.insert(navigation.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "navigation '{}' is defined more than once",
                    navigation.name
                )));
            }
            validate_targets(navigation)?;
            navigation.build()?;
        }
        Ok(())
    }

    /// Build a registry holding every configured navigation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Tree` if a navigation has invalid item ids.
    pub fn registry(&self) -> Result<Registry, ConfigError> {
        let mut registry = Registry::new();
        for navigation in &self.navigations {
            registry.register(navigation.build()?);
        }
        tracing::debug!(count = registry.len(), "Navigation registry built");
        Ok(registry)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            navigations = config.navigations.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref base_url) = self.markup.base_url {
            self.markup.base_url = Some(expand::expand_env(base_url, "markup.base_url")?);
        }
        Ok(())
    }
}

impl NavigationConfig {
    /// Build the navigation tree described by this section.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] for empty or repeated item ids.
    pub fn build(&self) -> Result<Navigation, TreeError> {
        let mut builder = NavigationBuilder::new(self.name.as_str());
        for item in &self.items {
            builder.branch(&item.id, item.label(), &item.target, |nested| {
                add_items(nested, &item.items);
            });
        }
        builder.build()
    }
}

impl ItemConfig {
    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

fn add_items(items: &mut Items, configs: &[ItemConfig]) {
    for config in configs {
        items.branch(&config.id, config.label(), &config.target, |nested| {
            add_items(nested, &config.items);
        });
    }
}

/// Require every item in `navigation` to have a target.
fn validate_targets(navigation: &NavigationConfig) -> Result<(), ConfigError> {
    let mut stack: Vec<&ItemConfig> = navigation.items.iter().collect();
    while let Some(item) = stack.pop() {
        if item.target.is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' in navigation '{}' has an empty target",
                item.id, navigation.name
            )));
        }
        stack.extend(&item.items);
    }
    Ok(())
}
