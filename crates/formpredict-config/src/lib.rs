//! Configuration system for FormPredict.
//!
//! Load the server address and the list of variants (schema, artifact and
//! presentation overrides) from TOML or YAML files without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use formpredict_config::{AppConfig, SchemaSource};
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [server]
//!     port = 5000
//!
//!     [[variants]]
//!     id = "obesity"
//!     builtin = "obesity"
//!     artifact = "models/obesity.json"
//!
//!     [[variants]]
//!     id = "insurance"
//!     schema = "schemas/insurance.toml"
//!     artifact = "models/insurance.json"
//!     [variants.presenter]
//!     headline = "Estimated Insurance Cost: Rs{}"
//!     group_thousands = true
//! "#).unwrap();
//!
//! assert_eq!(config.server.port, 5000);
//! assert_eq!(config.variants.len(), 2);
//! assert!(matches!(config.variants[1].schema_source(), Ok(SchemaSource::File(_))));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use formpredict_config::AppConfig;
//!
//! let config = AppConfig::load("formpredict.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use formpredict_core::{Builtin, Presenter, StyleRule};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Front-ends to serve.
    #[serde(default)]
    pub variants: Vec<VariantConfig>,
}

impl AppConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_file(path)
    }

    /// Loads a file, choosing YAML for `.yaml`/`.yml` and TOML otherwise.
    ///
    /// Relative schema and artifact paths are resolved against the file's
    /// directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that variant ids are unique URL segments and every variant has
    /// one schema source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, variant) in self.variants.iter().enumerate() {
            validate_id(&variant.id)?;
            if self.variants[i + 1..].iter().any(|v| v.id == variant.id) {
                return Err(ConfigError::Invalid(format!(
                    "variant '{}' is declared twice",
                    variant.id
                )));
            }
            variant.schema_source()?;
        }
        Ok(())
    }

    /// Makes relative variant paths relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for variant in &mut self.variants {
            variant.artifact = resolve(base, &variant.artifact);
            if let Some(schema) = &variant.schema {
                variant.schema = Some(resolve(base, schema));
            }
        }
    }

    /// Sets the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Adds a variant.
    pub fn with_variant(mut self, variant: VariantConfig) -> Self {
        self.variants.push(variant);
        self
    }

    /// Looks up a variant by id.
    pub fn variant(&self, id: &str) -> Option<&VariantConfig> {
        self.variants.iter().find(|v| v.id == id)
    }
}

/// Path segments the web front-end keeps for itself.
const RESERVED_IDS: &[&str] = &["api"];

// Ids become a single route segment: ASCII letters, digits, `-` and `_`.
fn validate_id(id: &str) -> Result<(), ConfigError> {
    if id.is_empty() {
        return Err(ConfigError::Invalid("variant id must not be empty".to_string()));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ConfigError::Invalid(format!(
            "variant id '{}' contains '{}'; use letters, digits, '-' or '_'",
            id, c
        )));
    }
    if RESERVED_IDS.contains(&id) {
        return Err(ConfigError::Invalid(format!(
            "variant id '{}' is reserved",
            id
        )));
    }
    Ok(())
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid host '{}'", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// One front-end.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct VariantConfig {
    /// URL segment and registry key.
    pub id: String,

    /// Page title; defaults to the built-in title or the id.
    #[serde(default)]
    pub title: Option<String>,

    /// Name of a built-in schema.
    #[serde(default)]
    pub builtin: Option<String>,

    /// Path to a schema file.
    #[serde(default)]
    pub schema: Option<PathBuf>,

    /// Path to the model artifact.
    pub artifact: PathBuf,

    /// Presentation overrides.
    #[serde(default)]
    pub presenter: Option<PresenterConfig>,
}

/// Where a variant's schema comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaSource {
    Builtin(Builtin),
    File(PathBuf),
}

impl VariantConfig {
    /// Creates a variant backed by a built-in schema.
    pub fn builtin(builtin: Builtin, artifact: impl Into<PathBuf>) -> Self {
        Self {
            id: builtin.id().to_string(),
            title: None,
            builtin: Some(builtin.id().to_string()),
            schema: None,
            artifact: artifact.into(),
            presenter: None,
        }
    }

    /// Creates a variant backed by a schema file.
    pub fn from_schema_file(
        id: impl Into<String>,
        schema: impl Into<PathBuf>,
        artifact: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            title: None,
            builtin: None,
            schema: Some(schema.into()),
            artifact: artifact.into(),
            presenter: None,
        }
    }

    /// Returns the schema source.
    ///
    /// # Errors
    ///
    /// Fails unless exactly one of `builtin` and `schema` is set and the
    /// built-in name is known.
    pub fn schema_source(&self) -> Result<SchemaSource, ConfigError> {
        match (&self.builtin, &self.schema) {
            (Some(name), None) => name
                .parse::<Builtin>()
                .map(SchemaSource::Builtin)
                .map_err(|_| {
                    ConfigError::Invalid(format!(
                        "variant '{}': unknown builtin '{}'",
                        self.id, name
                    ))
                }),
            (None, Some(path)) => Ok(SchemaSource::File(path.clone())),
            (Some(_), Some(_)) => Err(ConfigError::Invalid(format!(
                "variant '{}' sets both builtin and schema",
                self.id
            ))),
            (None, None) => Err(ConfigError::Invalid(format!(
                "variant '{}' needs a builtin or a schema",
                self.id
            ))),
        }
    }
}

/// Presenter overrides. Unset fields keep the base presenter's value.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PresenterConfig {
    /// Headline template with a `{}` placeholder.
    pub headline: Option<String>,

    /// Fraction digits for regression values.
    pub decimals: Option<usize>,

    /// Group thousands with commas.
    pub group_thousands: Option<bool>,

    /// Replaces the base style rules when set.
    pub styles: Option<Vec<StyleRule>>,

    /// Color used when no rule matches.
    pub default_color: Option<String>,

    /// Failure message template with a `{}` placeholder.
    pub error_template: Option<String>,
}

impl PresenterConfig {
    /// Applies the overrides on top of `base`.
    pub fn apply(&self, mut base: Presenter) -> Presenter {
        if let Some(headline) = &self.headline {
            base.headline = headline.clone();
        }
        if let Some(decimals) = self.decimals {
            base.decimals = decimals;
        }
        if let Some(group) = self.group_thousands {
            base.group_thousands = group;
        }
        if let Some(styles) = &self.styles {
            base.styles = styles.clone();
        }
        if let Some(color) = &self.default_color {
            base.default_color = Some(color.clone());
        }
        if let Some(template) = &self.error_template {
            base.error_template = template.clone();
        }
        base
    }
}
