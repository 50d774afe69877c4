// File: src/config.rs
// Purpose: Configuration parsing from patternry.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub paths: PathsConfig,
}

/// Application branding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Resource path configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root directory logical resource paths are resolved against (default: ".")
    #[serde(default = "default_resource_root")]
    pub resource_root: String,

    /// Prefix prepended to view names when deriving template paths (default: "templates/")
    #[serde(default = "default_templates_prefix")]
    pub templates_prefix: String,

    /// Prefix prepended to group documentation resource names (default: "docs/")
    #[serde(default = "default_docs_prefix")]
    pub docs_prefix: String,

    /// Directory served under /static (default: "static")
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Template files carry this extension; view names never do.
pub const TEMPLATE_EXT: &str = ".html";

impl PathsConfig {
    /// Full template path for a view name (prefix + view name + extension).
    pub fn template_path(&self, view: &str) -> String {
        format!("{}{}{}", self.templates_prefix, view, TEMPLATE_EXT)
    }

    /// Full documentation path for a docs resource name.
    pub fn doc_path(&self, docs: &str) -> String {
        format!("{}{}", self.docs_prefix, docs)
    }
}

// Default values
fn default_app_name() -> String {
    "Pattern Library".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_resource_root() -> String {
    ".".to_string()
}

fn default_templates_prefix() -> String {
    "templates/".to_string()
}

fn default_docs_prefix() -> String {
    "docs/".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

// Default implementations
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            resource_root: default_resource_root(),
            templates_prefix: default_templates_prefix(),
            docs_prefix: default_docs_prefix(),
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a patternry.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./patternry.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("patternry.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app.name, "Pattern Library");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.paths.templates_prefix, "templates/");
        assert_eq!(config.paths.docs_prefix, "docs/");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.paths.resource_root, ".");
    }

    #[test]
    fn test_custom_values() {
        let toml = r#"
            [app]
            name = "Acme Styleguide"

            [paths]
            templates_prefix = "views/"
            docs_prefix = "guides/"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.app.name, "Acme Styleguide");
        assert_eq!(config.paths.templates_prefix, "views/");
        assert_eq!(config.paths.docs_prefix, "guides/");
        // Untouched sections keep their defaults
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_template_path() {
        let paths = PathsConfig::default();
        assert_eq!(
            paths.template_path("components/bootstrap/alerts/alerts"),
            "templates/components/bootstrap/alerts/alerts.html"
        );
    }

    #[test]
    fn test_doc_path() {
        let paths = PathsConfig::default();
        assert_eq!(paths.doc_path("bootstrap.md"), "docs/bootstrap.md");
    }
}
