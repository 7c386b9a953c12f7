//! Configuration for the supergraph tool
//!
//! Read from `--config <path>` or from `supergraph.toml` in the working
//! directory. Every field is optional; command-line flags win over the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::export::DotWriter;
use crate::format::OutputFormat;

/// File name looked up by [`Config::discover`]
pub const CONFIG_FILE_NAME: &str = "supergraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format when `--format` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Settings for `dot` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_graph_name")]
    pub graph_name: String,

    /// Label DOT nodes with their values
    #[serde(default)]
    pub label_nodes: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            graph_name: default_graph_name(),
            label_nodes: false,
        }
    }
}

fn default_graph_name() -> String {
    "G".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Load `supergraph.toml` from `dir`, or defaults when there is none
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        tracing::debug!(path = %path.display(), "load_config");
        Self::load(&path)
    }

    /// DOT writer from the `[export]` section, with an optional name override
    pub fn dot_writer(&self, name: Option<&str>) -> DotWriter {
        DotWriter::new(name.unwrap_or(&self.export.graph_name))
            .with_node_labels(self.export.label_nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.format.is_none());
        assert_eq!(config.export.graph_name, "G");
        assert!(!config.export.label_nodes);
        assert!(config.log.level.is_none());
        assert!(!config.log.json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("format = \"json\"\n[export]\nlabel_nodes = true\n")
            .unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.export.graph_name, "G");
        assert!(config.export.label_nodes);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.format = Some(OutputFormat::Records);
        config.export.graph_name = "typing".to_string();
        config.log.level = Some("debug".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());

        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[log]\nlevel = \"trace\"\njson = true\n",
        )
        .unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.log.level.as_deref(), Some("trace"));
        assert!(config.log.json);
    }

    #[test]
    fn test_bad_format_value_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "format = \"xml\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(GraphError::Toml(_))));
    }

    #[test]
    fn test_dot_writer_name_override() {
        let mut config = Config::default();
        config.export.label_nodes = true;
        assert_eq!(config.dot_writer(None).name(), "G");
        assert_eq!(config.dot_writer(Some("Typing")).name(), "Typing");
        assert_eq!(
            config.dot_writer(None),
            DotWriter::new("G").with_node_labels(true)
        );
    }
}
