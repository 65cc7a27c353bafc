use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pareto: ParetoConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParetoConfig {
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_shape")]
    pub shape: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    /// Omitted means seed from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Plain,
    /// A single JSON document
    Json,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for ParetoConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            shape: default_shape(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            format: OutputFormat::default(),
        }
    }
}

fn default_scale() -> f64 {
    1.0
}
fn default_shape() -> f64 {
    1.0
}
fn default_count() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.pareto.scale, 1.0);
        assert_eq!(config.pareto.shape, 1.0);
        assert_eq!(config.generator.seed, None);
        assert_eq!(config.output.count, 10);
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = Config::from_toml_str(
            r#"
            [pareto]
            shape = 1.16

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.pareto.scale, 1.0);
        assert_eq!(config.pareto.shape, 1.16);
        assert_eq!(config.output.count, 10);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn full_document() {
        let config = Config::from_toml_str(
            r#"
            [pareto]
            scale = 2.5
            shape = 3.0

            [generator]
            seed = 42

            [output]
            count = 1000
            format = "plain"
            "#,
        )
        .unwrap();
        assert_eq!(config.pareto.scale, 2.5);
        assert_eq!(config.pareto.shape, 3.0);
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.output.count, 1000);
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let err = Config::from_toml_str("[output]\nformat = \"csv\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load(Path::new("/nonexistent/pareto.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
