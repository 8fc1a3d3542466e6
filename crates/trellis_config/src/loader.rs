//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ToolConfig;
use std::path::Path;

/// The file name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "trellis.toml";

/// Loads and validates a `trellis.toml` configuration from `path`.
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Loads `<dir>/trellis.toml` if it exists, or returns the defaults.
pub fn load_config_or_default(dir: &Path) -> Result<ToolConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        load_config(&path)
    } else {
        Ok(ToolConfig::default())
    }
}

/// Parses and validates a `trellis.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are usable.
fn validate_config(config: &ToolConfig) -> Result<(), ConfigError> {
    if config.output.bram_values_per_line == 0 {
        return Err(ConfigError::ValidationError(
            "output.bram_values_per_line must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputFormat;

    #[test]
    fn empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, ToolConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.bram_values_per_line, 8);
        assert!(!config.check.require_device);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[output]
format = "json"
bram_values_per_line = 16

[check]
require_device = true
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.bram_values_per_line, 16);
        assert!(config.check.require_device);
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let config = load_config_from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.bram_values_per_line, 8);
    }

    #[test]
    fn zero_values_per_line_errors() {
        let err = load_config_from_str("[output]\nbram_values_per_line = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn unknown_format_errors() {
        let err = load_config_from_str("[output]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_key_errors() {
        let err = load_config_from_str("[check]\nstrict = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[check]\nrequire_device = true\n").unwrap();
        let config = load_config(&path).unwrap();
        assert!(config.check.require_device);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn default_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_or_default(dir.path()).unwrap();
        assert_eq!(config, ToolConfig::default());
    }
}
