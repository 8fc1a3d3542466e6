//! Configuration types deserialized from `trellis.toml`.

use serde::Deserialize;

/// The top-level tool configuration parsed from `trellis.toml`.
///
/// Every section is optional; a missing file or an empty file yields the
/// defaults.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// How normalized configurations are rendered.
    #[serde(default)]
    pub output: OutputConfig,
    /// Extra requirements enforced by `trellis check`.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Output settings for `trellis dump`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// The default output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Block-RAM values written per line in text output.
    #[serde(default = "default_values_per_line")]
    pub bram_values_per_line: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            bram_values_per_line: default_values_per_line(),
        }
    }
}

fn default_values_per_line() -> usize {
    8
}

/// Rendering format for normalized configurations.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Trellis configuration text (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Requirements checked after a successful parse.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Fail when the input declares no `.device`.
    #[serde(default)]
    pub require_device: bool,
}
