use serde::Deserialize;
use std::{path::Path, time::Duration};

/// A hue/saturation pair the wave cycles through. Lightness is derived per
/// cell from the distance to the wave head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub(crate) struct PaletteColor {
    /// Hue in degrees (0-360)
    pub(crate) hue: u16,
    /// Saturation percentage (0-100)
    pub(crate) saturation: u8,
}

/// How the wave head moves across the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum WaveStyle {
    /// Left-to-right sweep that wraps back to the left edge
    #[default]
    Sweep,
    /// Back-and-forth bounce between both edges
    Bounce,
}

/// Grid geometry and animation parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub(crate) struct GridConfig {
    /// Number of grid rows
    #[serde(default = "default_rows")]
    pub(crate) rows: u16,

    /// Number of grid columns
    #[serde(default = "default_columns")]
    pub(crate) columns: u16,

    /// Time in milliseconds for the wave to advance one column
    #[serde(default = "default_tick_interval_ms")]
    pub(crate) tick_interval_ms: u64,

    /// The width of the wave's gradient tail
    #[serde(default = "default_wave_width")]
    pub(crate) wave_width: u16,

    /// The colors the wave cycles through, one per boundary crossing
    #[serde(default = "default_palette")]
    pub(crate) palette: Vec<PaletteColor>,
}

fn default_rows() -> u16 {
    15
}

fn default_columns() -> u16 {
    20
}

fn default_tick_interval_ms() -> u64 {
    90
}

fn default_wave_width() -> u16 {
    5
}

fn default_palette() -> Vec<PaletteColor> {
    vec![
        PaletteColor { hue: 120, saturation: 100 }, // Green
        PaletteColor { hue: 180, saturation: 100 }, // Cyan
        PaletteColor { hue: 240, saturation: 100 }, // Blue
        PaletteColor { hue: 280, saturation: 90 },  // Purple
        PaletteColor { hue: 320, saturation: 100 }, // Magenta
    ]
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            tick_interval_ms: default_tick_interval_ms(),
            wave_width: default_wave_width(),
            palette: default_palette(),
        }
    }
}

impl GridConfig {
    /// Load a configuration from a YAML file
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GridConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Check every parameter once at startup; the animation itself has no
    /// fallible operations left after this passes.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.wave_width == 0 {
            return Err(ConfigError::ZeroWaveWidth);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for color in &self.palette {
            if color.hue > 360 {
                return Err(ConfigError::HueOutOfRange(color.hue));
            }
            if color.saturation > 100 {
                return Err(ConfigError::SaturationOutOfRange(color.saturation));
            }
        }
        Ok(())
    }

    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Errors that can occur when loading or validating a configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("rows must be greater than zero")]
    ZeroRows,

    #[error("columns must be greater than zero")]
    ZeroColumns,

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    #[error("wave width must be greater than zero")]
    ZeroWaveWidth,

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("palette hue {0} is out of range (0-360)")]
    HueOutOfRange(u16),

    #[error("palette saturation {0} is out of range (0-100)")]
    SaturationOutOfRange(u8),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        let config = GridConfig::default();
        config.validate().expect("default config must validate");
        assert_eq!(config.palette.len(), 5);
    }

    #[rstest]
    #[case::zero_rows(GridConfig { rows: 0, ..Default::default() }, "rows must be greater than zero")]
    #[case::zero_columns(GridConfig { columns: 0, ..Default::default() }, "columns must be greater than zero")]
    #[case::zero_interval(
        GridConfig { tick_interval_ms: 0, ..Default::default() },
        "tick interval must be greater than zero"
    )]
    #[case::zero_wave_width(GridConfig { wave_width: 0, ..Default::default() }, "wave width must be greater than zero")]
    #[case::empty_palette(
        GridConfig { palette: vec![], ..Default::default() },
        "palette must contain at least one color"
    )]
    #[case::hue_out_of_range(
        GridConfig { palette: vec![PaletteColor { hue: 361, saturation: 100 }], ..Default::default() },
        "palette hue 361 is out of range (0-360)"
    )]
    #[case::saturation_out_of_range(
        GridConfig { palette: vec![PaletteColor { hue: 0, saturation: 101 }], ..Default::default() },
        "palette saturation 101 is out of range (0-100)"
    )]
    fn invalid_configs_are_rejected(#[case] config: GridConfig, #[case] message: &str) {
        let error = config.validate().expect_err("config must be rejected");
        assert_eq!(error.to_string(), message);
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
rows: 10
columns: 12
tick_interval_ms: 50
wave_width: 3
palette:
  - hue: 0
    saturation: 100
  - hue: 60
    saturation: 80
"#;
        let config: GridConfig = serde_yaml::from_str(yaml).expect("failed to parse");
        assert_eq!(config.rows, 10);
        assert_eq!(config.columns, 12);
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.wave_width, 3);
        assert_eq!(config.palette, vec![
            PaletteColor { hue: 0, saturation: 100 },
            PaletteColor { hue: 60, saturation: 80 },
        ]);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GridConfig = serde_yaml::from_str("rows: 4\n").expect("failed to parse");
        assert_eq!(config.rows, 4);
        let defaults = GridConfig::default();
        assert_eq!(config.columns, defaults.columns);
        assert_eq!(config.tick_interval_ms, defaults.tick_interval_ms);
        assert_eq!(config.wave_width, defaults.wave_width);
        assert_eq!(config.palette, defaults.palette);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<GridConfig, _> = serde_yaml::from_str("speed: 3\n");
        assert!(result.is_err());
    }
}
