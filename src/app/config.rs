use serde::{Deserialize, Serialize};

use tablesize_domain::ColumnSizing;

pub const DEFAULT_MIN_CELL_WIDTH: f64 = 10.0;
pub const DEFAULT_MIN_CELL_HEIGHT: f64 = 10.0;

/// Tunables shared by every resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Narrowest a cell may become, in pixels.
    pub min_cell_width: f64,
    /// Shortest a row may become, in pixels.
    pub min_cell_height: f64,
    pub column_sizing: ColumnSizing,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_cell_width: DEFAULT_MIN_CELL_WIDTH,
            min_cell_height: DEFAULT_MIN_CELL_HEIGHT,
            column_sizing: ColumnSizing::Default,
        }
    }
}

impl ResizeConfig {
    pub fn with_column_sizing(self, column_sizing: ColumnSizing) -> Self {
        Self {
            column_sizing,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config: ResizeConfig = toml::from_str("min_cell_width = 24.0").unwrap();

        assert_eq!(config.min_cell_width, 24.0);
        assert_eq!(config.min_cell_height, DEFAULT_MIN_CELL_HEIGHT);
        assert_eq!(config.column_sizing, ColumnSizing::Default);
    }

    #[test]
    fn column_sizing_parses_from_lowercase() {
        let config: ResizeConfig = toml::from_str(r#"column_sizing = "resizetable""#).unwrap();

        assert_eq!(config.column_sizing, ColumnSizing::ResizeTable);
    }

    #[test]
    fn with_column_sizing_keeps_minimums() {
        let config = ResizeConfig {
            min_cell_width: 5.0,
            ..ResizeConfig::default()
        }
        .with_column_sizing(ColumnSizing::Static);

        assert_eq!(config.min_cell_width, 5.0);
        assert_eq!(config.column_sizing, ColumnSizing::Static);
    }
}
