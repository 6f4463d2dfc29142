use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit system of a table's column widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthType {
    /// Pixel widths.
    Fixed,
    /// Percentage-of-table widths.
    Relative,
}

/// How a column drag affects the rest of the table.
///
/// - `Default`: neighbouring columns trade width; dragging the last bar of a
///   percentage table keeps column ratios, of a pixel table spreads the change
///   over every column.
/// - `Static`: column resizing never changes the overall table width except at
///   the last bar.
/// - `ResizeTable`: every column change grows or shrinks the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnSizing {
    #[default]
    Default,
    Static,
    #[serde(rename = "resizetable")]
    ResizeTable,
}

impl ColumnSizing {
    pub fn all_variants() -> &'static [ColumnSizing] {
        &[
            ColumnSizing::Default,
            ColumnSizing::Static,
            ColumnSizing::ResizeTable,
        ]
    }
}

impl fmt::Display for ColumnSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSizing::Default => write!(f, "default"),
            ColumnSizing::Static => write!(f, "static"),
            ColumnSizing::ResizeTable => write!(f, "resizetable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column sizing: {0}")]
pub struct ParseColumnSizingError(pub String);

impl FromStr for ColumnSizing {
    type Err = ParseColumnSizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(ColumnSizing::Default),
            "static" => Ok(ColumnSizing::Static),
            "resizetable" => Ok(ColumnSizing::ResizeTable),
            _ => Err(ParseColumnSizingError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_default() {
        assert_eq!(ColumnSizing::default(), ColumnSizing::Default);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(
            ColumnSizing::from_str("ResizeTable").unwrap(),
            ColumnSizing::ResizeTable
        );
        assert_eq!(
            ColumnSizing::from_str("STATIC").unwrap(),
            ColumnSizing::Static
        );
    }

    #[test]
    fn from_str_returns_error_for_unknown() {
        let err = ColumnSizing::from_str("elastic").unwrap_err();
        assert_eq!(err.to_string(), "Unknown column sizing: elastic");
    }

    #[test]
    fn display_matches_parse() {
        for variant in ColumnSizing::all_variants() {
            let parsed = ColumnSizing::from_str(&variant.to_string()).unwrap();
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ColumnSizing::ResizeTable).unwrap();
        assert_eq!(json, "\"resizetable\"");

        let parsed: WidthType = serde_json::from_str("\"relative\"").unwrap();
        assert_eq!(parsed, WidthType::Relative);
    }
}
