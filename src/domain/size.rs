use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("valid percentage pattern"));

static PIXELS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)px").expect("valid pixel pattern"));

/// A length tagged with its unit, as written back onto a table element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Size {
    Pixels(f64),
    Percent(f64),
}

impl Size {
    pub fn value(self) -> f64 {
        match self {
            Self::Pixels(v) | Self::Percent(v) => v,
        }
    }

    pub fn is_percent(self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(v) => write!(f, "{}px", v),
            Self::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Extracts the number in front of the first `%` token, e.g. `"42.5%"` -> `42.5`.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    capture_number(&PERCENTAGE, raw)
}

/// Extracts the number in front of the first `px` token, e.g. `"300px"` -> `300`.
pub fn parse_pixels(raw: &str) -> Option<f64> {
    capture_number(&PIXELS, raw)
}

/// Percentage tokens win over pixel tokens; anything else is unrecognised.
pub fn parse_size(raw: &str) -> Option<Size> {
    parse_percentage(raw)
        .map(Size::Percent)
        .or_else(|| parse_pixels(raw).map(Size::Pixels))
}

fn capture_number(pattern: &Regex, raw: &str) -> Option<f64> {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
