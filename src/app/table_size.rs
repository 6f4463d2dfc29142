//! Unit-system specific arithmetic for one resize gesture.
//!
//! A [`TableSize`] is chosen from the table's declared width: a percentage
//! declaration gives the percentage variant, a pixel declaration (or none at
//! all) the pixel variant. Drags are always measured in pixels, so the
//! percentage variant converts them before they reach the delta engine.

use tablesize_domain::{ColumnSizing, Size, WidthType, parse_percentage, parse_pixels};

use crate::config::ResizeConfig;
use crate::ports::TableSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageSize {
    /// Declared width of the table, in percent of its container.
    width: f64,
    /// Rendered width of the table.
    pixel_width: f64,
    column_sizing: ColumnSizing,
    min_cell_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSize {
    width: f64,
    column_sizing: ColumnSizing,
    min_cell_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableSize {
    Percentage(PercentageSize),
    Pixel(PixelSize),
}

impl TableSize {
    pub fn percentage(
        width: f64,
        pixel_width: f64,
        column_sizing: ColumnSizing,
        min_cell_px: f64,
    ) -> Self {
        Self::Percentage(PercentageSize {
            width,
            pixel_width,
            column_sizing,
            min_cell_px,
        })
    }

    pub fn pixel(width: f64, column_sizing: ColumnSizing, min_cell_px: f64) -> Self {
        Self::Pixel(PixelSize {
            width,
            column_sizing,
            min_cell_px,
        })
    }

    /// Picks the variant from a declared width string, falling back to the
    /// rendered width when nothing usable is declared.
    pub fn choose(
        declared: Option<&str>,
        rendered_width: f64,
        column_sizing: ColumnSizing,
        min_cell_px: f64,
    ) -> Self {
        let Some(declared) = declared else {
            return Self::pixel(rendered_width, column_sizing, min_cell_px);
        };

        if let Some(percent) = parse_percentage(declared) {
            return Self::percentage(percent, rendered_width, column_sizing, min_cell_px);
        }

        match parse_pixels(declared) {
            Some(px) => Self::pixel(px.trunc(), column_sizing, min_cell_px),
            None => Self::pixel(rendered_width, column_sizing, min_cell_px),
        }
    }

    pub fn from_table(
        table: &impl TableSource,
        column_sizing: ColumnSizing,
        config: &ResizeConfig,
    ) -> Self {
        Self::choose(
            table.declared_width().as_deref(),
            table.rendered_width(),
            column_sizing,
            config.min_cell_width,
        )
    }

    /// Width of the table in its own unit.
    pub fn width(&self) -> f64 {
        match self {
            Self::Percentage(size) => size.width,
            Self::Pixel(size) => size.width,
        }
    }

    pub fn pixel_width(&self) -> f64 {
        match self {
            Self::Percentage(size) => size.pixel_width,
            Self::Pixel(size) => size.width,
        }
    }

    pub fn width_type(&self) -> WidthType {
        match self {
            Self::Percentage(_) => WidthType::Relative,
            Self::Pixel(_) => WidthType::Fixed,
        }
    }

    pub fn column_sizing(&self) -> ColumnSizing {
        match self {
            Self::Percentage(size) => size.column_sizing,
            Self::Pixel(size) => size.column_sizing,
        }
    }

    /// Converts a pixel drag distance into this table's unit.
    pub fn cell_delta(&self, delta: f64) -> f64 {
        match self {
            Self::Percentage(size) => size.to_percent(delta),
            Self::Pixel(_) => delta,
        }
    }

    pub fn min_cell_width(&self) -> f64 {
        match self {
            Self::Percentage(size) => size.to_percent(size.min_cell_px),
            Self::Pixel(size) => size.min_cell_px,
        }
    }

    /// Delta for the only column of a table.
    pub fn single_column_width(&self, width: f64, delta: f64) -> Vec<f64> {
        match self {
            // The lone column of a percentage table always fills it.
            Self::Percentage(_) => vec![100.0 - width],
            Self::Pixel(size) => {
                let new_width = (width + delta).max(size.min_cell_px);
                vec![new_width - width]
            }
        }
    }

    pub fn new_widths(&self, widths: &[f64], deltas: &[f64]) -> Vec<f64> {
        let summed: Vec<f64> = widths
            .iter()
            .zip(deltas)
            .map(|(width, delta)| width + delta)
            .collect();

        match self {
            Self::Percentage(_) => {
                let total: f64 = summed.iter().sum();
                if total <= 0.0 {
                    return summed;
                }
                let normaliser = 100.0 / total;
                summed.into_iter().map(|w| w * normaliser).collect()
            }
            Self::Pixel(_) => summed,
        }
    }

    /// New width of the table itself after a drag at `index` by `step`
    /// (already in this table's unit).
    pub fn table_width(
        &self,
        index: usize,
        old_widths: &[f64],
        new_widths: &[f64],
        deltas: &[f64],
        step: f64,
    ) -> Size {
        match self {
            Self::Percentage(size) => {
                // Dragged across the whole pivot column: only the realized deltas count.
                let dragged_past = size.column_sizing != ColumnSizing::Default
                    && step < 0.0
                    && old_widths.get(index).is_some_and(|w| step.abs() > *w);
                let delta = if dragged_past {
                    deltas.iter().sum::<f64>()
                } else {
                    step
                };
                Size::Percent(size.width + delta / 100.0 * size.width)
            }
            Self::Pixel(size) => {
                // Borders and padding are whatever the declared width has beyond the columns.
                let extra = size.width - old_widths.iter().sum::<f64>();
                Size::Pixels(new_widths.iter().sum::<f64>() + extra)
            }
        }
    }

    /// Tags a cell width with this table's unit.
    pub fn cell_size(&self, amount: f64) -> Size {
        match self {
            Self::Percentage(_) => Size::Percent(amount),
            Self::Pixel(_) => Size::Pixels(amount),
        }
    }
}

impl PercentageSize {
    fn to_percent(self, px: f64) -> f64 {
        if self.pixel_width > 0.0 {
            px / self.pixel_width * 100.0
        } else {
            0.0
        }
    }
}
