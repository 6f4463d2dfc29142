//! Resize computations for table columns and rows.
//!
//! The pure pieces ([`deltas`], [`table_size`], [`column_sizes`],
//! [`recalculations`]) work on plain numbers and the grid model. The
//! orchestrators in [`adjustments`] read a table through [`ports::TableSource`]
//! and write the outcome through [`ports::SizeSink`].

pub mod adjustments;
pub mod bar_positions;
pub mod column_sizes;
pub mod config;
pub mod deltas;
pub mod ports;
pub mod recalculations;
pub mod table_size;

#[cfg(test)]
mod test_support;

pub use adjustments::{
    HeightPlan, WidthPlan, adjust_height, adjust_width, adjust_width_to, plan_height, plan_width,
    plan_width_to,
};
pub use bar_positions::{BarPositions, ColumnBars, RowBars};
pub use config::ResizeConfig;
pub use table_size::TableSize;
