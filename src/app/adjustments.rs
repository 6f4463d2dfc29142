//! One resize gesture from start to finish.
//!
//! Every gesture is planned against a [`TableSource`] first and only then
//! applied to a [`SizeSink`], so a caller can inspect or discard the outcome.

use tablesize_domain::{
    ColumnSizing, HeightAssignment, RowDetails, RowHeightAssignment, Size, Warehouse,
    WidthAssignment,
};
use tracing::debug;

use crate::bar_positions::ColumnBars;
use crate::column_sizes;
use crate::config::ResizeConfig;
use crate::deltas;
use crate::ports::{SizeSink, TableSource};
use crate::recalculations::{match_row_height, recalculate_height, recalculate_width};
use crate::table_size::TableSize;

/// New cell widths, in the unit of `table_size`, and possibly a new table width.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthPlan {
    pub table_size: TableSize,
    pub cells: Vec<WidthAssignment>,
    pub table_width: Option<Size>,
}

impl WidthPlan {
    pub fn apply(&self, sink: &mut impl SizeSink) {
        for assignment in &self.cells {
            sink.set_cell_width(assignment.cell, self.table_size.cell_size(assignment.width));
        }
        if let Some(width) = self.table_width {
            sink.set_table_width(width);
        }
    }
}

/// New row and cell heights plus the table height, all in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightPlan {
    pub rows: Vec<RowHeightAssignment>,
    pub cells: Vec<HeightAssignment>,
    pub table_height: f64,
}

impl HeightPlan {
    pub fn apply(&self, sink: &mut impl SizeSink) {
        for row in &self.rows {
            sink.set_row_height(row.row, row.height);
        }
        for cell in &self.cells {
            sink.set_cell_height(cell.cell, cell.height);
        }
        sink.set_table_height(self.table_height);
    }
}

/// Plans dragging the bar after column `index` by `delta` pixels.
///
/// The table width only changes in `resizetable` mode or when the last bar
/// is dragged.
///
/// # Panics
///
/// If the table has columns and `index` is not one of them.
pub fn plan_width(
    table: &impl TableSource,
    delta: f64,
    index: usize,
    direction: ColumnBars,
    column_sizing: ColumnSizing,
    config: &ResizeConfig,
) -> WidthPlan {
    let table_size = TableSize::from_table(table, column_sizing, config);
    let warehouse = Warehouse::generate(&table.rows());
    let columns = warehouse.grid().columns;

    if columns == 0 {
        debug!("table has no columns, nothing to resize");
        return WidthPlan {
            table_size,
            cells: Vec::new(),
            table_width: None,
        };
    }
    debug_assert!(index < columns, "column {index} out of {columns}");

    let widths = column_sizes::widths(&warehouse, table, &direction, &table_size);
    let step = table_size.cell_delta(delta);
    let deltas = deltas::determine(&widths, index, step, &table_size);
    let new_widths = table_size.new_widths(&widths, &deltas);

    debug!(
        ?column_sizing,
        width_type = ?table_size.width_type(),
        index,
        step,
        ?widths,
        ?deltas,
        "planned column resize"
    );

    let resizes_table = column_sizing == ColumnSizing::ResizeTable || index + 1 == columns;
    let table_width = table_size.table_width(index, &widths, &new_widths, &deltas, step);

    WidthPlan {
        table_size,
        cells: recalculate_width(&warehouse, &new_widths),
        table_width: resizes_table.then_some(table_width),
    }
}

/// Plans dragging the bar below row `index` by `delta` pixels.
pub fn plan_height(
    table: &impl TableSource,
    delta: f64,
    index: usize,
    config: &ResizeConfig,
) -> HeightPlan {
    let warehouse = Warehouse::generate(&table.rows());
    let heights = column_sizes::pixel_heights(&warehouse, table, config.min_cell_height);

    let new_heights: Vec<f64> = heights
        .iter()
        .enumerate()
        .map(|(r, &height)| {
            if r == index {
                (height + delta).max(config.min_cell_height)
            } else {
                height
            }
        })
        .collect();

    debug!(index, delta, ?heights, ?new_heights, "planned row resize");

    HeightPlan {
        rows: match_row_height(&warehouse, &new_heights),
        cells: recalculate_height(&warehouse, &new_heights),
        table_height: new_heights.iter().sum(),
    }
}

/// Plans giving the cells of `target_rows` the widths their own columns
/// currently measure at.
///
/// The cells in `target_rows` are read through `table`. Percentage tables keep
/// their width; pixel tables become the sum of the new column widths plus
/// whatever the declared width holds beyond the current columns.
pub fn plan_width_to(
    table: &impl TableSource,
    target_rows: &[RowDetails],
    direction: ColumnBars,
    config: &ResizeConfig,
) -> WidthPlan {
    let table_size = TableSize::from_table(table, ColumnSizing::Default, config);
    let target = Warehouse::generate(target_rows);
    let widths = column_sizes::widths(&target, table, &direction, &table_size);
    let cells = recalculate_width(&target, &widths);

    let table_width = (!cells.is_empty()).then(|| {
        let current = Warehouse::generate(&table.rows());
        let current_widths = column_sizes::widths(&current, table, &direction, &table_size);
        table_size.table_width(0, &current_widths, &widths, &[], 0.0)
    });

    debug!(?widths, ?table_width, "planned width conform");

    WidthPlan {
        table_size,
        cells,
        table_width,
    }
}

pub fn adjust_width<T: TableSource + SizeSink>(
    table: &mut T,
    delta: f64,
    index: usize,
    direction: ColumnBars,
    column_sizing: ColumnSizing,
    config: &ResizeConfig,
) -> WidthPlan {
    let plan = plan_width(&*table, delta, index, direction, column_sizing, config);
    plan.apply(table);
    plan
}

pub fn adjust_height<T: TableSource + SizeSink>(
    table: &mut T,
    delta: f64,
    index: usize,
    config: &ResizeConfig,
) -> HeightPlan {
    let plan = plan_height(&*table, delta, index, config);
    plan.apply(table);
    plan
}

pub fn adjust_width_to<T: TableSource + SizeSink>(
    table: &mut T,
    target_rows: &[RowDetails],
    direction: ColumnBars,
    config: &ResizeConfig,
) -> WidthPlan {
    let plan = plan_width_to(&*table, target_rows, direction, config);
    plan.apply(table);
    plan
}
