//! Per-column deltas for a drag of one column bar.
//!
//! Which columns absorb the drag depends on the column sizing mode and on
//! whether the dragged bar is the last one:
//!
//! | bar      | `default`                          | `static`          | `resizetable` |
//! |----------|------------------------------------|-------------------|---------------|
//! | not last | pivot and right neighbour trade    | same as `default` | pivot only    |
//! | last     | percent: nothing, px: all columns  | pivot only        | pivot only    |
//!
//! Clamping never cascades: once the column being shrunk hits the minimum the
//! rest of the drag is dropped.

use tablesize_domain::{ColumnSizing, WidthType};

use crate::table_size::TableSize;

enum Context {
    None,
    Only,
    Middle { index: usize, next: usize },
    Last { index: usize },
}

fn neighbours(len: usize, column: usize) -> Context {
    match len {
        0 => Context::None,
        1 => Context::Only,
        _ if column + 1 < len => Context::Middle {
            index: column,
            next: column + 1,
        },
        _ => Context::Last { index: column },
    }
}

/// Deltas for dragging the bar after `column` by `step` (in the table's unit).
///
/// # Panics
///
/// If `sizes` is non-empty and `column` is not a valid index.
pub fn determine(sizes: &[f64], column: usize, step: f64, table_size: &TableSize) -> Vec<f64> {
    let min = table_size.min_cell_width();

    match neighbours(sizes.len(), column) {
        Context::None => Vec::new(),
        Context::Only => table_size.single_column_width(sizes[0], step),
        Context::Middle { index, next } => match table_size.column_sizing() {
            ColumnSizing::ResizeTable => resize_only(sizes, index, step, min),
            ColumnSizing::Static | ColumnSizing::Default => {
                trade_with_neighbour(sizes, index, next, step, min)
            }
        },
        Context::Last { index } => match (table_size.column_sizing(), table_size.width_type()) {
            (ColumnSizing::Default, WidthType::Relative) => vec![0.0; sizes.len()],
            (ColumnSizing::Default, WidthType::Fixed) => spread_proportionally(sizes, step, min),
            (ColumnSizing::Static | ColumnSizing::ResizeTable, _) => {
                resize_only(sizes, index, step, min)
            }
        },
    }
}

fn resize_only(sizes: &[f64], index: usize, step: f64, min: f64) -> Vec<f64> {
    let mut deltas = vec![0.0; sizes.len()];
    let new_width = (sizes[index] + step).max(min);
    deltas[index] = new_width - sizes[index];
    deltas
}

fn trade_with_neighbour(sizes: &[f64], index: usize, next: usize, step: f64, min: f64) -> Vec<f64> {
    let mut deltas = vec![0.0; sizes.len()];

    let applied = if step >= 0.0 {
        let new_next = (sizes[next] - step).max(min);
        (sizes[next] - new_next).max(0.0)
    } else {
        let new_this = (sizes[index] + step).max(min);
        (new_this - sizes[index]).min(0.0)
    };

    deltas[index] = applied;
    deltas[next] = -applied;
    deltas
}

fn spread_proportionally(sizes: &[f64], step: f64, min: f64) -> Vec<f64> {
    let total: f64 = sizes.iter().sum();
    if total <= 0.0 {
        return vec![0.0; sizes.len()];
    }

    // Scaling every column by the same factor: the narrowest one hits the minimum first.
    let narrowest = sizes.iter().copied().fold(f64::INFINITY, f64::min);
    let limit = (total * (min / narrowest - 1.0)).min(0.0);
    let applied = step.max(limit);

    sizes.iter().map(|size| size / total * applied).collect()
}
