//! Maps per-column widths and per-row heights back onto the grid.

use tablesize_domain::{HeightAssignment, RowHeightAssignment, Warehouse, WidthAssignment};

/// Width of every cell: the sum of the columns it spans.
pub fn recalculate_width(warehouse: &Warehouse, widths: &[f64]) -> Vec<WidthAssignment> {
    warehouse
        .cells()
        .map(|cell| WidthAssignment {
            cell: cell.element,
            width: span_total(widths, cell.column, cell.colspan),
        })
        .collect()
}

/// Height of every cell: the sum of the rows it spans.
pub fn recalculate_height(warehouse: &Warehouse, heights: &[f64]) -> Vec<HeightAssignment> {
    warehouse
        .cells()
        .map(|cell| HeightAssignment {
            cell: cell.element,
            height: span_total(heights, cell.row, cell.rowspan),
        })
        .collect()
}

pub fn match_row_height(warehouse: &Warehouse, heights: &[f64]) -> Vec<RowHeightAssignment> {
    warehouse
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| RowHeightAssignment {
            row: row.element,
            height: heights.get(r).copied().unwrap_or_default(),
        })
        .collect()
}

fn span_total(sizes: &[f64], start: usize, span: usize) -> f64 {
    sizes.iter().skip(start).take(span).sum()
}
