//! Reads the current column widths and row heights of a table.
//!
//! Each logical column is measured through one representative cell. When
//! that cell spans several columns its own width says nothing about the
//! column, so the width is deduced from the bar edges of the neighbouring
//! columns instead.

use tablesize_domain::{Extended, Size, Warehouse, parse_pixels, parse_size};

use crate::bar_positions::{BarPositions, RowBars};
use crate::ports::{CellMetrics, TableSource};
use crate::table_size::TableSize;

/// Column widths in the unit of `table_size`.
pub fn widths(
    warehouse: &Warehouse,
    table: &impl TableSource,
    bars: &impl BarPositions,
    table_size: &TableSize,
) -> Vec<f64> {
    match table_size {
        TableSize::Percentage(_) => percentage_widths(warehouse, table, bars, table_size),
        TableSize::Pixel(_) => pixel_widths(warehouse, table, bars, table_size),
    }
}

pub fn pixel_widths(
    warehouse: &Warehouse,
    table: &impl TableSource,
    bars: &impl BarPositions,
    table_size: &TableSize,
) -> Vec<f64> {
    width_from(
        warehouse,
        table,
        bars,
        |metrics| pixel_width(metrics, table_size),
        |deduced| deduced.unwrap_or_else(|| table_size.min_cell_width()),
    )
}

pub fn percentage_widths(
    warehouse: &Warehouse,
    table: &impl TableSource,
    bars: &impl BarPositions,
    table_size: &TableSize,
) -> Vec<f64> {
    width_from(
        warehouse,
        table,
        bars,
        |metrics| percentage_width(metrics, table_size),
        |deduced| match deduced {
            Some(px) => table_size.cell_delta(px),
            None => table_size.min_cell_width(),
        },
    )
}

/// Row heights in pixels.
pub fn pixel_heights(warehouse: &Warehouse, table: &impl TableSource, min_height: f64) -> Vec<f64> {
    let representatives = warehouse.row_cells();
    let metrics = metrics_of(&representatives, table);
    let edges = edges_of(&metrics, &RowBars);

    representatives
        .iter()
        .zip(&metrics)
        .enumerate()
        .map(|(r, (cell, metrics))| match (cell, metrics) {
            (Some(cell), Some(metrics)) if !cell.has_rowspan() => cell_height(metrics),
            _ => deduce(&edges, r).unwrap_or(min_height),
        })
        .collect()
}

fn width_from(
    warehouse: &Warehouse,
    table: &impl TableSource,
    bars: &impl BarPositions,
    measure: impl Fn(&CellMetrics) -> f64,
    fallback: impl Fn(Option<f64>) -> f64,
) -> Vec<f64> {
    let representatives = warehouse.column_cells();
    let metrics = metrics_of(&representatives, table);
    let edges = edges_of(&metrics, bars);

    representatives
        .iter()
        .zip(&metrics)
        .enumerate()
        .map(|(c, (cell, metrics))| match (cell, metrics) {
            (Some(cell), Some(metrics)) if !cell.has_colspan() => measure(metrics),
            _ => fallback(deduce(&edges, c)),
        })
        .collect()
}

fn metrics_of(cells: &[Option<Extended>], table: &impl TableSource) -> Vec<Option<CellMetrics>> {
    cells
        .iter()
        .map(|cell| cell.map(|cell| table.cell_metrics(cell.element)))
        .collect()
}

fn edges_of(metrics: &[Option<CellMetrics>], bars: &impl BarPositions) -> Vec<Option<f64>> {
    metrics
        .iter()
        .map(|metrics| metrics.as_ref().map(|m| bars.edge(&m.rect)))
        .collect()
}

fn pixel_width(metrics: &CellMetrics, table_size: &TableSize) -> f64 {
    match metrics.declared_width.as_deref().and_then(parse_size) {
        Some(Size::Pixels(px)) => px,
        Some(Size::Percent(percent)) => percent / 100.0 * table_size.pixel_width(),
        None => metrics.rect.width,
    }
}

fn percentage_width(metrics: &CellMetrics, table_size: &TableSize) -> f64 {
    match metrics.declared_width.as_deref().and_then(parse_size) {
        Some(Size::Percent(percent)) => percent,
        Some(Size::Pixels(px)) => table_size.cell_delta(px),
        None => table_size.cell_delta(metrics.rect.width),
    }
}

fn cell_height(metrics: &CellMetrics) -> f64 {
    metrics
        .declared_height
        .as_deref()
        .and_then(parse_pixels)
        .unwrap_or(metrics.rect.height)
}

/// Size of slot `index` from the distance between the nearest known edges
/// around it, shared evenly across the slots in between.
fn deduce(edges: &[Option<f64>], index: usize) -> Option<f64> {
    if index + 1 >= edges.len() {
        return None;
    }

    let (current, before) = match edges[index] {
        Some(edge) => (edge, 0),
        None => edges[..index]
            .iter()
            .rev()
            .enumerate()
            .find_map(|(i, edge)| edge.map(|e| (e, i + 1)))?,
    };

    let (next, after) = match edges[index + 1] {
        Some(edge) => (edge, 1),
        None => edges[index + 1..]
            .iter()
            .enumerate()
            .find_map(|(i, edge)| edge.map(|e| (e, i + 1)))?,
    };

    Some((next - current).abs() / (before + after) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar_positions::ColumnBars;
    use crate::test_support::{StubTable, cell};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use tablesize_domain::ColumnSizing;

    const MIN: f64 = 10.0;

    fn pixel_table(width: f64) -> TableSize {
        TableSize::pixel(width, ColumnSizing::Default, MIN)
    }

    /// Three columns of 100, 50 and 50 where the middle column only has a
    /// cell spanning it and the next one.
    fn merged_ltr() -> StubTable {
        StubTable::new(200.0)
            .row(vec![
                cell(0.0, 0.0, 150.0, 30.0).span(1, 2),
                cell(150.0, 0.0, 50.0, 30.0),
            ])
            .row(vec![
                cell(0.0, 30.0, 100.0, 30.0),
                cell(100.0, 30.0, 100.0, 30.0).span(1, 2),
            ])
    }

    mod deduce {
        use super::*;

        #[rstest]
        #[case(&[Some(0.0), Some(40.0), Some(100.0)], 0, Some(40.0))]
        #[case(&[Some(0.0), Some(40.0), Some(100.0)], 1, Some(60.0))]
        #[case(&[Some(0.0), Some(40.0), Some(100.0)], 2, None)]
        #[case(&[Some(0.0), None, Some(100.0)], 0, Some(50.0))]
        #[case(&[Some(0.0), None, Some(100.0)], 1, Some(50.0))]
        #[case(&[Some(0.0), Some(40.0), None], 1, None)]
        #[case(&[], 0, None)]
        fn from_edges(
            #[case] edges: &[Option<f64>],
            #[case] index: usize,
            #[case] expected: Option<f64>,
        ) {
            assert_eq!(deduce(edges, index), expected);
        }

        #[test]
        fn descending_edges_use_distance() {
            let edges = [Some(300.0), Some(200.0), Some(50.0)];

            assert_eq!(deduce(&edges, 0), Some(100.0));
        }
    }

    mod pixel_widths {
        use super::*;

        #[test]
        fn declared_width_wins_over_measured() {
            let table = StubTable::new(400.0).row(vec![
                cell(0.0, 0.0, 100.0, 30.0).width("120px"),
                cell(100.0, 0.0, 50.0, 30.0).width("25%"),
            ]);
            let warehouse = Warehouse::generate(&table.rows());

            let widths = pixel_widths(&warehouse, &table, &ColumnBars::Ltr, &pixel_table(400.0));

            assert_eq!(widths, vec![120.0, 100.0]);
        }

        #[test]
        fn undeclared_cells_use_measured_width() {
            let table = StubTable::new(400.0).row(vec![
                cell(0.0, 0.0, 100.0, 30.0),
                cell(100.0, 0.0, 50.0, 30.0),
                cell(150.0, 0.0, 250.0, 30.0),
            ]);
            let warehouse = Warehouse::generate(&table.rows());

            let widths = pixel_widths(&warehouse, &table, &ColumnBars::Ltr, &pixel_table(400.0));

            assert_eq!(widths, vec![100.0, 50.0, 250.0]);
        }

        #[test]
        fn spanning_representative_is_deduced_from_edges() {
            let table = merged_ltr();
            let warehouse = Warehouse::generate(&table.rows());

            let widths = pixel_widths(&warehouse, &table, &ColumnBars::Ltr, &pixel_table(200.0));

            assert_eq!(widths, vec![100.0, 50.0, 50.0]);
        }

        #[test]
        fn right_to_left_deduces_from_right_edges() {
            let table = StubTable::new(200.0)
                .row(vec![
                    cell(50.0, 0.0, 150.0, 30.0).span(1, 2),
                    cell(0.0, 0.0, 50.0, 30.0),
                ])
                .row(vec![
                    cell(100.0, 30.0, 100.0, 30.0),
                    cell(0.0, 30.0, 100.0, 30.0).span(1, 2),
                ]);
            let warehouse = Warehouse::generate(&table.rows());

            let widths = pixel_widths(&warehouse, &table, &ColumnBars::Rtl, &pixel_table(200.0));

            assert_eq!(widths, vec![100.0, 50.0, 50.0]);
        }

        #[test]
        fn trailing_spanned_columns_fall_back_to_minimum() {
            let table = StubTable::new(300.0)
                .row(vec![cell(0.0, 0.0, 100.0, 30.0)])
                .row(vec![
                    cell(0.0, 30.0, 100.0, 30.0),
                    cell(100.0, 30.0, 200.0, 30.0).span(1, 2),
                ]);
            let warehouse = Warehouse::generate(&table.rows());

            let widths = pixel_widths(&warehouse, &table, &ColumnBars::Ltr, &pixel_table(300.0));

            assert_eq!(widths, vec![100.0, MIN, MIN]);
        }
    }

    mod percentage_widths {
        use super::*;

        #[test]
        fn converts_pixels_against_rendered_width() {
            let table = StubTable::new(400.0).row(vec![
                cell(0.0, 0.0, 100.0, 30.0).width("20%"),
                cell(100.0, 0.0, 300.0, 30.0),
            ]);
            let warehouse = Warehouse::generate(&table.rows());
            let size = TableSize::percentage(100.0, 400.0, ColumnSizing::Default, MIN);

            let widths = percentage_widths(&warehouse, &table, &ColumnBars::Ltr, &size);

            assert_abs_diff_eq!(widths[0], 20.0, epsilon = 1e-9);
            assert_abs_diff_eq!(widths[1], 75.0, epsilon = 1e-9);
        }

        #[test]
        fn deduced_pixels_are_converted() {
            let table = merged_ltr();
            let warehouse = Warehouse::generate(&table.rows());
            let size = TableSize::percentage(100.0, 200.0, ColumnSizing::Default, MIN);

            let widths = widths(&warehouse, &table, &ColumnBars::Ltr, &size);

            assert_abs_diff_eq!(widths[0], 50.0, epsilon = 1e-9);
            assert_abs_diff_eq!(widths[1], 25.0, epsilon = 1e-9);
            assert_abs_diff_eq!(widths[2], 25.0, epsilon = 1e-9);
        }
    }

    mod pixel_heights {
        use super::*;

        #[test]
        fn declared_height_wins_over_measured() {
            let table = StubTable::new(100.0)
                .row(vec![cell(0.0, 0.0, 100.0, 30.0)])
                .row(vec![cell(0.0, 30.0, 100.0, 40.0).height("45px")]);
            let warehouse = Warehouse::generate(&table.rows());

            assert_eq!(pixel_heights(&warehouse, &table, MIN), vec![30.0, 45.0]);
        }

        #[test]
        fn spanning_representative_is_deduced_from_tops() {
            let table = StubTable::new(200.0)
                .row(vec![
                    cell(0.0, 0.0, 100.0, 30.0),
                    cell(100.0, 0.0, 100.0, 90.0).span(2, 1),
                ])
                .row(vec![cell(0.0, 30.0, 100.0, 80.0).span(2, 1)])
                .row(vec![cell(100.0, 90.0, 100.0, 20.0)]);
            let warehouse = Warehouse::generate(&table.rows());

            let heights = pixel_heights(&warehouse, &table, MIN);

            assert_eq!(heights, vec![30.0, 60.0, 20.0]);
        }

        #[test]
        fn empty_table_has_no_rows() {
            let table = StubTable::new(0.0);
            let warehouse = Warehouse::generate(&table.rows());

            assert!(pixel_heights(&warehouse, &table, MIN).is_empty());
        }
    }
}
