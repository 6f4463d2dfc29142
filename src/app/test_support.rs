use std::collections::BTreeMap;

use tablesize_domain::{CellDetail, CellId, Rect, RowDetails, RowId, Size};

use crate::ports::{CellMetrics, SizeSink, TableSource};

pub struct StubCell {
    rowspan: usize,
    colspan: usize,
    metrics: CellMetrics,
}

pub fn cell(x: f64, y: f64, width: f64, height: f64) -> StubCell {
    StubCell {
        rowspan: 1,
        colspan: 1,
        metrics: CellMetrics {
            rect: Rect::new(x, y, width, height),
            ..CellMetrics::default()
        },
    }
}

impl StubCell {
    pub fn span(mut self, rowspan: usize, colspan: usize) -> Self {
        self.rowspan = rowspan;
        self.colspan = colspan;
        self
    }

    pub fn width(mut self, declared: &str) -> Self {
        self.metrics.declared_width = Some(declared.to_string());
        self
    }

    pub fn height(mut self, declared: &str) -> Self {
        self.metrics.declared_height = Some(declared.to_string());
        self
    }
}

/// In-memory table that records everything written to it.
#[derive(Debug, Default)]
pub struct StubTable {
    pub declared_width: Option<String>,
    pub rendered_width: f64,
    rows: Vec<RowDetails>,
    cells: Vec<CellMetrics>,
    pub cell_widths: BTreeMap<CellId, Size>,
    pub cell_heights: BTreeMap<CellId, f64>,
    pub row_heights: BTreeMap<RowId, f64>,
    pub table_width: Option<Size>,
    pub table_height: Option<f64>,
}

impl StubTable {
    pub fn new(rendered_width: f64) -> Self {
        Self {
            rendered_width,
            ..Self::default()
        }
    }

    pub fn declared(mut self, width: &str) -> Self {
        self.declared_width = Some(width.to_string());
        self
    }

    pub fn row(mut self, cells: Vec<StubCell>) -> Self {
        let details = cells
            .into_iter()
            .map(|cell| {
                let id = CellId(self.cells.len());
                self.cells.push(cell.metrics);
                CellDetail::new(id, cell.rowspan, cell.colspan)
            })
            .collect();
        let row = RowId(self.rows.len());
        self.rows.push(RowDetails::new(row, details));
        self
    }
}

impl TableSource for StubTable {
    fn declared_width(&self) -> Option<String> {
        self.declared_width.clone()
    }

    fn rendered_width(&self) -> f64 {
        self.rendered_width
    }

    fn rows(&self) -> Vec<RowDetails> {
        self.rows.clone()
    }

    fn cell_metrics(&self, cell: CellId) -> CellMetrics {
        self.cells.get(cell.0).cloned().unwrap_or_default()
    }
}

impl SizeSink for StubTable {
    fn set_cell_width(&mut self, cell: CellId, width: Size) {
        self.cell_widths.insert(cell, width);
    }

    fn set_cell_height(&mut self, cell: CellId, height: f64) {
        self.cell_heights.insert(cell, height);
    }

    fn set_row_height(&mut self, row: RowId, height: f64) {
        self.row_heights.insert(row, height);
    }

    fn set_table_width(&mut self, width: Size) {
        self.table_width = Some(width);
    }

    fn set_table_height(&mut self, height: f64) {
        self.table_height = Some(height);
    }
}
