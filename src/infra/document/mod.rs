//! In-memory table document.
//!
//! A document is a plain record of rows and cells with declared sizes and the
//! boxes they were rendered at. Cells are addressed by their position in
//! document order, rows by their index.

mod format;
mod layout;

use std::path::Path;

use serde::{Deserialize, Serialize};

use tablesize_app::ports::{CellMetrics, SizeSink, TableSource};
use tablesize_domain::{CellDetail, CellId, Rect, RowDetails, RowId, Size};

pub use format::DocumentFormat;
pub use layout::{LayoutCell, LayoutRow, TableLayout};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Unsupported document format: {0:?}")]
    UnsupportedFormat(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
}

fn one() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default = "one")]
    pub rowspan: usize,
    #[serde(default = "one")]
    pub colspan: usize,
    #[serde(default)]
    pub rect: Rect,
}

impl CellRecord {
    pub fn new(rect: Rect) -> Self {
        Self {
            width: None,
            height: None,
            rowspan: 1,
            colspan: 1,
            rect,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default)]
    pub cells: Vec<CellRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    /// Declared table width, e.g. `"500px"` or `"100%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Box the table was rendered at.
    #[serde(default)]
    pub rendered: Rect,
    #[serde(default)]
    pub rows: Vec<RowRecord>,
}

impl TableDocument {
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        format::read(path)
    }

    pub fn render(&self, format: DocumentFormat) -> Result<String, DocumentError> {
        format.encode(self)
    }

    pub fn cell(&self, id: CellId) -> Option<&CellRecord> {
        self.rows.iter().flat_map(|row| &row.cells).nth(id.0)
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut CellRecord> {
        self.rows
            .iter_mut()
            .flat_map(|row| &mut row.cells)
            .nth(id.0)
    }
}

impl TableSource for TableDocument {
    fn declared_width(&self) -> Option<String> {
        self.width.clone()
    }

    fn rendered_width(&self) -> f64 {
        self.rendered.width
    }

    fn rows(&self) -> Vec<RowDetails> {
        let mut next = 0;
        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let cells = row
                    .cells
                    .iter()
                    .map(|cell| {
                        let detail = CellDetail::new(CellId(next), cell.rowspan, cell.colspan);
                        next += 1;
                        detail
                    })
                    .collect();
                RowDetails::new(RowId(r), cells)
            })
            .collect()
    }

    fn cell_metrics(&self, cell: CellId) -> CellMetrics {
        self.cell(cell)
            .map(|record| CellMetrics {
                declared_width: record.width.clone(),
                declared_height: record.height.clone(),
                rect: record.rect,
            })
            .unwrap_or_default()
    }
}

impl SizeSink for TableDocument {
    fn set_cell_width(&mut self, cell: CellId, width: Size) {
        if let Some(record) = self.cell_mut(cell) {
            record.width = Some(width.to_string());
        }
    }

    fn set_cell_height(&mut self, cell: CellId, height: f64) {
        if let Some(record) = self.cell_mut(cell) {
            record.height = Some(Size::Pixels(height).to_string());
        }
    }

    fn set_row_height(&mut self, row: RowId, height: f64) {
        if let Some(record) = self.rows.get_mut(row.0) {
            record.height = Some(Size::Pixels(height).to_string());
        }
    }

    fn set_table_width(&mut self, width: Size) {
        self.width = Some(width.to_string());
    }

    fn set_table_height(&mut self, height: f64) {
        self.height = Some(Size::Pixels(height).to_string());
    }
}
