use std::path::Path;

use serde::{Deserialize, Serialize};

use tablesize_domain::{CellDetail, CellId, RowDetails, RowId};

use super::{DocumentError, format, one};

/// A cell of an existing document placed into a new row structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCell {
    /// Position of the cell in its document, in document order.
    pub cell: usize,
    #[serde(default = "one")]
    pub rowspan: usize,
    #[serde(default = "one")]
    pub colspan: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRow {
    #[serde(default)]
    pub cells: Vec<LayoutCell>,
}

/// Row structure that a document's cells should be conformed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    #[serde(default)]
    pub rows: Vec<LayoutRow>,
}

impl TableLayout {
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        format::read(path)
    }

    pub fn to_row_details(&self) -> Vec<RowDetails> {
        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                RowDetails::new(
                    RowId(r),
                    row.cells
                        .iter()
                        .map(|c| CellDetail::new(CellId(c.cell), c.rowspan, c.colspan))
                        .collect(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFormat;

    #[test]
    fn spans_default_to_one() {
        let layout: TableLayout = DocumentFormat::Toml
            .decode(
                r#"
[[rows]]
cells = [{ cell = 0, colspan = 2 }, { cell = 1 }]

[[rows]]
cells = [{ cell = 4 }]
"#,
            )
            .unwrap();

        let rows = layout.to_row_details();

        assert_eq!(rows[0].cells[0], CellDetail::new(CellId(0), 1, 2));
        assert_eq!(rows[0].cells[1], CellDetail::single(CellId(1)));
        assert_eq!(rows[1].element, RowId(1));
        assert_eq!(rows[1].cells, vec![CellDetail::single(CellId(4))]);
    }

    #[test]
    fn loads_json_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("layout.json");
        let json = r#"{ "rows": [{ "cells": [{ "cell": 2, "rowspan": 2 }] }] }"#;
        std::fs::write(&path, json).unwrap();

        let layout = TableLayout::load(&path).unwrap();

        assert_eq!(layout.rows[0].cells[0].rowspan, 2);
    }
}
