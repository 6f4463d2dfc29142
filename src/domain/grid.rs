//! Logical row/column model of a table with merged cells.
//!
//! Rows are given in document order, each with its cells in document order.
//! [`Warehouse::generate`] lays them out on a grid, skipping slots already
//! covered by a rowspan from an earlier row, so every cell learns the logical
//! row and column it starts at.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Handle of a cell element, owned by whoever supplied the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub usize);

/// Handle of a row element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDetail {
    pub element: CellId,
    pub rowspan: usize,
    pub colspan: usize,
}

impl CellDetail {
    pub fn new(element: CellId, rowspan: usize, colspan: usize) -> Self {
        Self {
            element,
            rowspan,
            colspan,
        }
    }

    pub fn single(element: CellId) -> Self {
        Self::new(element, 1, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDetails {
    pub element: RowId,
    pub cells: Vec<CellDetail>,
}

impl RowDetails {
    pub fn new(element: RowId, cells: Vec<CellDetail>) -> Self {
        Self { element, cells }
    }
}

/// A cell placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extended {
    pub element: CellId,
    pub rowspan: usize,
    pub colspan: usize,
    pub row: usize,
    pub column: usize,
}

impl Extended {
    pub fn has_colspan(&self) -> bool {
        self.colspan > 1
    }

    pub fn has_rowspan(&self) -> bool {
        self.rowspan > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedRow {
    pub element: RowId,
    pub cells: Vec<Extended>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    grid: GridSize,
    access: HashMap<(usize, usize), Extended>,
    all: Vec<ExtendedRow>,
}

impl Warehouse {
    pub fn generate(rows: &[RowDetails]) -> Self {
        let mut access = HashMap::new();
        let mut all = Vec::with_capacity(rows.len());
        let mut columns = 0;

        for (r, details) in rows.iter().enumerate() {
            let mut current_row = Vec::with_capacity(details.cells.len());

            for detail in &details.cells {
                let mut start = 0;
                while access.contains_key(&(r, start)) {
                    start += 1;
                }

                let current = Extended {
                    element: detail.element,
                    rowspan: detail.rowspan.max(1),
                    colspan: detail.colspan.max(1),
                    row: r,
                    column: start,
                };

                for dc in 0..current.colspan {
                    for dr in 0..current.rowspan {
                        access.insert((r + dr, start + dc), current);
                    }
                    columns = columns.max(start + dc + 1);
                }

                current_row.push(current);
            }

            all.push(ExtendedRow {
                element: details.element,
                cells: current_row,
            });
        }

        Self {
            grid: GridSize {
                rows: rows.len(),
                columns,
            },
            access,
            all,
        }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn get_at(&self, row: usize, column: usize) -> Option<&Extended> {
        self.access.get(&(row, column))
    }

    pub fn rows(&self) -> &[ExtendedRow] {
        &self.all
    }

    pub fn cells(&self) -> impl Iterator<Item = &Extended> {
        self.all.iter().flat_map(|row| row.cells.iter())
    }

    /// One representative cell per logical column.
    ///
    /// Prefers a cell starting in the column with colspan 1, then any cell
    /// starting in it, then whatever covers row 0 of the column.
    pub fn column_cells(&self) -> Vec<Option<Extended>> {
        (0..self.grid.columns)
            .map(|column| {
                let block: Vec<Extended> = (0..self.grid.rows)
                    .filter_map(|row| self.get_at(row, column))
                    .filter(|detail| detail.column == column)
                    .copied()
                    .collect();
                decide(&block, |d| d.colspan == 1).or_else(|| self.get_at(0, column).copied())
            })
            .collect()
    }

    /// One representative cell per logical row, mirroring [`Self::column_cells`].
    pub fn row_cells(&self) -> Vec<Option<Extended>> {
        (0..self.grid.rows)
            .map(|row| {
                let block: Vec<Extended> = (0..self.grid.columns)
                    .filter_map(|column| self.get_at(row, column))
                    .filter(|detail| detail.row == row)
                    .copied()
                    .collect();
                decide(&block, |d| d.rowspan == 1).or_else(|| self.get_at(row, 0).copied())
            })
            .collect()
    }
}

fn decide(block: &[Extended], is_valid: impl Fn(&Extended) -> bool) -> Option<Extended> {
    block
        .iter()
        .find(|d| is_valid(d))
        .or_else(|| block.first())
        .copied()
}
