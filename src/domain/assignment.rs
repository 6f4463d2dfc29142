use crate::grid::{CellId, RowId};

/// New width for one cell, in the table's unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthAssignment {
    pub cell: CellId,
    pub width: f64,
}

/// New height for one cell, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightAssignment {
    pub cell: CellId,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowHeightAssignment {
    pub row: RowId,
    pub height: f64,
}
