#[cfg(test)]
use mockall::automock;

use tablesize_domain::{CellId, RowId, Size};

/// Write side of a table. Heights are always pixels.
#[cfg_attr(test, automock)]
pub trait SizeSink {
    fn set_cell_width(&mut self, cell: CellId, width: Size);

    fn set_cell_height(&mut self, cell: CellId, height: f64);

    fn set_row_height(&mut self, row: RowId, height: f64);

    fn set_table_width(&mut self, width: Size);

    fn set_table_height(&mut self, height: f64);
}
