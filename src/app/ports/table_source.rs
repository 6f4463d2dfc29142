#[cfg(test)]
use mockall::automock;

use tablesize_domain::{CellId, Rect, RowDetails};

/// What a table exposes about a single cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellMetrics {
    /// Width as declared in markup or style, e.g. `"120px"` or `"25%"`.
    pub declared_width: Option<String>,
    pub declared_height: Option<String>,
    /// Rendered box.
    pub rect: Rect,
}

/// Read side of a table: structure, declared sizes and rendered geometry.
#[cfg_attr(test, automock)]
pub trait TableSource {
    /// The table's own declared width, if any.
    fn declared_width(&self) -> Option<String>;

    /// The table's rendered width in pixels.
    fn rendered_width(&self) -> f64;

    /// Rows of cell details in document order.
    fn rows(&self) -> Vec<RowDetails>;

    fn cell_metrics(&self, cell: CellId) -> CellMetrics;
}
