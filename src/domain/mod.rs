pub mod assignment;
pub mod geometry;
pub mod grid;
pub mod size;
pub mod sizing;

pub use assignment::{HeightAssignment, RowHeightAssignment, WidthAssignment};
pub use geometry::Rect;
pub use grid::{CellDetail, CellId, Extended, ExtendedRow, GridSize, RowDetails, RowId, Warehouse};
pub use size::{Size, parse_percentage, parse_pixels, parse_size};
pub use sizing::{ColumnSizing, ParseColumnSizingError, WidthType};
