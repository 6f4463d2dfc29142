use tablesize_domain::Rect;

/// Where the leading resize bar of a column or row sits on its box.
pub trait BarPositions {
    fn edge(&self, rect: &Rect) -> f64;
}

/// Text direction of the table; decides which side of a cell leads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnBars {
    #[default]
    Ltr,
    Rtl,
}

impl BarPositions for ColumnBars {
    fn edge(&self, rect: &Rect) -> f64 {
        match self {
            ColumnBars::Ltr => rect.left(),
            ColumnBars::Rtl => rect.right(),
        }
    }
}

/// Rows always lead with their top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowBars;

impl BarPositions for RowBars {
    fn edge(&self, rect: &Rect) -> f64 {
        rect.top()
    }
}
