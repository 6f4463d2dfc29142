pub mod fixtures;

use std::fmt::Write;

use tablesize::infra::document::TableDocument;

fn or_dash(value: Option<&String>) -> &str {
    value.map_or("-", String::as_str)
}

/// One line for the table and one per row, each cell as `width/height`.
pub fn summary(document: &TableDocument) -> String {
    let mut result = format!(
        "table {}/{}",
        or_dash(document.width.as_ref()),
        or_dash(document.height.as_ref())
    );
    for (r, row) in document.rows.iter().enumerate() {
        write!(result, "\nrow {r} {}:", or_dash(row.height.as_ref())).unwrap();
        for cell in &row.cells {
            write!(
                result,
                " {}/{}",
                or_dash(cell.width.as_ref()),
                or_dash(cell.height.as_ref())
            )
            .unwrap();
        }
    }
    result
}
