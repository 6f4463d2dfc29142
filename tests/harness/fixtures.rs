use tablesize::infra::document::{DocumentFormat, TableDocument};

/// Three columns of 100, 100 and 200px under a header whose first cell
/// spans the first two. The declared width carries 10px of borders.
pub const MERGED_HEADER: &str = r#"
width = "410px"
rendered = { x = 0, y = 0, width = 410, height = 60 }

[[rows]]
[[rows.cells]]
colspan = 2
rect = { x = 5, y = 5, width = 200, height = 25 }

[[rows.cells]]
rect = { x = 205, y = 5, width = 200, height = 25 }

[[rows]]
[[rows.cells]]
rect = { x = 5, y = 30, width = 100, height = 25 }

[[rows.cells]]
rect = { x = 105, y = 30, width = 100, height = 25 }

[[rows.cells]]
rect = { x = 205, y = 30, width = 200, height = 25 }
"#;

pub fn merged_header() -> TableDocument {
    DocumentFormat::Toml.decode(MERGED_HEADER).unwrap()
}

/// Same table declared at full width of a 400px container.
pub fn merged_header_relative() -> TableDocument {
    let mut document = merged_header();
    document.width = Some("100%".to_string());
    document.rendered.width = 400.0;
    document
}
