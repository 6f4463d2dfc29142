use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, bail};
use tracing::debug;

use tablesize::app::ports::{ConfigStore, TableSource};
use tablesize::app::{ColumnBars, adjust_height, adjust_width, adjust_width_to};
use tablesize::domain::{ColumnSizing, Warehouse};
use tablesize::error;
use tablesize::infra::adapters::TomlConfigStore;
use tablesize::infra::document::{DocumentFormat, TableDocument, TableLayout};

/// Resize a table's columns or rows and print the updated table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the per-user one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Encoding of the printed table
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Toml)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drag the bar after column INDEX by DELTA pixels
    Width {
        file: PathBuf,
        #[arg(long)]
        index: usize,
        #[arg(long, allow_negative_numbers = true)]
        delta: f64,
        /// Overrides `column_sizing` from the config
        #[arg(long)]
        sizing: Option<ColumnSizing>,
        /// Table is laid out right to left
        #[arg(long)]
        rtl: bool,
    },
    /// Drag the bar below row INDEX by DELTA pixels
    Height {
        file: PathBuf,
        #[arg(long)]
        index: usize,
        #[arg(long, allow_negative_numbers = true)]
        delta: f64,
    },
    /// Give the cells of a new row layout the widths their columns measure at
    Conform {
        file: PathBuf,
        /// Layout file listing the document's cells row by row
        #[arg(long)]
        target: PathBuf,
        #[arg(long)]
        rtl: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Toml,
    Json,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Toml => Self::Toml,
            OutputFormat::Json => Self::Json,
        }
    }
}

fn bars(rtl: bool) -> ColumnBars {
    if rtl {
        ColumnBars::Rtl
    } else {
        ColumnBars::Ltr
    }
}

fn check_column(document: &TableDocument, index: usize) -> Result<()> {
    let columns = Warehouse::generate(&document.rows()).grid().columns;
    if index >= columns {
        bail!("column {index} does not exist, the table has {columns}");
    }
    Ok(())
}

fn check_row(document: &TableDocument, index: usize) -> Result<()> {
    let rows = Warehouse::generate(&document.rows()).grid().rows;
    if index >= rows {
        bail!("row {index} does not exist, the table has {rows}");
    }
    Ok(())
}

/// Every cell a layout places must exist in the document.
fn check_layout(document: &TableDocument, layout: &TableLayout) -> Result<()> {
    let known: usize = document.rows.iter().map(|row| row.cells.len()).sum();
    let mut placed = layout.rows.iter().flat_map(|row| &row.cells);
    if let Some(unknown) = placed.find(|cell| cell.cell >= known) {
        let cell = unknown.cell;
        bail!("layout refers to cell {cell}, the table has {known}");
    }
    Ok(())
}

fn main() -> Result<()> {
    error::install_hooks()?;
    error::install_tracing();

    let args = Args::parse();

    let store = match args.config {
        Some(path) => TomlConfigStore::with_config_path(path),
        None => TomlConfigStore::new()?,
    };
    let config = store.load()?;
    debug!(?config, path = %store.storage_path().display(), "resize config");

    let document = match args.command {
        Command::Width {
            file,
            index,
            delta,
            sizing,
            rtl,
        } => {
            let mut document = TableDocument::load(&file)?;
            check_column(&document, index)?;
            let config = sizing.map_or(config, |sizing| config.with_column_sizing(sizing));
            adjust_width(
                &mut document,
                delta,
                index,
                bars(rtl),
                config.column_sizing,
                &config,
            );
            document
        }
        Command::Height { file, index, delta } => {
            let mut document = TableDocument::load(&file)?;
            check_row(&document, index)?;
            adjust_height(&mut document, delta, index, &config);
            document
        }
        Command::Conform { file, target, rtl } => {
            let mut document = TableDocument::load(&file)?;
            let layout = TableLayout::load(&target)?;
            check_layout(&document, &layout)?;
            let target = layout.to_row_details();
            adjust_width_to(&mut document, &target, bars(rtl), &config);
            document
        }
    };

    let output = document.render(args.format.into())?;
    writeln!(io::stdout().lock(), "{output}")?;

    Ok(())
}
