pub mod config_store;
pub mod size_sink;
pub mod table_source;

pub use config_store::{ConfigStore, ConfigStoreError};
pub use size_sink::SizeSink;
pub use table_source::{CellMetrics, TableSource};

#[cfg(test)]
pub use size_sink::MockSizeSink;
#[cfg(test)]
pub use table_source::MockTableSource;
