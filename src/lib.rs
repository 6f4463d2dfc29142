pub use tablesize_app as app;
pub use tablesize_domain as domain;
pub use tablesize_infra as infra;

pub mod error;
