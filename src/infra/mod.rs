//! Concrete tables and configuration storage behind the application ports.

pub mod adapters;
pub mod config;
pub mod document;
