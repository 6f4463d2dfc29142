pub mod resize_config;

pub use resize_config::{CURRENT_VERSION, ResizeConfigFile};
