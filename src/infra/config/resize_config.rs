use serde::{Deserialize, Serialize};

use tablesize_app::ResizeConfig;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct ResizeConfigFile {
    pub version: u32,
    #[serde(flatten)]
    pub resize: ResizeConfig,
}
