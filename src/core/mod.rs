pub mod config;
pub mod error;

pub use config::{config, set_config, HelperConfig};
pub use error::{HelperError, Result};
