pub mod config_load;
pub mod config_types;
pub mod constants;

pub use config_load::Config;
pub use config_types::{LoggingConfig, WindowConfig};
pub use constants::*;
