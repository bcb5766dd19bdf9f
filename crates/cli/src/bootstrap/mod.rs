mod config;
mod logging;

pub use config::{load_config, LoadedConfig};
pub use logging::init_logging;
