pub mod errors;
pub mod ipset;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use ipset::{IpSetConfig, IpSetRuleConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
