#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("ipset {family} mask {value} is out of range (max {max})")]
    MaskOutOfRange {
        family: &'static str,
        value: u8,
        max: u8,
    },

    #[error("ipset rule #{index} has an empty domain list")]
    EmptyRuleDomain { index: usize },
}
