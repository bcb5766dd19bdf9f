use std::net::IpAddr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid domain list: {0}")]
    InvalidDomainList(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("failed to init ipset domain policies {list}: {source}")]
    IpSetRuleCompile {
        list: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("failed to add ip {address} to set {set_name}: {source}")]
    IpSetInjection {
        address: IpAddr,
        set_name: Arc<str>,
        #[source]
        source: SetMutationError,
    },
}

/// Failure reported by a kernel set writer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetMutationError {
    #[error("set {0} does not exist")]
    SetNotFound(String),

    #[error("permission denied")]
    PermissionDenied,

    #[error("invalid set name: {0}")]
    InvalidSetName(String),

    #[error("kernel rejected request (errno {code})")]
    Kernel { code: i32 },

    #[error("netlink I/O error: {0}")]
    Io(String),

    #[error("kernel address sets are not supported on this platform")]
    Unsupported,
}
