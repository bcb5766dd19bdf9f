use ferrous_ipset_application::ports::IpSetWriter;
use ferrous_ipset_domain::{SetEntry, SetMutationError};
use std::time::Duration;

/// Stand-in for platforms without kernel ipsets; every write fails.
#[derive(Debug, Default)]
pub struct NetlinkIpSetWriter;

impl NetlinkIpSetWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn with_timeout(_ack_timeout: Duration) -> Self {
        Self
    }
}

impl IpSetWriter for NetlinkIpSetWriter {
    fn add_cidr(&self, _entry: &SetEntry) -> Result<(), SetMutationError> {
        Err(SetMutationError::Unsupported)
    }
}
