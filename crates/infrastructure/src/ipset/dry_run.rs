use ferrous_ipset_application::ports::IpSetWriter;
use ferrous_ipset_domain::{SetEntry, SetMutationError};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Logs entries instead of touching the kernel.
#[derive(Debug, Default)]
pub struct DryRunIpSetWriter {
    entries: AtomicU64,
}

impl DryRunIpSetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> u64 {
        self.entries.load(Ordering::Relaxed)
    }
}

impl IpSetWriter for DryRunIpSetWriter {
    fn add_cidr(&self, entry: &SetEntry) -> Result<(), SetMutationError> {
        self.entries.fetch_add(1, Ordering::Relaxed);
        info!(
            address = %entry.address,
            mask = entry.prefix_length,
            set = %entry.set_name,
            ipv6 = entry.is_ipv6,
            "dry-run: would add entry"
        );
        Ok(())
    }
}
