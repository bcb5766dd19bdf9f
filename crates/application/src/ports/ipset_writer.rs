use ferrous_ipset_domain::{SetEntry, SetMutationError};

/// Adds a CIDR to a named kernel address set.
///
/// Called synchronously from the classifier; implementations must be safe to
/// call from several threads at once.
pub trait IpSetWriter: Send + Sync {
    fn add_cidr(&self, entry: &SetEntry) -> Result<(), SetMutationError>;
}
