//! Ferrous IPSet Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod domain_policy;
pub mod errors;
pub mod ipset;

pub use config::{CliOverrides, Config, ConfigError, IpSetConfig, IpSetRuleConfig};
pub use dns_message::{DnsMessage, DnsQuestion};
pub use dns_record::{DnsAnswer, RecordType};
pub use domain_policy::{normalize_domain, DomainPolicy, DomainPolicySpec, PolicyAction};
pub use errors::{DomainError, SetMutationError};
pub use ipset::{IpSetSettings, SetEntry, DEFAULT_IPV4_MASK, DEFAULT_IPV6_MASK};
