pub mod domain_policy;
pub mod message_parser;

pub use domain_policy::{DomainPolicies, FileDomainPolicyFactory};
pub use message_parser::DnsMessageParser;
