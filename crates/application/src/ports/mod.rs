mod domain_matcher;
mod ipset_writer;

pub use domain_matcher::{DomainMatcher, DomainMatcherFactory};
pub use ipset_writer::IpSetWriter;
