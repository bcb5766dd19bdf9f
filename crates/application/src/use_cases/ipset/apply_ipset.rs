use crate::ports::{DomainMatcher, IpSetWriter};
use ferrous_ipset_domain::{DnsAnswer, DnsMessage, DomainError, IpSetSettings, SetEntry};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// A rule ready for evaluation. At least one of the set names is present.
pub struct CompiledRule {
    set_name4: Option<Arc<str>>,
    set_name6: Option<Arc<str>>,
    matcher: Box<dyn DomainMatcher>,
}

impl CompiledRule {
    /// Returns `None` when both set names are empty.
    pub fn new(set_name4: &str, set_name6: &str, matcher: Box<dyn DomainMatcher>) -> Option<Self> {
        let set_name4 = non_empty(set_name4);
        let set_name6 = non_empty(set_name6);
        if set_name4.is_none() && set_name6.is_none() {
            return None;
        }

        Some(Self {
            set_name4,
            set_name6,
            matcher,
        })
    }

    pub fn set_name4(&self) -> Option<&str> {
        self.set_name4.as_deref()
    }

    pub fn set_name6(&self) -> Option<&str> {
        self.set_name6.as_deref()
    }

    fn matches(&self, query: &DnsMessage, response: &DnsMessage, check_cname: bool) -> bool {
        if query.question_names().any(|name| self.matcher.accepts(name)) {
            return true;
        }

        check_cname
            && response
                .cname_targets()
                .any(|target| self.matcher.accepts(target))
    }

    fn entry_for(&self, answer: &DnsAnswer, settings: &IpSetSettings) -> Option<SetEntry> {
        let (address, set_name, mask) = match answer {
            DnsAnswer::A(ip) => (IpAddr::V4(*ip), self.set_name4.as_ref()?, settings.mask4),
            DnsAnswer::AAAA(ip) => (IpAddr::V6(*ip), self.set_name6.as_ref()?, settings.mask6),
            _ => return None,
        };

        Some(SetEntry::new(address, Arc::clone(set_name), mask))
    }
}

fn non_empty(name: &str) -> Option<Arc<str>> {
    if name.is_empty() {
        None
    } else {
        Some(Arc::from(name))
    }
}

/// Pushes the addresses of matching DNS answers into kernel address sets.
///
/// Rules are evaluated in declaration order and every matching rule fires.
/// The first writer failure aborts the call; entries already written stay.
pub struct ApplyIpSetUseCase {
    settings: IpSetSettings,
    rules: Vec<CompiledRule>,
    writer: Arc<dyn IpSetWriter>,
}

impl ApplyIpSetUseCase {
    pub fn new(
        settings: IpSetSettings,
        rules: Vec<CompiledRule>,
        writer: Arc<dyn IpSetWriter>,
    ) -> Self {
        Self {
            settings,
            rules,
            writer,
        }
    }

    pub fn settings(&self) -> &IpSetSettings {
        &self.settings
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Returns the number of entries handed to the writer.
    pub fn execute(&self, query: &DnsMessage, response: &DnsMessage) -> Result<usize, DomainError> {
        let mut injected = 0;

        for rule in &self.rules {
            if !rule.matches(query, response, self.settings.check_cname) {
                continue;
            }

            for answer in &response.answers {
                let Some(entry) = rule.entry_for(answer, &self.settings) else {
                    continue;
                };

                debug!(
                    query_id = query.id,
                    address = %entry.address,
                    mask = entry.prefix_length,
                    set = %entry.set_name,
                    "ApplyIpSet: adding entry"
                );

                self.writer
                    .add_cidr(&entry)
                    .map_err(|source| DomainError::IpSetInjection {
                        address: entry.address,
                        set_name: Arc::clone(&entry.set_name),
                        source,
                    })?;
                injected += 1;
            }
        }

        Ok(injected)
    }
}
