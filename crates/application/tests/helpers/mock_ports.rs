#![allow(dead_code)]

use ferrous_ipset_application::ports::{DomainMatcher, DomainMatcherFactory, IpSetWriter};
use ferrous_ipset_domain::{
    normalize_domain, DomainError, PolicyAction, SetEntry, SetMutationError,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Exact-name matcher; names are compared without the trailing root dot.
pub struct MockDomainMatcher {
    accepted: HashSet<String>,
    denied: HashSet<String>,
}

impl MockDomainMatcher {
    pub fn accepting(domains: &[&str]) -> Self {
        Self {
            accepted: domains.iter().map(|d| normalize_domain(d)).collect(),
            denied: HashSet::new(),
        }
    }

    pub fn deny(mut self, domain: &str) -> Self {
        self.denied.insert(normalize_domain(domain));
        self
    }
}

impl DomainMatcher for MockDomainMatcher {
    fn match_domain(&self, name: &str) -> Option<PolicyAction> {
        let name = normalize_domain(name);
        if self.denied.contains(&name) {
            Some(PolicyAction::Deny)
        } else if self.accepted.contains(&name) {
            Some(PolicyAction::Accept)
        } else {
            None
        }
    }
}

/// Resolves a spec to a registered domain list; unknown specs fail.
#[derive(Default)]
pub struct MockMatcherFactory {
    lists: HashMap<String, Vec<String>>,
    built: Mutex<Vec<String>>,
}

impl MockMatcherFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, spec: &str, domains: &[&str]) -> Self {
        self.lists.insert(
            spec.to_string(),
            domains.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    pub fn built_specs(&self) -> Vec<String> {
        self.built.lock().unwrap().clone()
    }
}

impl DomainMatcherFactory for MockMatcherFactory {
    fn build(&self, spec: &str) -> Result<Box<dyn DomainMatcher>, DomainError> {
        self.built.lock().unwrap().push(spec.to_string());
        let domains = self.lists.get(spec).ok_or_else(|| {
            DomainError::InvalidDomainList(format!("no such list: {}", spec))
        })?;
        let refs: Vec<&str> = domains.iter().map(String::as_str).collect();
        Ok(Box::new(MockDomainMatcher::accepting(&refs)))
    }
}

/// Records every attempted write; can be told to fail on the n-th attempt.
#[derive(Default)]
pub struct RecordingIpSetWriter {
    attempts: Mutex<Vec<SetEntry>>,
    written: Mutex<Vec<SetEntry>>,
    fail_on_attempt: Option<usize>,
}

impl RecordingIpSetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `attempt` is 1-based.
    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on_attempt: Some(attempt),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> Vec<SetEntry> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn written(&self) -> Vec<SetEntry> {
        self.written.lock().unwrap().clone()
    }
}

impl IpSetWriter for RecordingIpSetWriter {
    fn add_cidr(&self, entry: &SetEntry) -> Result<(), SetMutationError> {
        let mut attempts = self.attempts.lock().unwrap();
        attempts.push(entry.clone());
        if self.fail_on_attempt == Some(attempts.len()) {
            return Err(SetMutationError::SetNotFound(entry.set_name.to_string()));
        }
        self.written.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
