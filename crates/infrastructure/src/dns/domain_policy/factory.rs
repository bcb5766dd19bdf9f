use super::list_parser::parse_list_text;
use super::policies::{CompiledPolicy, DomainPolicies, PolicyScope};
use super::suffix_trie::SuffixTrie;
use ferrous_ipset_application::ports::{DomainMatcher, DomainMatcherFactory};
use ferrous_ipset_domain::{DomainError, DomainPolicySpec};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Builds [`DomainPolicies`] from `action:path|...` specifications, reading
/// list files from disk.
#[derive(Debug, Default, Clone)]
pub struct FileDomainPolicyFactory {
    base_dir: Option<PathBuf>,
}

impl FileDomainPolicyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative list paths are resolved against `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    pub fn load(&self, spec: &str) -> Result<DomainPolicies, DomainError> {
        let parsed = DomainPolicySpec::parse(spec)?;
        let mut policies = Vec::with_capacity(parsed.policies.len());

        for policy in parsed.policies {
            let scope = match policy.source {
                None => PolicyScope::All,
                Some(source) => PolicyScope::List(self.load_list(&source)?),
            };
            policies.push(CompiledPolicy {
                action: policy.action,
                scope,
            });
        }

        Ok(DomainPolicies::new(policies))
    }

    fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn load_list(&self, source: &str) -> Result<SuffixTrie, DomainError> {
        let path = self.resolve(source);
        let text = std::fs::read_to_string(&path).map_err(|e| {
            DomainError::IoError(format!("failed to read domain list {}: {}", path.display(), e))
        })?;

        let mut trie = SuffixTrie::new();
        for entry in parse_list_text(&text) {
            trie.insert(&entry.domain, entry.kind);
        }

        if trie.is_empty() {
            warn!(path = %path.display(), "Domain list contains no entries");
        } else {
            debug!(path = %path.display(), entries = trie.len(), "Domain list loaded");
        }

        Ok(trie)
    }
}

impl DomainMatcherFactory for FileDomainPolicyFactory {
    fn build(&self, spec: &str) -> Result<Box<dyn DomainMatcher>, DomainError> {
        Ok(Box::new(self.load(spec)?))
    }
}
