use super::suffix_trie::SuffixTrie;
use ferrous_ipset_application::ports::DomainMatcher;
use ferrous_ipset_domain::{normalize_domain, PolicyAction};

/// What a single policy applies to.
pub enum PolicyScope {
    All,
    List(SuffixTrie),
}

pub struct CompiledPolicy {
    pub action: PolicyAction,
    pub scope: PolicyScope,
}

impl CompiledPolicy {
    fn covers(&self, domain: &str) -> bool {
        match &self.scope {
            PolicyScope::All => true,
            PolicyScope::List(trie) => trie.contains(domain),
        }
    }
}

/// Ordered policy chain; the first policy that covers a name decides.
pub struct DomainPolicies {
    policies: Vec<CompiledPolicy>,
}

impl DomainPolicies {
    pub fn new(policies: Vec<CompiledPolicy>) -> Self {
        Self { policies }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl DomainMatcher for DomainPolicies {
    fn match_domain(&self, name: &str) -> Option<PolicyAction> {
        let domain = normalize_domain(name);
        self.policies
            .iter()
            .find(|policy| policy.covers(&domain))
            .map(|policy| policy.action)
    }
}
