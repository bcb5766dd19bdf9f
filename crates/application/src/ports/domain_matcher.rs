use ferrous_ipset_domain::{DomainError, PolicyAction};

/// Answers "does this name match the configured domain criteria".
pub trait DomainMatcher: Send + Sync {
    /// `None` when no policy covers `name`.
    fn match_domain(&self, name: &str) -> Option<PolicyAction>;

    fn accepts(&self, name: &str) -> bool {
        self.match_domain(name) == Some(PolicyAction::Accept)
    }
}

/// Builds a matcher from a rule's domain-list specification.
pub trait DomainMatcherFactory: Send + Sync {
    fn build(&self, spec: &str) -> Result<Box<dyn DomainMatcher>, DomainError>;
}
