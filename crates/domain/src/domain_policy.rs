use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyAction {
    Accept,
    Deny,
}

impl PolicyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyAction::Accept => "accept",
            PolicyAction::Deny => "deny",
        }
    }
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" => Ok(PolicyAction::Accept),
            "deny" => Ok(PolicyAction::Deny),
            other => Err(DomainError::InvalidDomainList(format!(
                "unknown policy action '{}'",
                other
            ))),
        }
    }
}

/// One `action[:source]` element of a domain-list specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPolicy {
    pub action: PolicyAction,
    /// List file; `None` matches every name.
    pub source: Option<String>,
}

/// Parsed form of a rule's `domain` string: `accept:cn.list|deny:ads.list|deny`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPolicySpec {
    pub policies: Vec<DomainPolicy>,
}

impl DomainPolicySpec {
    pub fn parse(spec: &str) -> Result<Self, DomainError> {
        let mut policies = Vec::new();

        for part in spec.split('|') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (action, source) = match part.split_once(':') {
                Some((action, source)) => {
                    let source = source.trim();
                    if source.is_empty() {
                        return Err(DomainError::InvalidDomainList(format!(
                            "policy '{}' has an empty source",
                            part
                        )));
                    }
                    (action, Some(source.to_string()))
                }
                None => (part, None),
            };

            policies.push(DomainPolicy {
                action: action.parse()?,
                source,
            });
        }

        if policies.is_empty() {
            return Err(DomainError::InvalidDomainList(
                "no policy defined".to_string(),
            ));
        }

        Ok(Self { policies })
    }
}

/// Lowercase and strip the root label so `Example.COM.` and `example.com`
/// compare equal.
pub fn normalize_domain(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}
