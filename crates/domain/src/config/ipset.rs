use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Kernel address-set injection settings.
///
/// A mask of `0` means "unset" and is replaced by the family default when the
/// rules are compiled (see [`crate::IpSetSettings`]).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IpSetConfig {
    /// Also match a rule through CNAME targets found in the answer section.
    #[serde(default)]
    pub check_cname: bool,

    #[serde(default)]
    pub mask4: u8,

    #[serde(default)]
    pub mask6: u8,

    #[serde(default, alias = "rule")]
    pub rules: Vec<IpSetRuleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IpSetRuleConfig {
    /// Domain-list specification, e.g. `accept:/etc/ferrous-ipset/cn.list|deny`.
    pub domain: String,

    #[serde(default)]
    pub set_name4: String,

    #[serde(default)]
    pub set_name6: String,
}

impl IpSetRuleConfig {
    pub fn new(domain: &str, set_name4: &str, set_name6: &str) -> Self {
        Self {
            domain: domain.to_string(),
            set_name4: set_name4.to_string(),
            set_name6: set_name6.to_string(),
        }
    }

    /// A rule with no target set can never have an observable effect.
    pub fn has_target(&self) -> bool {
        !self.set_name4.is_empty() || !self.set_name6.is_empty()
    }
}

impl IpSetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mask4 > 32 {
            return Err(ConfigError::MaskOutOfRange {
                family: "ipv4",
                value: self.mask4,
                max: 32,
            });
        }

        if self.mask6 > 128 {
            return Err(ConfigError::MaskOutOfRange {
                family: "ipv6",
                value: self.mask6,
                max: 128,
            });
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.has_target() && rule.domain.trim().is_empty() {
                return Err(ConfigError::EmptyRuleDomain { index });
            }
        }

        Ok(())
    }
}
