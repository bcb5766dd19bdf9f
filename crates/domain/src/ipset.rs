use crate::config::IpSetConfig;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

pub const DEFAULT_IPV4_MASK: u8 = 24;
pub const DEFAULT_IPV6_MASK: u8 = 32;

/// Effective injection settings, computed once when rules are compiled.
///
/// Configured masks of `0` are "unset" sentinels, never real /0 prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpSetSettings {
    pub check_cname: bool,
    pub mask4: u8,
    pub mask6: u8,
}

impl IpSetSettings {
    pub fn new(check_cname: bool, mask4: u8, mask6: u8) -> Self {
        Self {
            check_cname,
            mask4: if mask4 == 0 { DEFAULT_IPV4_MASK } else { mask4 },
            mask6: if mask6 == 0 { DEFAULT_IPV6_MASK } else { mask6 },
        }
    }

    pub fn from_config(config: &IpSetConfig) -> Self {
        Self::new(config.check_cname, config.mask4, config.mask6)
    }
}

impl Default for IpSetSettings {
    fn default() -> Self {
        Self::new(false, 0, 0)
    }
}

/// A single CIDR to push into a named kernel set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetEntry {
    pub address: IpAddr,
    pub set_name: Arc<str>,
    pub prefix_length: u8,
    pub is_ipv6: bool,
}

impl SetEntry {
    pub fn new(address: IpAddr, set_name: Arc<str>, prefix_length: u8) -> Self {
        Self {
            address,
            set_name,
            prefix_length,
            is_ipv6: address.is_ipv6(),
        }
    }
}

impl fmt::Display for SetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} -> {}", self.address, self.prefix_length, self.set_name)
    }
}
