use super::suffix_trie::MatchKind;
use ferrous_ipset_domain::normalize_domain;

#[derive(Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub domain: String,
    pub kind: MatchKind,
}

impl ListEntry {
    fn new(domain: &str, kind: MatchKind) -> Option<Self> {
        let domain = normalize_domain(domain);
        if domain.is_empty() {
            return None;
        }
        Some(Self { domain, kind })
    }
}

pub fn parse_list_line(line: &str) -> Option<ListEntry> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    // adblock exceptions never add names
    if line.starts_with("@@") {
        return None;
    }

    if let Some(inner) = line.strip_prefix("||") {
        let domain = match inner.find('^') {
            Some(pos) => &inner[..pos],
            None => inner,
        };
        return match domain.strip_prefix("*.") {
            Some(rest) => ListEntry::new(rest, MatchKind::Wildcard),
            None => ListEntry::new(domain, MatchKind::Suffix),
        };
    }

    if let Some(rest) = line.strip_prefix("full:") {
        return ListEntry::new(rest, MatchKind::Full);
    }

    if let Some(rest) = line.strip_prefix("domain:") {
        return ListEntry::new(rest, MatchKind::Suffix);
    }

    if let Some(rest) = line.strip_prefix("*.") {
        return ListEntry::new(rest, MatchKind::Wildcard);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() >= 2 {
        let is_hosts_addr = matches!(parts[0], "0.0.0.0" | "127.0.0.1" | "::" | "::1");
        if !is_hosts_addr {
            return None;
        }
        let domain = parts[1];
        if matches!(
            domain,
            "localhost" | "0.0.0.0" | "broadcasthost" | "ip6-localhost" | "ip6-loopback"
        ) {
            return None;
        }
        return ListEntry::new(domain, MatchKind::Suffix);
    }

    ListEntry::new(parts[0], MatchKind::Suffix)
}

pub fn parse_list_text(text: &str) -> Vec<ListEntry> {
    text.lines().filter_map(parse_list_line).collect()
}
