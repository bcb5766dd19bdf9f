use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;

/// How a trie entry covers names at and below its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The name itself only.
    Full,
    /// The name and every subdomain.
    Suffix,
    /// Subdomains only.
    Wildcard,
}

const FULL: u8 = 0b001;
const SUFFIX: u8 = 0b010;
const WILDCARD: u8 = 0b100;

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    flags: u8,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::with_hasher(FxBuildHasher),
            flags: 0,
        }
    }
}

/// Label-reversed trie: `www.example.com` is stored as `com -> example -> www`.
#[derive(Default)]
pub struct SuffixTrie {
    root: TrieNode,
    len: usize,
}

impl SuffixTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// `domain` must already be normalized (lowercase, no trailing dot).
    pub fn insert(&mut self, domain: &str, kind: MatchKind) {
        let mut node = &mut self.root;
        for label in domain.split('.').rev() {
            node = node.children.entry(CompactString::new(label)).or_default();
        }
        let flag = match kind {
            MatchKind::Full => FULL,
            MatchKind::Suffix => SUFFIX,
            MatchKind::Wildcard => WILDCARD,
        };
        if node.flags & flag == 0 {
            self.len += 1;
        }
        node.flags |= flag;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, domain: &str) -> bool {
        let labels: SmallVec<[&str; 8]> = domain.split('.').rev().collect();
        let n = labels.len();
        let mut node = &self.root;

        for (i, label) in labels.iter().enumerate() {
            match node.children.get(*label) {
                Some(child) => {
                    let last = i + 1 == n;
                    if child.flags & SUFFIX != 0
                        || (last && child.flags & FULL != 0)
                        || (!last && child.flags & WILDCARD != 0)
                    {
                        return true;
                    }
                    node = child;
                }
                None => break,
            }
        }

        false
    }
}
