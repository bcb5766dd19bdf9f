mod factory;
mod list_parser;
mod policies;
mod suffix_trie;

pub use factory::FileDomainPolicyFactory;
pub use list_parser::{parse_list_line, parse_list_text, ListEntry};
pub use policies::{CompiledPolicy, DomainPolicies, PolicyScope};
pub use suffix_trie::{MatchKind, SuffixTrie};
