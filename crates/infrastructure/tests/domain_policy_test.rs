mod helpers;

use ferrous_ipset_application::ports::{DomainMatcher, DomainMatcherFactory};
use ferrous_ipset_domain::{DomainError, PolicyAction};
use ferrous_ipset_infrastructure::dns::domain_policy::{
    parse_list_line, FileDomainPolicyFactory, ListEntry, MatchKind,
};
use helpers::list_file;

// ── list parsing ───────────────────────────────────────────────────────────

#[test]
fn test_parse_plain_domain_is_suffix() {
    assert_eq!(
        parse_list_line("Example.COM."),
        Some(ListEntry {
            domain: "example.com".to_string(),
            kind: MatchKind::Suffix
        })
    );
}

#[test]
fn test_parse_prefixed_entries() {
    assert_eq!(parse_list_line("full:api.example.com").unwrap().kind, MatchKind::Full);
    assert_eq!(parse_list_line("domain:example.com").unwrap().kind, MatchKind::Suffix);
    assert_eq!(parse_list_line("*.example.com").unwrap().kind, MatchKind::Wildcard);
    assert_eq!(parse_list_line("||ads.example.com^").unwrap().kind, MatchKind::Suffix);
    assert_eq!(
        parse_list_line("||*.example.com^").unwrap().domain,
        "example.com".to_string()
    );
}

#[test]
fn test_parse_hosts_lines() {
    assert_eq!(
        parse_list_line("0.0.0.0 tracker.example.net").unwrap().domain,
        "tracker.example.net"
    );
    assert!(parse_list_line("127.0.0.1 localhost").is_none());
    assert!(parse_list_line("10.0.0.1 router.lan").is_none());
}

#[test]
fn test_parse_skips_comments_and_blanks() {
    assert!(parse_list_line("").is_none());
    assert!(parse_list_line("   ").is_none());
    assert!(parse_list_line("# comment").is_none());
    assert!(parse_list_line("! adblock comment").is_none());
    assert!(parse_list_line("@@||allowed.com^").is_none());
}

// ── factory ────────────────────────────────────────────────────────────────

#[test]
fn test_accept_list_matches_suffixes() {
    let list = list_file(&["# china", "cn", "example.com", "full:exact.org"]);
    let factory = FileDomainPolicyFactory::new();

    let matcher = factory
        .build(&format!("accept:{}", list.path().display()))
        .unwrap();

    assert_eq!(matcher.match_domain("www.example.com."), Some(PolicyAction::Accept));
    assert_eq!(matcher.match_domain("baidu.cn."), Some(PolicyAction::Accept));
    assert_eq!(matcher.match_domain("exact.org."), Some(PolicyAction::Accept));
    assert_eq!(matcher.match_domain("sub.exact.org."), None);
    assert_eq!(matcher.match_domain("google.com."), None);
    assert!(matcher.accepts("EXAMPLE.com"));
}

#[test]
fn test_first_matching_policy_wins() {
    let deny = list_file(&["ads.example.com"]);
    let accept = list_file(&["example.com"]);
    let factory = FileDomainPolicyFactory::new();

    let matcher = factory
        .build(&format!(
            "deny:{}|accept:{}",
            deny.path().display(),
            accept.path().display()
        ))
        .unwrap();

    assert_eq!(matcher.match_domain("ads.example.com."), Some(PolicyAction::Deny));
    assert!(!matcher.accepts("x.ads.example.com."));
    assert!(matcher.accepts("www.example.com."));
}

#[test]
fn test_bare_action_matches_everything() {
    let deny = list_file(&["blocked.net"]);
    let factory = FileDomainPolicyFactory::new();

    let matcher = factory
        .build(&format!("deny:{}|accept", deny.path().display()))
        .unwrap();

    assert!(matcher.accepts("anything.org."));
    assert!(!matcher.accepts("blocked.net."));
}

#[test]
fn test_relative_paths_use_base_dir() {
    let list = list_file(&["example.com"]);
    let dir = list.path().parent().unwrap();
    let file_name = list.path().file_name().unwrap().to_str().unwrap();
    let factory = FileDomainPolicyFactory::with_base_dir(dir);

    let matcher = factory.build(&format!("accept:{}", file_name)).unwrap();

    assert!(matcher.accepts("example.com"));
}

#[test]
fn test_missing_file_is_an_error() {
    let factory = FileDomainPolicyFactory::new();

    let result = factory.build("accept:/nonexistent/ferrous-ipset/list.txt");

    assert!(matches!(result, Err(DomainError::IoError(_))));
}

#[test]
fn test_malformed_spec_is_an_error() {
    let factory = FileDomainPolicyFactory::new();

    assert!(matches!(
        factory.build(""),
        Err(DomainError::InvalidDomainList(_))
    ));
    assert!(matches!(
        factory.build("allow:list.txt"),
        Err(DomainError::InvalidDomainList(_))
    ));
}
