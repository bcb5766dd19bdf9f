mod helpers;

use ferrous_ipset_domain::{DomainError, IpSetConfig, IpSetRuleConfig};
use ferrous_ipset_infrastructure::dns::FileDomainPolicyFactory;
use ferrous_ipset_infrastructure::ipset::{DryRunIpSetWriter, IpSetService};
use helpers::{list_file, MessageBuilder, RecordingWriter};
use hickory_proto::rr::RecordType;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

fn config(rules: Vec<IpSetRuleConfig>, check_cname: bool) -> IpSetConfig {
    IpSetConfig {
        check_cname,
        mask4: 0,
        mask6: 0,
        rules,
    }
}

#[test]
fn test_end_to_end_injection_from_hickory_messages() {
    let list = list_file(&["example.com"]);
    let writer = Arc::new(RecordingWriter::default());
    let service = IpSetService::new(
        &config(
            vec![IpSetRuleConfig::new(
                &format!("accept:{}", list.path().display()),
                "cn4",
                "cn6",
            )],
            false,
        ),
        Arc::new(FileDomainPolicyFactory::new()),
        writer.clone(),
    )
    .unwrap();

    let response = MessageBuilder::response(1, "www.example.com.", RecordType::A)
        .a("www.example.com.", Ipv4Addr::new(1, 2, 3, 4))
        .aaaa("www.example.com.", Ipv6Addr::LOCALHOST)
        .build();

    let injected = service.apply_messages(&response, &response).unwrap();

    assert_eq!(injected, 2);
    let entries = writer.entries();
    assert_eq!(entries[0].address, IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));
    assert_eq!(entries[0].prefix_length, 24);
    assert_eq!(entries[0].set_name.as_ref(), "cn4");
    assert_eq!(entries[1].address, IpAddr::V6(Ipv6Addr::LOCALHOST));
    assert_eq!(entries[1].prefix_length, 32);
    assert_eq!(entries[1].set_name.as_ref(), "cn6");
}

#[test]
fn test_cname_chase_through_service() {
    let list = list_file(&["cdn.net"]);
    let writer = Arc::new(RecordingWriter::default());
    let service = IpSetService::new(
        &config(
            vec![IpSetRuleConfig::new(
                &format!("accept:{}", list.path().display()),
                "cdn4",
                "",
            )],
            true,
        ),
        Arc::new(FileDomainPolicyFactory::new()),
        writer.clone(),
    )
    .unwrap();

    let response = MessageBuilder::response(2, "shop.com.", RecordType::A)
        .cname("shop.com.", "edge.cdn.net.")
        .a("edge.cdn.net.", Ipv4Addr::new(5, 6, 7, 8))
        .build();

    assert_eq!(service.apply_messages(&response, &response).unwrap(), 1);
    assert_eq!(writer.entries()[0].set_name.as_ref(), "cdn4");
}

#[test]
fn test_reload_swaps_rules() {
    let first = list_file(&["example.com"]);
    let second = list_file(&["example.org"]);
    let writer = Arc::new(DryRunIpSetWriter::new());
    let service = IpSetService::new(
        &config(
            vec![IpSetRuleConfig::new(
                &format!("accept:{}", first.path().display()),
                "s4",
                "",
            )],
            false,
        ),
        Arc::new(FileDomainPolicyFactory::new()),
        writer.clone(),
    )
    .unwrap();
    let response = MessageBuilder::response(3, "example.org.", RecordType::A)
        .a("example.org.", Ipv4Addr::new(9, 9, 9, 9))
        .build();

    assert_eq!(service.apply_messages(&response, &response).unwrap(), 0);

    let rules = service
        .reload(&config(
            vec![
                IpSetRuleConfig::new(&format!("accept:{}", second.path().display()), "s4", ""),
                IpSetRuleConfig::new("accept:ignored.list", "", ""),
            ],
            false,
        ))
        .unwrap();

    assert_eq!(rules, 1);
    assert_eq!(service.apply_messages(&response, &response).unwrap(), 1);
    assert_eq!(writer.entries(), 1);
}

#[test]
fn test_failed_reload_keeps_previous_rules() {
    let list = list_file(&["example.com"]);
    let service = IpSetService::new(
        &config(
            vec![IpSetRuleConfig::new(
                &format!("accept:{}", list.path().display()),
                "s4",
                "",
            )],
            false,
        ),
        Arc::new(FileDomainPolicyFactory::new()),
        Arc::new(DryRunIpSetWriter::new()),
    )
    .unwrap();
    let before = service.snapshot();

    let err = service
        .reload(&config(
            vec![IpSetRuleConfig::new("accept:/nonexistent/list", "s4", "")],
            false,
        ))
        .unwrap_err();

    assert!(matches!(err, DomainError::IpSetRuleCompile { .. }));
    assert_eq!(service.rule_count(), 1);
    assert!(Arc::ptr_eq(&before, &service.snapshot()));
}
