mod ipset_rule_compiler;

pub use ipset_rule_compiler::IpSetRuleCompiler;
