use crate::dns::DnsMessageParser;
use arc_swap::ArcSwap;
use ferrous_ipset_application::ports::{DomainMatcherFactory, IpSetWriter};
use ferrous_ipset_application::services::IpSetRuleCompiler;
use ferrous_ipset_application::use_cases::ApplyIpSetUseCase;
use ferrous_ipset_domain::{DnsMessage, DomainError, IpSetConfig};
use hickory_proto::op::Message;
use std::sync::Arc;
use tracing::info;

/// Hot-swappable front of the classifier.
///
/// A reload compiles a complete new rule set and swaps it in atomically;
/// calls already in flight keep the rule set they started with.
pub struct IpSetService {
    current: ArcSwap<ApplyIpSetUseCase>,
    compiler: IpSetRuleCompiler,
    writer: Arc<dyn IpSetWriter>,
}

impl IpSetService {
    pub fn new(
        config: &IpSetConfig,
        factory: Arc<dyn DomainMatcherFactory>,
        writer: Arc<dyn IpSetWriter>,
    ) -> Result<Self, DomainError> {
        let compiler = IpSetRuleCompiler::new(factory);
        let use_case = compiler.compile(config, Arc::clone(&writer))?;
        info!(rules = use_case.rules().len(), "ipset rules loaded");

        Ok(Self {
            current: ArcSwap::from_pointee(use_case),
            compiler,
            writer,
        })
    }

    /// On error the previous rule set stays active.
    pub fn reload(&self, config: &IpSetConfig) -> Result<usize, DomainError> {
        let use_case = self.compiler.compile(config, Arc::clone(&self.writer))?;
        let rules = use_case.rules().len();
        self.current.store(Arc::new(use_case));
        info!(rules, "ipset rules reloaded");
        Ok(rules)
    }

    pub fn rule_count(&self) -> usize {
        self.current.load().rules().len()
    }

    pub fn snapshot(&self) -> Arc<ApplyIpSetUseCase> {
        self.current.load_full()
    }

    pub fn apply(&self, query: &DnsMessage, response: &DnsMessage) -> Result<usize, DomainError> {
        self.current.load().execute(query, response)
    }

    pub fn apply_messages(&self, query: &Message, response: &Message) -> Result<usize, DomainError> {
        let query = DnsMessageParser::from_message(query);
        let response = DnsMessageParser::from_message(response);
        self.apply(&query, &response)
    }
}
