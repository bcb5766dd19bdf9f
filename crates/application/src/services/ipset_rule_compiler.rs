use crate::ports::{DomainMatcherFactory, IpSetWriter};
use crate::use_cases::{ApplyIpSetUseCase, CompiledRule};
use ferrous_ipset_domain::{DomainError, IpSetConfig, IpSetRuleConfig, IpSetSettings};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Turns `[ipset]` configuration into an immutable classifier.
pub struct IpSetRuleCompiler {
    factory: Arc<dyn DomainMatcherFactory>,
}

impl IpSetRuleCompiler {
    pub fn new(factory: Arc<dyn DomainMatcherFactory>) -> Self {
        Self { factory }
    }

    #[instrument(skip_all, fields(rules = config.rules.len()))]
    pub fn compile(
        &self,
        config: &IpSetConfig,
        writer: Arc<dyn IpSetWriter>,
    ) -> Result<ApplyIpSetUseCase, DomainError> {
        let settings = IpSetSettings::from_config(config);
        let rules = self.compile_rules(&config.rules)?;

        debug!(
            compiled = rules.len(),
            mask4 = settings.mask4,
            mask6 = settings.mask6,
            check_cname = settings.check_cname,
            "ipset rules compiled"
        );

        Ok(ApplyIpSetUseCase::new(settings, rules, writer))
    }

    /// Fails as a whole on the first domain list that cannot be built.
    pub fn compile_rules(&self, specs: &[IpSetRuleConfig]) -> Result<Vec<CompiledRule>, DomainError> {
        let mut rules = Vec::with_capacity(specs.len());

        for spec in specs.iter().filter(|spec| spec.has_target()) {
            let matcher =
                self.factory
                    .build(&spec.domain)
                    .map_err(|e| DomainError::IpSetRuleCompile {
                        list: spec.domain.clone(),
                        source: Box::new(e),
                    })?;

            if let Some(rule) = CompiledRule::new(&spec.set_name4, &spec.set_name6, matcher) {
                rules.push(rule);
            }
        }

        Ok(rules)
    }
}
