use super::build_service;
use crate::bootstrap::LoadedConfig;
use ferrous_ipset_domain::IpSetSettings;
use ferrous_ipset_infrastructure::ipset::DryRunIpSetWriter;
use std::sync::Arc;
use tracing::info;

pub fn run(loaded: &LoadedConfig) -> anyhow::Result<()> {
    let service = build_service(loaded, Arc::new(DryRunIpSetWriter::new()))?;
    let settings = IpSetSettings::from_config(&loaded.config.ipset);

    let configured = loaded.config.ipset.rules.len();
    let active = service.rule_count();

    info!(
        configured,
        active,
        skipped = configured - active,
        mask4 = settings.mask4,
        mask6 = settings.mask6,
        check_cname = settings.check_cname,
        "Configuration OK"
    );
    println!("{} of {} ipset rules active", active, configured);
    Ok(())
}
