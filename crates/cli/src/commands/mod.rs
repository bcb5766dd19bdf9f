pub mod apply;
pub mod check;

use crate::bootstrap::LoadedConfig;
use ferrous_ipset_application::ports::IpSetWriter;
use ferrous_ipset_infrastructure::dns::FileDomainPolicyFactory;
use ferrous_ipset_infrastructure::ipset::IpSetService;
use std::sync::Arc;

fn build_service(
    loaded: &LoadedConfig,
    writer: Arc<dyn IpSetWriter>,
) -> anyhow::Result<IpSetService> {
    let factory = match &loaded.base_dir {
        Some(dir) => FileDomainPolicyFactory::with_base_dir(dir),
        None => FileDomainPolicyFactory::new(),
    };

    Ok(IpSetService::new(
        &loaded.config.ipset,
        Arc::new(factory),
        writer,
    )?)
}
