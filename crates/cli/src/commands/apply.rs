use super::build_service;
use crate::bootstrap::LoadedConfig;
use anyhow::Context;
use ferrous_ipset_application::ports::IpSetWriter;
use ferrous_ipset_domain::DnsMessage;
use ferrous_ipset_infrastructure::dns::DnsMessageParser;
use ferrous_ipset_infrastructure::ipset::{DryRunIpSetWriter, NetlinkIpSetWriter};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub fn run(
    loaded: &LoadedConfig,
    response_path: &Path,
    query_path: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let writer: Arc<dyn IpSetWriter> = if dry_run {
        Arc::new(DryRunIpSetWriter::new())
    } else {
        Arc::new(NetlinkIpSetWriter::new())
    };
    let service = build_service(loaded, writer)?;

    let response = read_message(response_path)?;
    let query = match query_path {
        Some(path) => read_message(path)?,
        None => response.clone(),
    };

    let injected = service.apply(&query, &response)?;

    info!(
        id = response.id,
        answers = response.answers.len(),
        injected,
        dry_run,
        "DNS answer classified"
    );
    println!("{} entries injected", injected);
    Ok(())
}

fn read_message(path: &Path) -> anyhow::Result<DnsMessage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read DNS message {}", path.display()))?;
    Ok(DnsMessageParser::parse(&bytes)?)
}
