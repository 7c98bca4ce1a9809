//! Report assembly

use tracing::debug;

use crate::config::MotdConfig;
use crate::error::MotdResult;
use crate::info::{get_system_snapshot, HostProbe};
use crate::kube::fetch_ingress_hosts;
use crate::sections::{banner, ingress_section, memory_section, storage_section, system_section};

/// Build the full report: banner, system, memory, storage, ingresses
///
/// Sections are gathered one after another. Only an unreadable OS release
/// file makes this fail; a failing ingress query just lists nothing.
pub async fn generate_motd(probe: &impl HostProbe, config: &MotdConfig) -> MotdResult<String> {
    let system = get_system_snapshot(probe, config)?;
    let memory = probe.memory();
    let storage = probe.storage(&config.storage_mount);
    debug!(?memory, ?storage, "collected host usage");

    let ingress = fetch_ingress_hosts(&config.ingress).await;
    debug!(count = ingress.len(), "collected ingress hosts");

    let sections = [
        banner().to_string(),
        system_section(&system),
        memory_section(&memory, config.headline_width),
        storage_section(&storage, config.storage_width),
        ingress_section(&ingress),
    ];

    Ok(format!("\n{}\n", sections.join("\n")))
}
