//! Cluster ingress query
//!
//! Runs an external command (kubectl by default) that prints ingress
//! hostnames as plain whitespace-separated text.

pub mod error;
pub mod executor;

use tracing::debug;

use crate::types::IngressSet;

pub use error::{KubeError, KubeResult};
pub use executor::execute_raw;

/// JSONPath template that flattens every ingress rule host into one line
pub const INGRESS_HOSTS_JSONPATH: &str = "jsonpath={.items[*].spec.rules[*].host}";

/// Program and arguments that list ingress hostnames on stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl IngressCommand {
    /// Command running `program` with `args`, no shell involved
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl Default for IngressCommand {
    fn default() -> Self {
        Self::new(
            "kubectl",
            &["get", "ingress", "-A", "-o", INGRESS_HOSTS_JSONPATH],
        )
    }
}

/// Query ingress hostnames, treating any failure as "no ingresses"
///
/// A missing binary, a non-zero exit and empty output all end up as an
/// empty set.
pub async fn fetch_ingress_hosts(command: &IngressCommand) -> IngressSet {
    match execute_raw(command).await {
        Ok(output) => IngressSet::from_output(&output),
        Err(e) => {
            debug!(error = %e, "ingress query failed, listing none");
            IngressSet::default()
        }
    }
}
