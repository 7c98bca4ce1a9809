//! Ingress section

use super::INDENT;
use crate::types::IngressSet;

/// Ingress hostnames, one per line
pub fn ingress_section(ingress: &IngressSet) -> String {
    let separator = format!("\n{INDENT}");
    let hosts = ingress.iter().collect::<Vec<_>>().join(&separator);

    format!("\nActive Ingresses:\n{INDENT}{hosts}\n")
}
