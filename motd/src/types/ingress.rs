//! Ingress hostname set

use std::collections::BTreeSet;

/// Unique ingress hostnames, kept sorted so the listing is stable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngressSet {
    hosts: BTreeSet<String>,
}

impl IngressSet {
    /// Parse whitespace-separated hostnames, dropping duplicates
    pub fn from_output(output: &str) -> Self {
        Self {
            hosts: output.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// True when no hostname was listed
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Number of unique hostnames
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Hostnames in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }
}
