//! Message-of-the-day generator
//!
//! Gathers host state (uptime, distro, kernel, load, memory, swap, root disk)
//! and the hostnames of a cluster's ingresses, then renders them as a short
//! ANSI-colored report meant to be printed once at login.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use motd::{generate_motd, LiveHost, MotdConfig};
//!
//! let report = generate_motd(&LiveHost::new(), &MotdConfig::default()).await?;
//! print!("{report}");
//! ```
//!
//! # Usage as Binary
//!
//! Drop the `motd` binary into `/etc/update-motd.d/` (or call it from a shell
//! profile). It takes no arguments.

pub mod config;
pub mod error;
pub mod format;
pub mod info;
pub mod init;
pub mod kube;
pub mod report;
pub mod sections;
pub mod types;

pub use config::MotdConfig;
pub use error::{MotdError, MotdResult};
pub use info::{HostProbe, LiveHost};
pub use report::generate_motd;
