//! Report sections
//!
//! Each section is a pure function from a snapshot to a text block that
//! starts with a newline and ends with one.

mod banner;
mod ingress;
mod memory;
mod storage;
mod system;

pub use banner::banner;
pub use ingress::ingress_section;
pub use memory::memory_section;
pub use storage::storage_section;
pub use system::system_section;

/// Indentation of every line under a section title
const INDENT: &str = "  ";
