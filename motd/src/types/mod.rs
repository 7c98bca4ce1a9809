//! Snapshot types gathered for one report

mod ingress;
mod memory;
mod storage;
mod system;

pub use ingress::*;
pub use memory::*;
pub use storage::*;
pub use system::*;
