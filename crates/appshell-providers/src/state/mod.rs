//! Global store implementations

mod file;
mod memory;

pub use file::FileGlobalStore;
pub use memory::MemoryGlobalStore;
