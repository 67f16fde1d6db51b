//! Storage provider implementations

mod local;
mod memory;

pub use local::LocalStorageProvider;
pub use memory::MemoryStorageProvider;
