//! Entity store adapters implementing the domain's driven ports.

pub mod memory;

pub use memory::{
    MemoryPersonalTaskRepository, MemoryProjectRepository, MemoryProjectTaskRepository,
    MemorySettingsStore, MemoryUserRepository,
};
