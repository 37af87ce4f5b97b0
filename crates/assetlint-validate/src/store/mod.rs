//! Asset store implementations.

mod memory;
mod project;

pub use memory::InMemoryAssetStore;
pub use project::{FileSystemAssetStore, type_name_for_extension};
