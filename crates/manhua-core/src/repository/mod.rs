//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod sanitize;
mod manhua_repo;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStore, CollectionRepository};
pub use memory::MemoryStore;
pub use sanitize::{parse_list, sanitize};
pub use manhua_repo::ManhuaRepository;
