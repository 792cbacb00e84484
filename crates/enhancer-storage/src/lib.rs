pub mod memory;

pub use enhancer_core::repository::{ReadRepository, Repository};
pub use enhancer_core::StorageError;
pub use memory::InMemoryRepository;
