pub mod journal;
pub mod mock;
pub mod traits;

pub use journal::{JournalReader, JournalStore};
pub use mock::MemoryStore;
pub use traits::{DecisionStore, StoreError};
