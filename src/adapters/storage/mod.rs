//! Storage Adapters
//!
//! Implementations of the LocalStorage port for persisting the chat transcript.
//!
//! ## Available Adapters
//!
//! - **FileLocalStorage** - One JSON file per key in a data directory
//! - **InMemoryLocalStorage** - Shared in-process map (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileLocalStorage, InMemoryLocalStorage};
//!
//! // Production: file-based storage
//! let storage = FileLocalStorage::new("./data");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryLocalStorage::new();
//! ```

mod file_local_storage;
mod in_memory_local_storage;

pub use file_local_storage::FileLocalStorage;
pub use in_memory_local_storage::InMemoryLocalStorage;
