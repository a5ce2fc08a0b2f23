//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Local storage backends (file, in-memory)

pub mod storage;

pub use storage::{FileLocalStorage, InMemoryLocalStorage};
