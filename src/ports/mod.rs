//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `LocalStorage` - String key/value store holding the chat transcript

mod local_storage;

pub use local_storage::{validate_key, LocalStorage, LocalStorageError};
