//! SoftSell Chat - conversation engine for the license resale assistant.
//!
//! The crate keeps the chat transcript, infers what the visitor wants from
//! keyword matches, picks canned replies, gates the lead capture form, and
//! persists the transcript to a local key/value store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
