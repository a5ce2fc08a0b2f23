//! Domain layer containing the chat rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, state machine trait)
//! - `conversation` - Transcript, context, classification and reply selection
//! - `lead` - Lead form gate and form data

pub mod conversation;
pub mod foundation;
pub mod lead;
