//! Lead capture domain.
//!
//! The gate decides whether chat input is accepted; the form holds what the
//! visitor typed until it is submitted or discarded.

mod form;
mod gate;

pub use form::{
    LeadField, LeadFormData, LeadLicenseType, LeadSubmission, INCOMPLETE_FORM_REPLY,
};
pub use gate::{LeadGate, LEAD_FORM_PROMPT};
