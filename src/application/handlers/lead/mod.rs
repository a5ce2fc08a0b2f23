//! Lead form command handlers.

mod lead_form;

pub use lead_form::{
    CancelLeadFormCommand, LeadFormError, LeadFormHandler, OpenLeadFormCommand,
    SubmitLeadFormCommand, SubmitLeadFormResult, UpdateLeadFieldCommand,
};
