//! Lead capture form data and validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Bot message appended when a submission is incomplete.
pub const INCOMPLETE_FORM_REPLY: &str = "Please fill out all required fields.";

/// Product family the visitor can pick on the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadLicenseType {
    Microsoft,
    Adobe,
    Development,
    Enterprise,
    Cloud,
    Other,
}

impl LeadLicenseType {
    pub const ALL: [LeadLicenseType; 6] = [
        Self::Microsoft,
        Self::Adobe,
        Self::Development,
        Self::Enterprise,
        Self::Cloud,
        Self::Other,
    ];

    /// Value stored in the form and echoed in the confirmation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Microsoft => "Microsoft",
            Self::Adobe => "Adobe",
            Self::Development => "Development",
            Self::Enterprise => "Enterprise",
            Self::Cloud => "Cloud",
            Self::Other => "Other",
        }
    }

    /// Human readable option label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Microsoft => "Microsoft Products",
            Self::Adobe => "Adobe Products",
            Self::Development => "Development Tools",
            Self::Enterprise => "Enterprise Software",
            Self::Cloud => "Cloud Services",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for LeadLicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadLicenseType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::unknown_option("license_type", trimmed))
    }
}

/// A field of the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadField {
    Name,
    Email,
    Company,
    LicenseType,
}

impl LeadField {
    pub const REQUIRED: [LeadField; 3] = [Self::Name, Self::Email, Self::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::LicenseType => "license_type",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "company" => Ok(Self::Company),
            "license_type" | "licensetype" | "license" => Ok(Self::LicenseType),
            other => Err(ValidationError::unknown_option("field", other)),
        }
    }
}

/// Values entered so far on the lead form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LeadLicenseType>,
}

impl LeadFormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one field from raw input.
    ///
    /// An empty license value clears the selection.
    pub fn set(&mut self, field: LeadField, value: &str) -> Result<(), ValidationError> {
        match field {
            LeadField::Name => self.name = value.to_string(),
            LeadField::Email => self.email = value.to_string(),
            LeadField::Company => self.company = value.to_string(),
            LeadField::LicenseType => {
                self.license_type = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
        }
        Ok(())
    }

    /// Required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<LeadField> {
        LeadField::REQUIRED
            .into_iter()
            .filter(|field| self.value_of(*field).is_empty())
            .collect()
    }

    /// Turns complete form data into a submission.
    pub fn validate(&self) -> Result<LeadSubmission, ValidationError> {
        if let Some(field) = self.missing_fields().first() {
            return Err(ValidationError::empty_field(field.as_str()));
        }

        Ok(LeadSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            license_type: self.license_type,
        })
    }

    fn value_of(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Company => &self.company,
            LeadField::LicenseType => self.license_type.map_or("", |t| t.as_str()),
        }
    }
}

/// A validated lead ready to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LeadLicenseType>,
}

impl LeadSubmission {
    /// Message recorded on the visitor's behalf.
    pub fn contact_request(&self) -> String {
        format!("Contact Request: {} from {}", self.name, self.company)
    }

    /// Bot confirmation.
    pub fn confirmation(&self) -> String {
        let subject = self
            .license_type
            .map_or("software license", |t| t.as_str());
        format!(
            "Thanks, {}! Our team will contact you at {} within one business day to discuss your {} needs.",
            self.name, self.email, subject
        )
    }
}
