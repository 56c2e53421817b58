//! Contact form state.
//!
//! The form is a plain four-field record. Field updates overwrite exactly one
//! field; submitting hands a snapshot to a [`SubmissionSink`] and clears every
//! field. No validation or network dispatch happens here.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::services::submission::SubmissionSink;

/// Field in the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Sender name
    #[default]
    Name,
    /// Sender email
    Email,
    /// Company (optional)
    Company,
    /// Message body
    Message,
}

impl ContactField {
    /// All fields in tab order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Company, Self::Message];

    /// Get the next field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Company,
            Self::Company => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Get the previous field.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Company => Self::Email,
            Self::Message => Self::Company,
        }
    }

    /// Field label, with a marker on the fields the page flags as required.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Email => "Email *",
            Self::Company => "Company",
            Self::Message => "Message *",
        }
    }

    /// Placeholder shown while the field is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your@email.com",
            Self::Company => "Your company name",
            Self::Message => "Tell us about your project...",
        }
    }

    /// Machine name, matching the form's input names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "company" => Ok(Self::Company),
            "message" => Ok(Self::Message),
            other => anyhow::bail!(
                "Unknown contact field '{other}'. Expected name, email, company or message"
            ),
        }
    }
}

/// The four contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Company, empty when not given
    pub company: String,
    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    /// Overwrite exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Overwrite a field addressed by its input name.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse::<ContactField>()?;
        self.set(field, value);
        Ok(())
    }

    /// Mutable access to a field's buffer, for character-level editing.
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        }
    }

    /// True when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Hand the current values to `sink` and reset every field to empty.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> Submission {
        let submission = Submission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form: std::mem::take(self),
        };
        sink.deliver(&submission);
        submission
    }
}

/// Snapshot of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Submission id, used to correlate log lines
    pub id: Uuid,
    /// Submission time
    pub submitted_at: DateTime<Utc>,
    /// Field values at submit time
    pub form: ContactForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut field = ContactField::Name;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, ContactField::Name);
        assert_eq!(ContactField::Name.previous(), ContactField::Message);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("email".parse::<ContactField>().unwrap(), ContactField::Email);
        assert!("phone".parse::<ContactField>().is_err());
    }

    #[test]
    fn test_set_named_unknown_leaves_form_untouched() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ana");
        assert!(form.set_named("subject", "Hi").is_err());
        assert_eq!(form.name, "Ana");
        assert!(form.message.is_empty());
    }
}
