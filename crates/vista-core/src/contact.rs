//! Contact form field state and submission check.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Budget,
    Message,
}

impl ContactField {
    /// Fields in form order
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Budget,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Work email",
            ContactField::Company => "Company",
            ContactField::Budget => "Rough budget (USD)",
            ContactField::Message => "What are you looking to build?",
        }
    }

    /// Next field in form order, wrapping
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous field in form order, wrapping
    pub fn prev(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "you@company.com",
            ContactField::Company => "Company or startup name",
            ContactField::Budget => "e.g. 20k - 60k",
            ContactField::Message => "App, platform, redesign, MVP...",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing info: please add at least your email and idea.")]
    MissingInfo,
}

/// A submitted brief, handed to whatever delivers it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Brief {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub message: String,
}

/// Controlled-input state of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: Brief,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Company => &self.fields.company,
            ContactField::Budget => &self.fields.budget,
            ContactField::Message => &self.fields.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Company => &mut self.fields.company,
            ContactField::Budget => &mut self.fields.budget,
            ContactField::Message => &mut self.fields.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: ContactField, c: char) {
        self.get_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: ContactField) {
        self.get_mut(field).pop();
    }

    /// Validate and take the brief, clearing every field on success
    ///
    /// Email and message are required; the other fields are optional.
    pub fn submit(&mut self) -> Result<Brief, ContactError> {
        if self.fields.email.trim().is_empty() || self.fields.message.trim().is_empty() {
            return Err(ContactError::MissingInfo);
        }
        Ok(std::mem::take(&mut self.fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_email_and_message() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Message, "   ");

        assert_eq!(form.submit(), Err(ContactError::MissingInfo));
        // Rejected submissions keep what was typed
        assert_eq!(form.get(ContactField::Name), "Ada");
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut form = ContactForm::new();
        form.set(ContactField::Email, "ada@example.com");
        for c in "An MVP".chars() {
            form.push_char(ContactField::Message, c);
        }
        form.pop_char(ContactField::Message);

        let brief = form.submit().unwrap();
        assert_eq!(brief.email, "ada@example.com");
        assert_eq!(brief.message, "An MV");
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_field_focus_cycle_wraps() {
        assert_eq!(ContactField::Message.next(), ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Message);
        assert_eq!(ContactField::Email.next(), ContactField::Company);
    }
}
