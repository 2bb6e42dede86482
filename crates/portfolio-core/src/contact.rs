//! Contact Form Echo
//!
//! Field values are stored verbatim on every keystroke. Submitting hands a
//! snapshot to a [`SubmissionSink`] and clears the form. Required-field checks
//! are left to the browser.

use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Value of the input's `name` / `id` attribute
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Professional Email",
            FormField::Subject => "Subject",
            FormField::Message => "Your Message",
        }
    }

    /// `None` for the multi-line message box
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::Email => Some("email"),
            FormField::Message => None,
            _ => Some("text"),
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// What the anticipated form endpoint would receive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Live contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: ContactSubmission,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.values.name,
            FormField::Email => &self.values.email,
            FormField::Subject => &self.values.subject,
            FormField::Message => &self.values.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.values.name,
            FormField::Email => &mut self.values.email,
            FormField::Subject => &mut self.values.subject,
            FormField::Message => &mut self.values.message,
        };
        *slot = value.into();
    }

    /// Takes the current values and leaves every field empty.
    pub fn submit(&mut self) -> ContactSubmission {
        std::mem::take(&mut self.values)
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Receiver of submitted contact forms
pub trait SubmissionSink {
    fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Logs submissions and does nothing else. No backend exists yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEcho;

impl SubmissionSink for ConsoleEcho {
    fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(%payload, "Form Submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        received: RefCell<Vec<ContactSubmission>>,
    }

    impl SubmissionSink for Recorder {
        fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
            self.received.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    #[test]
    fn test_typing_then_submit_resets() {
        let mut form = FormFields::new();
        form.set(FormField::Name, "A");
        assert_eq!(form.get(FormField::Name), "A");

        let submission = form.submit();
        assert_eq!(submission.name, "A");
        assert!(form.is_empty());
        for field in FormField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_values_are_stored_verbatim() {
        let mut form = FormFields::new();
        form.set(FormField::Message, "  <script>alert(1)</script>\n");
        assert_eq!(form.get(FormField::Message), "  <script>alert(1)</script>\n");

        form.set(FormField::Message, "");
        assert!(form.is_empty());
    }

    #[test]
    fn test_submission_reaches_sink() {
        let mut form = FormFields::new();
        form.set(FormField::Name, "Ada");
        form.set(FormField::Email, "ada@example.com");
        form.set(FormField::Subject, "Red team engagement");
        form.set(FormField::Message, "Scope attached.");

        let sink = Recorder::default();
        sink.deliver(&form.submit()).unwrap();

        let received = sink.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].email, "ada@example.com");
        assert_eq!(received[0].message, "Scope attached.");
    }

    #[test]
    fn test_console_echo_accepts_any_submission() {
        ConsoleEcho.deliver(&ContactSubmission::default()).unwrap();
    }

    #[test]
    fn test_field_names_match_inputs() {
        assert_eq!(FormField::from_name("subject"), Some(FormField::Subject));
        assert_eq!(FormField::from_name("phone"), None);
        assert_eq!(FormField::Message.input_type(), None);
        assert_eq!(FormField::Email.input_type(), Some("email"));
    }
}
