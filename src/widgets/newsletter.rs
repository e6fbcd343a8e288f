//! Newsletter form behavior.
//!
//! The submit path is asynchronous: the app spawns the POST and the outcome
//! comes back as a message. On success the form resets and the confirmation
//! overlay opens. On any failure the form falls back to the platform's own
//! submission, opening the signup URL in the system browser, exactly once per
//! attempt; the overlay never opens on that path.

use crate::widgets::input_field::InputField;

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Naam,
    Email,
}

/// Interactive state for the newsletter section.
#[derive(Debug, Clone, Default)]
pub struct NewsletterWidget {
    pub naam: InputField,
    pub email: InputField,
    /// A submission is on the wire; further submits are ignored.
    pub in_flight: bool,
    /// The confirmation overlay is open.
    pub modal_open: bool,
    /// Status-bar message from the last attempt.
    pub status: Option<String>,
}

impl NewsletterWidget {
    /// Activate. The section carries its own form, so there is nothing that
    /// could be missing.
    pub fn mount() -> Self {
        Self::default()
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut InputField {
        match field {
            FormField::Naam => &mut self.naam,
            FormField::Email => &mut self.email,
        }
    }

    /// A plausible address: non-empty with an `@` somewhere inside.
    pub fn email_valid(&self) -> bool {
        let email = self.email.value().trim();
        email.contains('@') && email.len() >= 3 && !email.starts_with('@') && !email.ends_with('@')
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.email_valid()
    }

    /// Url-encoded form body, field order matching the rendered form.
    pub fn form_body(&self) -> String {
        format!(
            "naam={}&email={}",
            urlencoding::encode(self.naam.value().trim()),
            urlencoding::encode(self.email.value().trim()),
        )
    }

    /// The native-submission URL: the endpoint with the form values as query
    /// parameters.
    pub fn fallback_url(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.form_body())
    }

    /// Mark an attempt as started.
    pub fn begin_submit(&mut self) {
        self.in_flight = true;
        self.status = None;
    }

    /// A 2xx came back: reset the form and open the overlay.
    pub fn finish_success(&mut self) {
        self.in_flight = false;
        self.naam.clear();
        self.email.clear();
        self.modal_open = true;
    }

    /// The attempt failed. Field values are kept so the native fallback can
    /// carry them.
    pub fn finish_failure(&mut self, message: String) {
        self.in_flight = false;
        self.status = Some(message);
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}
