//! Contact form state, validation and delivery.
//!
//! [`validate`] is a pure function over [`ContactValues`]. [`ContactForm`]
//! layers touched-state and the submit lifecycle on top of it, and hands
//! valid submissions to a [`ContactSink`].

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// Minimum number of characters in the message body.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Text of the acknowledgment shown after a successful submission.
pub const ACK_MESSAGE: &str = "Message sent!";

/// How long the acknowledgment stays visible.
pub const ACK_DURATION: Duration = Duration::from_secs(4);

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Returns true if `s` looks like `local@domain.tld`.
pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// A contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// HTML `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }
}

/// The values a visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// The values as they are delivered: name and email without the
    /// surrounding whitespace that validation ignores.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.clone(),
        }
    }
}

/// Why a field is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => f.write_str("Required"),
            FieldError::InvalidEmail => f.write_str("Invalid email"),
            FieldError::TooShort { min } => write!(f, "Min {min} characters"),
        }
    }
}

/// Per-field validation result. At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: [Option<FieldError>; 3],
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors[field.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.errors.iter().filter(|e| e.is_some()).count()
    }

    /// Invalid fields with their errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|err| (field, err)))
    }

    fn set(&mut self, field: Field, error: FieldError) {
        self.errors[field.index()] = Some(error);
    }
}

/// Checks every field and reports the first failing rule of each.
pub fn validate(values: &ContactValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if values.name.trim().is_empty() {
        errors.set(Field::Name, FieldError::Required);
    }

    let email = values.email.trim();
    if email.is_empty() {
        errors.set(Field::Email, FieldError::Required);
    } else if !is_email(email) {
        errors.set(Field::Email, FieldError::InvalidEmail);
    }

    if values.message.is_empty() {
        errors.set(Field::Message, FieldError::Required);
    } else if values.message.chars().count() < MIN_MESSAGE_LEN {
        errors.set(
            Field::Message,
            FieldError::TooShort {
                min: MIN_MESSAGE_LEN,
            },
        );
    }

    errors
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing typed yet.
    #[default]
    Empty,
    /// The visitor is typing; validity is reported by [`ContactForm::is_valid`].
    Editing,
    /// Handed to the sink, waiting for the result.
    Submitting,
    /// Delivered; fields have been cleared.
    Submitted,
}

/// Receives validated submissions.
///
/// An email or ticketing API would implement this; the site ships with
/// [`LogSink`].
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, submission: &ContactValues) -> Result<(), ContactError>;
}

/// Records submissions in the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl ContactSink for LogSink {
    async fn deliver(&self, submission: &ContactValues) -> Result<(), ContactError> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "Contact message received"
        );
        Ok(())
    }
}

/// Visibility of the "message sent" notice.
///
/// Each [`show`](Self::show) starts a new generation; an expiry only hides
/// the notice if it belongs to the latest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Acknowledgment {
    generation: u64,
    visible: bool,
}

impl Acknowledgment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The text to display, if any.
    pub fn message(&self) -> Option<&'static str> {
        self.visible.then_some(ACK_MESSAGE)
    }

    pub fn show(&mut self) -> AckTimer {
        self.generation += 1;
        self.visible = true;
        AckTimer {
            generation: self.generation,
        }
    }

    /// Hides the notice if `generation` is still the current one.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// Expiry for one [`Acknowledgment::show`].
#[derive(Debug)]
#[must_use = "the notice stays up until the timer is awaited and expired"]
pub struct AckTimer {
    generation: u64,
}

impl AckTimer {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits [`ACK_DURATION`] and returns the generation to expire.
    pub async fn wait(self) -> u64 {
        tokio::time::sleep(ACK_DURATION).await;
        self.generation
    }
}

/// Contact form state owned by the Contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactValues,
    touched: [bool; 3],
    phase: FormPhase,
    form_error: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Error from the last failed delivery, if any.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Records a keystroke.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
        if self.phase != FormPhase::Submitting {
            self.phase = if self.values.is_empty() && !self.any_touched() {
                FormPhase::Empty
            } else {
                FormPhase::Editing
            };
        }
    }

    /// Marks a field as visited so its error becomes visible.
    pub fn blur(&mut self, field: Field) {
        self.touched[field.index()] = true;
        if self.phase == FormPhase::Empty || self.phase == FormPhase::Submitted {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    pub fn errors(&self) -> FieldErrors {
        validate(&self.values)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// The error to show next to `field`: only once the field was touched.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.is_touched(field) {
            self.errors().get(field)
        } else {
            None
        }
    }

    /// Validates and, if everything passes, moves to `Submitting` and
    /// returns the values to deliver. Otherwise stays in `Editing` with
    /// every field touched.
    pub fn begin_submit(&mut self) -> Result<ContactValues, ContactError> {
        self.touched = [true; 3];
        self.form_error = None;

        let errors = self.errors();
        if !errors.is_empty() {
            tracing::debug!(invalid = errors.len(), "Contact submission blocked");
            self.phase = FormPhase::Editing;
            return Err(ContactError::Invalid(errors));
        }

        self.phase = FormPhase::Submitting;
        Ok(self.values.trimmed())
    }

    /// Applies the sink's answer. Success clears the form; failure keeps the
    /// values and surfaces a form-level error.
    pub fn finish_submit(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                self.values = ContactValues::default();
                self.touched = [false; 3];
                self.form_error = None;
                self.phase = FormPhase::Submitted;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact delivery failed");
                self.form_error = Some(e.to_string());
                self.phase = FormPhase::Editing;
            }
        }
    }

    /// Full submit: validate, deliver, apply the result.
    pub async fn submit(&mut self, sink: &dyn ContactSink) -> Result<ContactValues, ContactError> {
        let submission = self.begin_submit()?;
        match sink.deliver(&submission).await {
            Ok(()) => {
                self.finish_submit(Ok(()));
                Ok(submission)
            }
            Err(e) => {
                self.finish_submit(Err(e.clone()));
                Err(e)
            }
        }
    }

    fn any_touched(&self) -> bool {
        self.touched.iter().any(|t| *t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_expiry_keeps_newer_acknowledgment() {
        let mut ack = Acknowledgment::new();
        assert_eq!(ack.message(), None);

        let first = ack.show();
        let second = ack.show();
        assert!(!ack.expire(first.generation()));
        assert_eq!(ack.message(), Some("Message sent!"));

        assert!(ack.expire(second.generation()));
        assert!(!ack.is_visible());
        assert!(!ack.expire(second.generation()));
    }

    #[test]
    fn test_dismiss_hides_immediately() {
        let mut ack = Acknowledgment::new();
        let timer = ack.show();
        ack.dismiss();
        assert!(!ack.is_visible());
        assert!(!ack.expire(timer.generation()));
    }

    fn valid() -> ContactValues {
        ContactValues::new("Jane", "jane@x.com", "Hello there!")
    }

    #[test]
    fn test_valid_values_have_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn test_empty_name_is_required() {
        let values = ContactValues {
            name: String::new(),
            ..valid()
        };
        let errors = validate(&values);
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let values = ContactValues {
            name: "   ".to_string(),
            ..valid()
        };
        assert_eq!(validate(&values).get(Field::Name), Some(FieldError::Required));
    }

    #[test]
    fn test_email_shapes() {
        for good in ["jane@x.com", "a.b+c@mail.example.org", "x@y.io"] {
            assert!(is_email(good), "{good} should be accepted");
        }
        for bad in ["not-an-email", "jane@", "@x.com", "jane@x", "ja ne@x.com", "jane@x..com"] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_empty_fields_report_required_only() {
        let errors = validate(&ContactValues::default());
        assert_eq!(errors.len(), 3);
        for (_, err) in errors.iter() {
            assert_eq!(err, FieldError::Required);
        }
    }

    #[test]
    fn test_short_message() {
        let values = ContactValues {
            message: "Too short".to_string(),
            ..valid()
        };
        let err = validate(&values).get(Field::Message).unwrap();
        assert_eq!(err, FieldError::TooShort { min: 10 });
        assert_eq!(err.to_string(), "Min 10 characters");
    }

    #[test]
    fn test_message_length_counts_characters() {
        let values = ContactValues {
            message: "éééééééééé".to_string(),
            ..valid()
        };
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "nope");
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.visible_error(Field::Email), None);

        form.blur(Field::Email);
        assert_eq!(form.visible_error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(form.visible_error(Field::Name), None);
    }

    #[test]
    fn test_delivery_failure_keeps_values() {
        let mut form = ContactForm::new();
        for field in Field::ALL {
            form.set_field(field, valid().get(field).to_string());
        }
        let submission = form.begin_submit().unwrap();
        assert_eq!(form.phase(), FormPhase::Submitting);

        form.finish_submit(Err(ContactError::Delivery("offline".into())));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.values(), &submission);
        assert_eq!(form.form_error(), Some("delivery failed: offline"));
    }
}
