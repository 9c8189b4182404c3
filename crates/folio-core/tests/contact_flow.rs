//! End-to-end submit flows for the contact form.
//!
//! These drive `ContactForm::submit` against in-memory sinks to check that
//! blocked submissions never reach the sink and that successful ones clear
//! the form.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use folio_core::{
    AckTimer, Acknowledgment, ContactError, ContactForm, ContactSink, ContactValues, Field,
    FieldError, FormPhase, LogSink, ACK_DURATION,
};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Sink that remembers everything it was given.
#[derive(Default)]
struct RecordingSink {
    received: Mutex<Vec<ContactValues>>,
}

impl RecordingSink {
    fn received(&self) -> Vec<ContactValues> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactSink for RecordingSink {
    async fn deliver(&self, submission: &ContactValues) -> Result<(), ContactError> {
        self.received.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// Sink whose upstream is always down.
struct OfflineSink;

#[async_trait]
impl ContactSink for OfflineSink {
    async fn deliver(&self, _submission: &ContactValues) -> Result<(), ContactError> {
        Err(ContactError::Delivery("upstream unavailable".to_string()))
    }
}

fn fill(form: &mut ContactForm, name: &str, email: &str, message: &str) {
    form.set_field(Field::Name, name);
    form.set_field(Field::Email, email);
    form.set_field(Field::Message, message);
}

#[tokio::test]
async fn test_missing_name_blocks_with_required_on_name_only() {
    let sink = RecordingSink::default();
    let mut form = ContactForm::new();
    fill(&mut form, "", "jane@x.com", "Hello there!");

    let result = form.submit(&sink).await;

    assert!(matches!(result, Err(ContactError::Invalid(_))));
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.visible_error(Field::Name), Some(FieldError::Required));
    assert_eq!(form.visible_error(Field::Email), None);
    assert_eq!(form.visible_error(Field::Message), None);
    assert!(sink.received().is_empty());
}

#[tokio::test]
async fn test_malformed_email_blocks() {
    let sink = RecordingSink::default();
    let mut form = ContactForm::new();
    fill(&mut form, "Jane", "not-an-email", "Hello there!");

    let result = form.submit(&sink).await;

    match result {
        Err(ContactError::Invalid(errors)) => {
            assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
            assert_eq!(errors.len(), 1);
        }
        other => panic!("expected invalid form, got {other:?}"),
    }
    assert_eq!(
        form.visible_error(Field::Email).map(|e| e.to_string()),
        Some("Invalid email".to_string())
    );
    assert!(sink.received().is_empty());
}

#[tokio::test]
async fn test_short_message_blocks() {
    let sink = RecordingSink::default();
    let mut form = ContactForm::new();
    fill(&mut form, "Jane", "jane@x.com", "Hi!");

    assert!(form.submit(&sink).await.is_err());
    assert_eq!(
        form.visible_error(Field::Message),
        Some(FieldError::TooShort { min: 10 })
    );
    assert_eq!(form.value(Field::Message), "Hi!");
    assert!(sink.received().is_empty());
}

#[tokio::test]
async fn test_valid_submission_is_delivered_and_cleared() {
    let sink = RecordingSink::default();
    let mut form = ContactForm::new();
    fill(&mut form, "Jane", "jane@x.com", "Hello there!");
    assert!(form.is_valid());

    let submission = form.submit(&sink).await.unwrap();

    assert_eq!(submission, ContactValues::new("Jane", "jane@x.com", "Hello there!"));
    assert_eq!(sink.received(), vec![submission]);
    assert_eq!(form.phase(), FormPhase::Submitted);
    assert_eq!(form.values(), &ContactValues::default());
    for field in Field::ALL {
        assert!(!form.is_touched(field));
        assert_eq!(form.visible_error(field), None);
    }
}

#[tokio::test]
async fn test_padded_email_is_delivered_trimmed() {
    let sink = RecordingSink::default();
    let mut form = ContactForm::new();
    fill(&mut form, "  Jane ", "  jane@x.com  ", "Hello there!");

    let submission = form.submit(&sink).await.unwrap();

    let expected = ContactValues::new("Jane", "jane@x.com", "Hello there!");
    assert_eq!(submission, expected);
    assert_eq!(sink.received(), vec![expected]);
}

#[tokio::test]
async fn test_fix_and_resubmit() {
    let sink = RecordingSink::default();
    let mut form = ContactForm::new();
    fill(&mut form, "Jane", "jane@", "Hello there!");
    assert!(form.submit(&sink).await.is_err());

    form.set_field(Field::Email, "jane@x.com");
    assert_eq!(form.visible_error(Field::Email), None);
    assert!(form.submit(&sink).await.is_ok());
    assert_eq!(sink.received().len(), 1);
}

#[tokio::test]
async fn test_delivery_failure_is_form_local() {
    let mut form = ContactForm::new();
    fill(&mut form, "Jane", "jane@x.com", "Hello there!");

    let result = form.submit(&OfflineSink).await;

    assert_eq!(
        result,
        Err(ContactError::Delivery("upstream unavailable".to_string()))
    );
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.value(Field::Name), "Jane");
    assert!(form.form_error().unwrap().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_log_sink_accepts_valid_submission() {
    let mut form = ContactForm::new();
    fill(&mut form, "Jane", "jane@x.com", "Hello there!");
    assert!(form.submit(&LogSink).await.is_ok());
    assert_eq!(form.phase(), FormPhase::Submitted);
}

#[test]
fn test_submission_serializes_three_fields() {
    let values = ContactValues::new("Jane", "jane@x.com", "Hello there!");
    let json = serde_json::to_value(&values).unwrap();
    assert_eq!(json["name"], "Jane");
    assert_eq!(json["email"], "jane@x.com");
    assert_eq!(json["message"], "Hello there!");
}

/// Paused-clock timers fire on millisecond boundaries.
fn assert_elapsed(start: Instant, secs: u64) {
    let elapsed = start.elapsed();
    let expected = Duration::from_secs(secs);
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(5),
        "elapsed {elapsed:?}, expected {expected:?}"
    );
}

fn expire_later(ack: &Arc<Mutex<Acknowledgment>>, timer: AckTimer) -> JoinHandle<bool> {
    let ack = Arc::clone(ack);
    tokio::spawn(async move {
        let generation = timer.wait().await;
        ack.lock().unwrap().expire(generation)
    })
}

#[tokio::test(start_paused = true)]
async fn test_acknowledgment_hides_after_four_seconds() {
    let ack = Arc::new(Mutex::new(Acknowledgment::new()));
    let start = Instant::now();

    let timer = ack.lock().unwrap().show();
    let expiry = expire_later(&ack, timer);

    tokio::time::sleep(ACK_DURATION - Duration::from_millis(1)).await;
    assert!(ack.lock().unwrap().is_visible());

    assert!(expiry.await.unwrap());
    assert!(!ack.lock().unwrap().is_visible());
    assert_elapsed(start, 4);
}

#[tokio::test(start_paused = true)]
async fn test_second_submission_outlives_first_timer() {
    let ack = Arc::new(Mutex::new(Acknowledgment::new()));
    let start = Instant::now();

    let first = ack.lock().unwrap().show();
    let first_expiry = expire_later(&ack, first);

    tokio::time::sleep(Duration::from_secs(2)).await;
    let second = ack.lock().unwrap().show();
    let second_expiry = expire_later(&ack, second);

    // The first timer fires at 4s but belongs to an older notice.
    assert!(!first_expiry.await.unwrap());
    assert_elapsed(start, 4);
    assert!(ack.lock().unwrap().is_visible());

    assert!(second_expiry.await.unwrap());
    assert_elapsed(start, 6);
    assert!(!ack.lock().unwrap().is_visible());
}
