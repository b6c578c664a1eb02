use std::time::Duration;

use inquiry::{Category, DEFAULT_RECIPIENT};

use super::*;
use crate::notify::log::LogNotifier;
use crate::state::test_helpers::RecordingNotifier;

fn sample_form() -> InquiryForm {
    InquiryForm {
        company_name: "ABC Corp".to_owned(),
        contact_name: "Kim".to_owned(),
        phone: "010-0000-0000".to_owned(),
        email: "a@b.com".to_owned(),
        category: Category::Safety,
        message: "Need consulting".to_owned(),
    }
}

#[tokio::test]
async fn deliver_sends_composed_message_once() {
    let notifier = RecordingNotifier::succeeding();

    let outcome = deliver_inquiry(notifier.as_ref(), DEFAULT_RECIPIENT, &sample_form()).await;

    assert_eq!(outcome, DeliveryOutcome::Sent);
    let payloads = notifier.payloads();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0], compose_message(&sample_form(), DEFAULT_RECIPIENT));
}

#[tokio::test]
async fn deliver_payload_carries_all_fields_and_category_label() {
    let notifier = RecordingNotifier::succeeding();

    deliver_inquiry(notifier.as_ref(), DEFAULT_RECIPIENT, &sample_form()).await;

    let payload = &notifier.payloads()[0];
    for needle in ["ABC Corp", "Kim", "010-0000-0000", "a@b.com", "안전", "Need consulting"] {
        assert!(payload.contains(needle), "payload missing {needle}");
    }
}

#[tokio::test]
async fn deliver_swallows_notifier_failure() {
    let notifier = RecordingNotifier::failing();

    let outcome = deliver_inquiry(notifier.as_ref(), DEFAULT_RECIPIENT, &sample_form()).await;

    assert_eq!(outcome, DeliveryOutcome::Failed);
    assert_eq!(notifier.payloads().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn deliver_unconfigured_is_simulated_after_delay() {
    let notifier = LogNotifier::new(Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    let outcome = deliver_inquiry(&notifier, DEFAULT_RECIPIENT, &sample_form()).await;

    assert_eq!(outcome, DeliveryOutcome::Simulated);
    assert!(started.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test]
async fn deliver_uses_configured_recipient_label() {
    let notifier = RecordingNotifier::succeeding();

    deliver_inquiry(notifier.as_ref(), "desk@example.com", &sample_form()).await;

    assert!(notifier.payloads()[0].contains("*수신자*: desk@example.com"));
}
