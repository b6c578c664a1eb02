//! Inquiry delivery pipeline.
//!
//! Formats a submitted form into the notification text and hands it to the
//! configured notifier. The submitter is always told the inquiry was
//! recorded; delivery problems only show up in the server log.

use inquiry::{InquiryForm, compose_message};
use uuid::Uuid;

use crate::notify::{Delivery, Notifier};

/// What happened to a delivery attempt. For logs and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    Simulated,
    Failed,
}

/// Build the message for `form` and make one delivery attempt.
///
/// Never fails: a notifier error is logged and reported as
/// [`DeliveryOutcome::Failed`].
pub async fn deliver_inquiry(notifier: &dyn Notifier, recipient: &str, form: &InquiryForm) -> DeliveryOutcome {
    let inquiry_id = Uuid::new_v4();
    let text = compose_message(form, recipient);

    tracing::info!(
        %inquiry_id,
        %recipient,
        notifier = notifier.kind(),
        category = form.category.value(),
        "sending inquiry"
    );

    match notifier.notify(&text).await {
        Ok(Delivery::Sent) => {
            tracing::info!(%inquiry_id, "inquiry delivered");
            DeliveryOutcome::Sent
        }
        Ok(Delivery::Simulated) => {
            tracing::info!(%inquiry_id, "inquiry recorded without delivery");
            DeliveryOutcome::Simulated
        }
        // Deliberately swallowed: the submitter sees success either way.
        Err(e) => {
            tracing::error!(%inquiry_id, error = %e, "inquiry delivery failed");
            DeliveryOutcome::Failed
        }
    }
}

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod tests;
