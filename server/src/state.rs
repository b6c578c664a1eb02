//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the delivery channel picked at startup and the recipient label
//! embedded in every inquiry message. Nothing in it is mutable.

use std::sync::Arc;

use crate::notify::Notifier;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<dyn Notifier>,
    pub recipient: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>, recipient: &str) -> Self {
        Self { notifier, recipient: Arc::from(recipient) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::notify::{Delivery, NotifyError};

    /// Scripted notifier that records every payload it is asked to send.
    pub struct RecordingNotifier {
        pub sent: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingNotifier {
        #[must_use]
        pub fn succeeding() -> Arc<Self> {
            Arc::new(Self { sent: Mutex::new(Vec::new()), fail: false })
        }

        #[must_use]
        pub fn failing() -> Arc<Self> {
            Arc::new(Self { sent: Mutex::new(Vec::new()), fail: true })
        }

        #[must_use]
        pub fn payloads(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Notifier for RecordingNotifier {
        fn kind(&self) -> &'static str {
            "recording"
        }

        async fn notify(&self, text: &str) -> Result<Delivery, NotifyError> {
            self.sent.lock().unwrap().push(text.to_owned());
            if self.fail {
                Err(NotifyError::Request("connection refused".into()))
            } else {
                Ok(Delivery::Sent)
            }
        }
    }

    /// Create a test `AppState` around the given notifier.
    #[must_use]
    pub fn test_app_state(notifier: Arc<dyn Notifier>) -> AppState {
        AppState::new(notifier, inquiry::DEFAULT_RECIPIENT)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
