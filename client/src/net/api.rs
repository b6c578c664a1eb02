//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submissions only
//! originate in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<(), String>` instead of panics. The contact page
//! logs the error and shows its confirmation anyway.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use inquiry::InquiryForm;

pub const INQUIRY_ENDPOINT: &str = "/api/inquiry";

#[cfg(any(test, feature = "hydrate"))]
fn inquiry_request_body(form: &InquiryForm) -> Result<String, String> {
    serde_json::to_string(form).map_err(|e| e.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(status: u16) -> String {
    format!("inquiry submit failed: {status}")
}

/// Post a contact form submission to `POST /api/inquiry`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the server
/// responds with a non-OK status.
pub async fn submit_inquiry(form: &InquiryForm) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = inquiry_request_body(form)?;
        let resp = gloo_net::http::Request::post(INQUIRY_ENDPOINT)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(submit_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}
