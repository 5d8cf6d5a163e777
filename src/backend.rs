//! Backend Endpoint Client
//!
//! Write sink and feed source for check-ins, backed by the deployed
//! Apps Script URL. The write is deliberately fire-and-forget: the entry
//! is a low-stakes event log and delivery is best-effort at-most-once.

use leptos::task::spawn_local;

use crate::constants;
use crate::error::PassportError;
use crate::models::{CheckInEntry, FeedEntry, FeedResponse};

/// The check-in write. In the browser this goes out in no-cors mode: the
/// Apps Script deployment answers no preflight, so a plain cross-origin
/// JSON POST would be blocked before it ever left. The opaque response is
/// the price; it was never inspected anyway.
fn write_request(body: String) -> reqwest::RequestBuilder {
    let request = reqwest::Client::new()
        .post(constants::SCRIPT_URL)
        .header("Content-Type", "application/json")
        .body(body);
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_mode_no_cors();
    request
}

/// Dispatch a check-in write without awaiting or inspecting the response.
///
/// Serialization happens up front so a malformed entry still fails the
/// submit path; the network send itself is spawned and its outcome is
/// unobservable by design.
pub fn send_check_in(entry: &CheckInEntry) -> Result<(), PassportError> {
    if !constants::backend_configured() {
        return Ok(());
    }
    let body = serde_json::to_string(entry)?;
    spawn_local(async move {
        if let Err(e) = write_request(body).send().await {
            web_sys::console::error_1(&format!("[BACKEND] Write failed: {e}").into());
        }
    });
    Ok(())
}

/// Read the most recent check-in window from the backend.
///
/// `Ok(None)` means the response carried no `feed` field ("no data");
/// the caller keeps whatever list it already shows.
pub async fn fetch_feed() -> Result<Option<Vec<FeedEntry>>, PassportError> {
    let response: FeedResponse = reqwest::Client::new()
        .get(constants::SCRIPT_URL)
        .send()
        .await?
        .json()
        .await?;
    Ok(response.feed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_request_targets_endpoint_with_json_body() {
        let body = r#"{"nickname":"Amy"}"#;
        let request = write_request(body.to_string()).build().expect("Build failed");

        assert_eq!(request.method(), "POST");
        assert_eq!(request.url().as_str(), constants::SCRIPT_URL);
        assert_eq!(
            request
                .headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        let sent = request.body().and_then(|b| b.as_bytes()).expect("Body missing");
        assert_eq!(sent, body.as_bytes());
    }
}
