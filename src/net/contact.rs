//! Contact form submission capability.
//!
//! Client-side (hydrate): a simulated asynchronous submission that always
//! succeeds after a fixed delay, logging the serialized payload in place of
//! the HTTP call. A deployment with a real backend swaps the body of
//! [`submit`] for a `POST` and surfaces its failure reason through `Err`.
//! Server-side (SSR): a stub error, since submission is only meaningful in
//! the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// Payload for the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Round-trip delay of the stubbed endpoint.
#[cfg(feature = "hydrate")]
const SIMULATED_DELAY_MS: u64 = 2000;

/// Submit the contact form.
///
/// # Errors
///
/// Returns an error string when no submission capability is available
/// (server builds) or when the endpoint reports a failure. The stub itself
/// never fails.
pub async fn submit(request: &ContactRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(SIMULATED_DELAY_MS)).await;
        let json = serde_json::to_string(request).map_err(|e| e.to_string())?;
        log::info!("contact form submitted: {json}");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
