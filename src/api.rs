//! Feedback Service Bindings
//!
//! Async wrappers over the browser Fetch API for the two endpoint
//! operations: one read at mount, one fire-and-forget write at submit.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::encoding;
use crate::models::{DelegateResponse, FeedbackPayload, RatingItem};

/// Apps Script deployment serving both the read and the write
pub const ENDPOINT_URL: &str =
    "https://script.google.com/macros/s/AKfycbzmniJj43dF-jJa-bNbhr6m0Ns8VOEe8szGghJ0ZSObhVCfmGnRCt3JLTcckT9HRo0E/exec";

fn js_error(context: &str, err: JsValue) -> String {
    format!("{}: {:?}", context, err)
}

fn current_window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window available".to_string())
}

/// Fetch the respondent name and meeting list for an identity
pub async fn load_delegate(identity: &str) -> Result<DelegateResponse, String> {
    let encoded = encoding::encode_identity(identity);
    let url = format!(
        "{}?email={}",
        ENDPOINT_URL,
        utf8_percent_encode(&encoded, NON_ALPHANUMERIC)
    );

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| js_error("building read request", e))?;

    let window = current_window()?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetching delegate meetings", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;

    let json = JsFuture::from(resp.json().map_err(|e| js_error("reading response body", e))?)
        .await
        .map_err(|e| js_error("parsing response body", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Submit the edited item list for an identity
///
/// The request runs in no-cors mode, so the response is opaque: the caller
/// can only observe dispatch failures, never the service's verdict.
pub async fn submit_feedback(identity: &str, items: &[RatingItem]) -> Result<(), String> {
    let payload = FeedbackPayload::new(encoding::encode_identity(identity), items)?;
    let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::NoCors);
    opts.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(ENDPOINT_URL, &opts)
        .map_err(|e| js_error("building write request", e))?;
    // The browser strips non-safelisted headers in no-cors mode
    let _ = request.headers().set("Content-Type", "application/json");

    let window = current_window()?;
    JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("submitting feedback", e))?;
    Ok(())
}
