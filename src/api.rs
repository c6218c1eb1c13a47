//! Feeder Backend Bindings
//!
//! HTTP layer for feed submissions. Requests POST back to the current page
//! URL; the server answers JSON when the AJAX marker header is present.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{FormData, RequestCredentials};

use crate::models::{FeedRequest, FeedResponse};

/// Submit one feed request and parse the JSON response.
///
/// All failure modes (form assembly, network, non-JSON body) collapse into
/// `Err(String)` for the UI to surface.
pub async fn submit_feed(request: &FeedRequest, csrf_token: &str) -> Result<FeedResponse, String> {
    let form = build_form_data(request)?;
    let url = current_url()?;

    web_sys::console::log_1(&format!("[FEED] POST {} {}", request.request_type(), url).into());

    let response = Request::post(&url)
        .header("X-CSRFToken", csrf_token)
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .credentials(RequestCredentials::SameOrigin)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response
        .json::<FeedResponse>()
        .await
        .map_err(|e| e.to_string())
}

/// Build the multipart body from the request's field list
fn build_form_data(request: &FeedRequest) -> Result<FormData, String> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in request.form_fields() {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    Ok(form)
}

fn current_url() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window.location().href().map_err(js_error)
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
