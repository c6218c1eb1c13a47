//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Panel-wide state provided via context
#[derive(Clone, Copy)]
pub struct FeederContext {
    /// Anti-forgery token read from the host page at startup
    csrf_token: StoredValue<String>,
}

impl FeederContext {
    pub fn new() -> Self {
        Self {
            csrf_token: StoredValue::new(read_csrf_token()),
        }
    }

    pub fn csrf_token(&self) -> String {
        self.csrf_token.get_value()
    }

    /// Reload the page, re-fetching schedules and history from the server
    pub fn reload(&self) {
        web_sys::console::log_1(&"[FEED] refreshing page".into());
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Read the hidden `csrfmiddlewaretoken` input the server renders into the
/// page. Empty when absent; the backend rejects the request in that case.
fn read_csrf_token() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| {
            document
                .query_selector("[name=csrfmiddlewaretoken]")
                .ok()
                .flatten()
        })
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
