//! Clock Component
//!
//! Live local date/time display, refreshed once per second.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Current date/time text, ticking for the lifetime of the page
#[component]
pub fn Clock() -> impl IntoView {
    let (now, set_now) = signal(datetime_string());

    spawn_local(async move {
        loop {
            sleep(Duration::from_secs(1)).await;
            // Stops quietly once the owning scope is disposed
            if set_now.try_set(datetime_string()).is_some() {
                break;
            }
        }
    });

    view! {
        <span id="current-datetime">{move || now.get()}</span>
    }
}

/// Current local date and time, formatted by the browser locale
fn datetime_string() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
