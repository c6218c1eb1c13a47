//! Feed Status Component
//!
//! Status alert for a submission flow, plus the post-success countdown
//! that hands control back to the server via a page reload.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;

use crate::submission::{SubmitState, COUNTDOWN_SECS};

/// Alert box above a feed form.
///
/// Hidden while Idle; spinner + progress text while Submitting; the
/// server's message (with countdown, if live) after a resolved request.
#[component]
pub fn FeedStatus(
    state: ReadSignal<SubmitState>,
    countdown: ReadSignal<Option<u32>>,
    #[prop(into)] progress_text: String,
) -> impl IntoView {
    view! {
        {move || {
            let current = state.get();
            let alert_class = current.alert_class();
            match current {
                SubmitState::Idle => ().into_any(),
                SubmitState::Submitting => view! {
                    <div class=alert_class>
                        <span class="spinner" role="status"></span>
                        <span>{progress_text.clone()}</span>
                    </div>
                }.into_any(),
                SubmitState::Success(message) => view! {
                    <div class=alert_class>
                        <span class="status-icon">"✓"</span>
                        <span>{message}</span>
                        {move || countdown.get().map(|remaining| view! {
                            <span class="countdown">
                                {format!(" (Refreshing in {}...)", remaining)}
                            </span>
                        })}
                    </div>
                }.into_any(),
                SubmitState::Failure(message) => view! {
                    <div class=alert_class>
                        <span class="status-icon">"!"</span>
                        <span>{message}</span>
                    </div>
                }.into_any(),
            }
        }}
    }
}

/// Drive the visible countdown, one tick per second.
///
/// Returns true when it ran to zero and the page should reload; false when
/// the owning component was torn down first.
pub async fn run_countdown(
    set_countdown: WriteSignal<Option<u32>>,
    cancelled: Arc<AtomicBool>,
) -> bool {
    for remaining in (1..=COUNTDOWN_SECS).rev() {
        if cancelled.load(Ordering::Relaxed) || set_countdown.try_set(Some(remaining)).is_some() {
            return false;
        }
        sleep(Duration::from_secs(1)).await;
    }
    !cancelled.load(Ordering::Relaxed)
}
