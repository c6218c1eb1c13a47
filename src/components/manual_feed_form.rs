//! Manual Feed Form Component
//!
//! Immediate feed: portion slider, submit, status alert.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{run_countdown, FeedStatus, PortionSlider};
use crate::context::FeederContext;
use crate::models::{FeedRequest, DEFAULT_PORTION};
use crate::submission::SubmitState;

/// Success text when the backend omits a message
const DEFAULT_SUCCESS: &str = "Feed command sent successfully!";

#[component]
pub fn ManualFeedForm() -> impl IntoView {
    let ctx = use_context::<FeederContext>().expect("FeederContext should be provided");

    let (portion, set_portion) = signal(DEFAULT_PORTION);
    let (state, set_state) = signal(SubmitState::Idle);
    let (countdown, set_countdown) = signal(None::<u32>);

    // Cancels a pending countdown if the form is torn down first
    let cancelled = Arc::new(AtomicBool::new(false));
    {
        let cancelled = cancelled.clone();
        on_cleanup(move || cancelled.store(true, Ordering::Relaxed));
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().is_submitting() {
            return;
        }

        // Disable the button before the request goes out
        set_state.set(SubmitState::Submitting);

        let request = FeedRequest::Manual {
            portion: portion.get_untracked(),
        };
        let cancelled = cancelled.clone();
        spawn_local(async move {
            let next = match api::submit_feed(&request, &ctx.csrf_token()).await {
                Ok(response) => SubmitState::from_response(&response, DEFAULT_SUCCESS),
                Err(error) => SubmitState::from_transport_error(&error),
            };
            let succeeded = matches!(next, SubmitState::Success(_));
            set_state.set(next);

            if succeeded && run_countdown(set_countdown, cancelled).await {
                ctx.reload();
            }
        });
    };

    view! {
        <section class="feed-card">
            <h2>"Manual Feed"</h2>

            <FeedStatus
                state=state
                countdown=countdown
                progress_text="Sending feed command... Please wait while your pet's food is being dispensed."
            />

            <form name="manual-feed-form" on:submit=on_submit>
                <label for="manual-portion">"Portion size"</label>
                <PortionSlider id="manual-portion" portion=portion set_portion=set_portion />

                <button type="submit" prop:disabled=move || state.get().is_submitting()>
                    {move || if state.get().is_submitting() { "Feeding..." } else { "Feed Now" }}
                </button>
            </form>
        </section>
    }
}
