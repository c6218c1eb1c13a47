//! Schedule Feed Form Component
//!
//! Creates a feeding schedule: time of day, portion slider, submit,
//! status alert. Resets its controls after a successful submission.

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
const DEFAULT_SUCCESS: &str = "Schedule added successfully!";

#[component]
pub fn ScheduleFeedForm() -> impl IntoView {
    let ctx = use_context::<FeederContext>().expect("FeederContext should be provided");

    let (portion, set_portion) = signal(DEFAULT_PORTION);
    let (time, set_time) = signal(String::new());
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
        let time_value = time.get_untracked();
        if time_value.is_empty() {
            return;
        }

        // Disable the button before the request goes out
        set_state.set(SubmitState::Submitting);

        let request = FeedRequest::Schedule {
            portion: portion.get_untracked(),
            time: time_value,
        };
        let cancelled = cancelled.clone();
        spawn_local(async move {
            let next = match api::submit_feed(&request, &ctx.csrf_token()).await {
                Ok(response) => SubmitState::from_response(&response, DEFAULT_SUCCESS),
                Err(error) => SubmitState::from_transport_error(&error),
            };
            let succeeded = matches!(next, SubmitState::Success(_));
            set_state.set(next);

            if succeeded {
                // Reset the form; the badge restyles itself from the signal
                set_time.set(String::new());
                set_portion.set(DEFAULT_PORTION);

                if run_countdown(set_countdown, cancelled).await {
                    ctx.reload();
                }
            }
        });
    };

    view! {
        <section class="feed-card">
            <h2>"Schedule Feed"</h2>

            <FeedStatus
                state=state
                countdown=countdown
                progress_text="Adding feeding schedule..."
            />

            <form name="schedule-feed-form" on:submit=on_submit>
                <label for="schedule-time">"Time"</label>
                <input
                    type="time"
                    id="schedule-time"
                    required=true
                    prop:value=move || time.get()
                    on:input=move |ev| set_time.set(event_target_value(&ev))
                />

                <label for="schedule-portion">"Portion size"</label>
                <PortionSlider id="schedule-portion" portion=portion set_portion=set_portion />

                <button type="submit" prop:disabled=move || state.get().is_submitting()>
                    {move || if state.get().is_submitting() { "Adding..." } else { "Add Schedule" }}
                </button>
            </form>
        </section>
    }
}
