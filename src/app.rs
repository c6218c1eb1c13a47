//! Feeder Control Panel App
//!
//! Main application component: clock header plus the two feed forms.

use leptos::prelude::*;

use crate::components::{Clock, ManualFeedForm, ScheduleFeedForm};
use crate::context::FeederContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children (anti-forgery token, page reload)
    provide_context(FeederContext::new());

    view! {
        <div class="feed-panel">
            <header class="panel-header">
                <h1>"Feed Control"</h1>
                <Clock />
            </header>

            <main class="panel-body">
                <ManualFeedForm />
                <ScheduleFeedForm />
            </main>
        </div>
    }
}
