//! Portion Slider Component
//!
//! Range input with a live value badge, colored by magnitude band.
//! One component bound per form; the original page duplicated this wiring
//! for each slider.

use leptos::prelude::*;

use crate::models::PortionBand;

/// Slider (1-10) plus value badge
#[component]
pub fn PortionSlider(
    #[prop(into)] id: String,
    portion: ReadSignal<u32>,
    set_portion: WriteSignal<u32>,
) -> impl IntoView {
    view! {
        <div class="portion-row">
            <input
                type="range"
                id=id
                min="1"
                max="10"
                prop:value=move || portion.get().to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                        set_portion.set(value);
                    }
                }
            />
            <span class=move || PortionBand::from_portion(portion.get()).badge_class()>
                {move || portion.get()}
            </span>
        </div>
    }
}
