//! UI Components
//!
//! Leptos components for the feed control panel.

mod clock;
mod feed_status;
mod manual_feed_form;
mod portion_slider;
mod schedule_feed_form;

pub use clock::Clock;
pub use feed_status::{run_countdown, FeedStatus};
pub use manual_feed_form::ManualFeedForm;
pub use portion_slider::PortionSlider;
pub use schedule_feed_form::ScheduleFeedForm;
