//! UI Components
//!
//! Reusable Leptos components.

mod feedback_form;
mod star_rating;

pub use feedback_form::FeedbackForm;
pub use star_rating::StarRating;
