//! Meetings Feedback App
//!
//! Entry page: resolves the respondent identity from the URL once per page
//! load and hands it to the feedback form.

use leptos::prelude::*;

use crate::components::FeedbackForm;
use crate::encoding;

/// Read and decode the `email` query parameter, if any
fn identity_from_location() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let encoded = params.get("email")?;
    match encoding::decode_identity(&encoded) {
        Ok(identity) => Some(identity),
        Err(err) => {
            web_sys::console::error_1(&format!("Unusable email parameter: {}", err).into());
            None
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (email, set_email) = signal::<Option<String>>(None);

    // Resolve once on mount; in-session navigation never re-parses
    Effect::new(move |_| {
        if let Some(identity) = identity_from_location() {
            set_email.set(Some(identity));
        }
    });

    view! {
        <main class="page">
            <FeedbackForm email=email />
        </main>
    }
}
