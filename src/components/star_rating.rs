//! Star Rating Component
//!
//! Reusable 1-5 star selector row.

use leptos::prelude::*;

/// Row of five star buttons
///
/// Clicking a star reports its value through `on_select`. Stars up to and
/// including the current rating render filled. There is no unset action.
#[component]
pub fn StarRating(
    rating: Option<u8>,
    #[prop(into)] on_select: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1u8..=5).map(|star| {
                let filled = rating.unwrap_or(0) >= star;
                view! {
                    <button
                        type="button"
                        class=if filled { "star filled" } else { "star" }
                        on:click=move |_| on_select.run(star)
                    >
                        "★"
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
