//! Feedback Form Component
//!
//! Stateful form over the feedback service: one read on mount to populate
//! the rating table, one fire-and-forget write on submit. Failures are
//! logged to the console and swallowed; the page never crashes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::StarRating;
use crate::store::{
    store_apply_response, store_load_failed, store_mark_submitted, store_record_error,
    store_set_rating, FormPhase, FormState, FormStateStoreFields, FormStore,
};

#[component]
pub fn FeedbackForm(email: ReadSignal<Option<String>>) -> impl IntoView {
    let store: FormStore = Store::new(FormState::default());
    let (busy, set_busy) = signal(false);

    // Single read, keyed by the identity resolved on the entry page. Without
    // an identity the form stays in its Loading dead-end: no fetch, no rows.
    Effect::new(move |_| {
        let Some(identity) = email.get() else {
            web_sys::console::error_1(&"Email is required".into());
            return;
        };
        store.identity().set(Some(identity.clone()));
        set_busy.set(true);
        spawn_local(async move {
            match api::load_delegate(&identity).await {
                Ok(response) => store_apply_response(&store, response),
                Err(err) => {
                    web_sys::console::error_1(&format!("Error fetching meetings: {}", err).into());
                    store_load_failed(&store, err);
                }
            }
            set_busy.set(false);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let identity = store.identity().get().unwrap_or_default();
        let items = store.items().get();
        set_busy.set(true);
        spawn_local(async move {
            if let Err(err) = api::submit_feedback(&identity, &items).await {
                web_sys::console::error_1(&format!("Error submitting feedback: {}", err).into());
                store_record_error(&store, err);
            }
            set_busy.set(false);
            // Terminal regardless of transport outcome; the no-cors write
            // gives us nothing to react to anyway
            store_mark_submitted(&store);
        });
    };

    let submitted = move || store.phase().get() == FormPhase::Submitted;

    view! {
        <Show when=move || submitted()>
            <div class="thanks-card">
                <h2>"Thank You!"</h2>
                <p>"Your feedback has been submitted successfully."</p>
            </div>
        </Show>

        <Show when=move || !submitted()>
            <div class="feedback-container">
                <header class="banner">
                    <h1>"MALT Congress - Meetings Feedback"</h1>
                </header>
                <div class="top-loader" class:active=move || busy.get()></div>

                <form class="feedback-card" on:submit=submit>
                    <div class="field">
                        <label for="name">"Name of the representative"</label>
                        <input
                            id="name"
                            type="text"
                            prop:value=move || store.respondent().get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                store.respondent().set(input.value());
                            }
                        />
                    </div>
                    <div class="field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            prop:value=move || email.get().unwrap_or_default()
                            disabled=true
                        />
                    </div>

                    <p class="instructions">
                        "Please find below the list of clients you met during MALT Congress 2025."
                    </p>
                    <p class="instructions-note">
                        "(Kindly rate on a basis of 1 to 5 - 1 being the lowest and 5 being the highest)"
                    </p>

                    <table class="rating-table">
                        <tbody>
                            {move || store.items().get().into_iter().enumerate().map(|(index, item)| {
                                let row_class = if index % 2 == 0 { "even" } else { "odd" };
                                let item_id = item.id;
                                view! {
                                    <tr class=row_class>
                                        <td class="cell-id">{item_id}</td>
                                        <td class="cell-name">{item.name}</td>
                                        <td class="cell-stars">
                                            <StarRating
                                                rating=item.rating
                                                on_select=move |value: u8| store_set_rating(&store, item_id, value)
                                            />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>

                    <button type="submit" class="submit-btn">"Submit"</button>

                    <p class="privacy-note">
                        "This data is for internal purpose only and will not be shared with any third party."
                    </p>
                </form>
            </div>
        </Show>
    }
}
