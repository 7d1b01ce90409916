//! Form State Store
//!
//! One explicit state object for the form's lifetime, using Leptos
//! reactive_stores for field-level reactivity. The phase machine is linear:
//! Loading -> Editing -> Submitted, with no back-transitions.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DelegateResponse, RatingItem};

/// Logical phase of the feedback form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Loading,
    Editing,
    Submitted,
}

/// All form state, local to one form instance
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Decoded respondent email, None when the URL carried no usable identity
    pub identity: Option<String>,
    /// Editable display name, seeded from the read response
    pub respondent: String,
    /// Ordered rating entries, fetch-response order
    pub items: Vec<RatingItem>,
    pub phase: FormPhase,
    /// Last swallowed failure; diagnostic only, never rendered
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Build rating entries from a fetched meeting list, 1-based ids
pub fn items_from_meetings(meetings: &[String]) -> Vec<RatingItem> {
    meetings
        .iter()
        .enumerate()
        .map(|(index, name)| RatingItem {
            id: index as u32 + 1,
            name: name.clone(),
            rating: None,
        })
        .collect()
}

/// Set one item's rating; values outside 1-5 are ignored
pub fn apply_rating(items: &mut [RatingItem], id: u32, rating: u8) {
    if !(1..=5).contains(&rating) {
        return;
    }
    items.iter_mut()
        .find(|item| item.id == id)
        .map(|item| item.rating = Some(rating));
}

// ========================
// Store Helper Functions
// ========================

/// Apply a successful read response and enter Editing
pub fn store_apply_response(store: &FormStore, response: DelegateResponse) {
    store.items().set(items_from_meetings(&response.delegate_meetings));
    store.respondent().set(response.name);
    store.phase().set(FormPhase::Editing);
}

/// Record a read failure: the table stays empty, the form stays usable
pub fn store_load_failed(store: &FormStore, err: String) {
    store.last_error().set(Some(err));
    store.phase().set(FormPhase::Editing);
}

/// Update one item's rating in the store
pub fn store_set_rating(store: &FormStore, id: u32, rating: u8) {
    apply_rating(&mut store.items().write(), id, rating);
}

/// Record a swallowed write failure without blocking submission
pub fn store_record_error(store: &FormStore, err: String) {
    store.last_error().set(Some(err));
}

/// Enter the terminal Submitted phase
pub fn store_mark_submitted(store: &FormStore) {
    store.phase().set(FormPhase::Submitted);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<RatingItem> {
        items_from_meetings(&["Acme".to_string(), "Globex".to_string()])
    }

    #[test]
    fn test_items_from_meetings_assigns_sequential_ids() {
        let items = sample_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], RatingItem { id: 1, name: "Acme".to_string(), rating: None });
        assert_eq!(items[1], RatingItem { id: 2, name: "Globex".to_string(), rating: None });
    }

    #[test]
    fn test_empty_meeting_list_yields_empty_items() {
        assert!(items_from_meetings(&[]).is_empty());
    }

    #[test]
    fn test_apply_rating_touches_only_target_item() {
        let mut items = sample_items();
        apply_rating(&mut items, 2, 4);
        assert_eq!(items[0].rating, None);
        assert_eq!(items[1].rating, Some(4));
        assert_eq!(items[0].name, "Acme");
        assert_eq!(items[1].name, "Globex");
    }

    #[test]
    fn test_apply_rating_last_write_wins() {
        let mut items = sample_items();
        apply_rating(&mut items, 1, 3);
        apply_rating(&mut items, 1, 5);
        assert_eq!(items[0].rating, Some(5));
    }

    #[test]
    fn test_apply_rating_ignores_out_of_range_values() {
        let mut items = sample_items();
        apply_rating(&mut items, 1, 0);
        apply_rating(&mut items, 1, 6);
        assert_eq!(items[0].rating, None);
    }

    #[test]
    fn test_apply_rating_ignores_unknown_id() {
        let mut items = sample_items();
        apply_rating(&mut items, 99, 4);
        assert!(items.iter().all(|item| item.rating.is_none()));
    }

    #[test]
    fn test_order_preserved_through_edits() {
        let mut items = sample_items();
        apply_rating(&mut items, 2, 5);
        apply_rating(&mut items, 1, 1);
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
