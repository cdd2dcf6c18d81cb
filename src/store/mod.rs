//! In-memory state store: data model, the closed action set, the reducer and
//! read-side queries.
//!
//! The [`Store`] is owned by the application root and is the only writer.
//! Views receive `&StoreState` and never mutate it.

pub mod action;
pub mod model;
pub mod query;
pub mod reducer;
pub mod seed;

pub use action::StoreAction;
pub use model::{ActionItem, ConsentKey, ConsentSettings, ConsentUpdate, Meeting, Person, StoreState};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to decode store action: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Single-writer holder of the current [`StoreState`].
#[derive(Debug, Clone)]
pub struct Store {
    state: StoreState,
}

impl Store {
    pub fn new(state: StoreState) -> Self {
        Self { state }
    }

    /// A store seeded with the demo people and meetings.
    pub fn seeded() -> Self {
        Self::new(seed::initial_state())
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Replace the state with `reducer::apply(state, action)`.
    pub fn dispatch(&mut self, action: StoreAction) {
        tracing::debug!(kind = action.kind(), "dispatch");
        if matches!(action, StoreAction::Unknown) {
            tracing::trace!("unrecognized action ignored");
        }
        self.state = reducer::apply(&self.state, &action);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_replaces_state() {
        let mut store = Store::seeded();
        store.dispatch(StoreAction::SetSearchQuery("vc".into()));
        assert_eq!(store.state().search_query, "vc");
        store.dispatch(StoreAction::Unknown);
        assert_eq!(store.state().search_query, "vc");
    }

    #[test]
    fn decoded_actions_dispatch() {
        let mut store = Store::seeded();
        let action = StoreAction::from_json(
            r#"{"type":"UPDATE_CONSENT_SETTINGS","payload":{"recordingEnabled":true}}"#,
        )
        .unwrap();
        store.dispatch(action);
        assert!(store.state().consent_settings.recording_enabled);
        assert!(store.state().consent_settings.transcript_enabled);
    }
}
