use crate::store::model::{ConsentUpdate, Meeting, Person};
use crate::store::StoreError;
use serde::{Deserialize, Serialize};

/// The closed set of store actions.
///
/// The wire form is `{"type": "ADD_PERSON", "payload": {...}}`. Any kind not
/// listed here decodes to [`StoreAction::Unknown`], which the reducer passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    SetSearchQuery(String),
    AddPerson(Person),
    UpdatePerson(Person),
    AddMeeting(Meeting),
    SetCurrentMeeting(Meeting),
    UpdateConsentSettings(ConsentUpdate),
    #[serde(other)]
    Unknown,
}

impl StoreAction {
    /// Wire names of every recognised kind.
    pub const KINDS: [&'static str; 6] = [
        "SET_SEARCH_QUERY",
        "ADD_PERSON",
        "UPDATE_PERSON",
        "ADD_MEETING",
        "SET_CURRENT_MEETING",
        "UPDATE_CONSENT_SETTINGS",
    ];

    /// Decode one action. An unrecognised `type` yields `Unknown` whatever its
    /// payload; a recognised one with a bad payload is an error.
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(StoreError::Decode)?;
        if let Some(kind) = value.get("type").and_then(serde_json::Value::as_str) {
            if !Self::KINDS.contains(&kind) {
                return Ok(StoreAction::Unknown);
            }
        }
        serde_json::from_value(value).map_err(StoreError::Decode)
    }

    /// Wire name of the action kind, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreAction::SetSearchQuery(_) => "SET_SEARCH_QUERY",
            StoreAction::AddPerson(_) => "ADD_PERSON",
            StoreAction::UpdatePerson(_) => "UPDATE_PERSON",
            StoreAction::AddMeeting(_) => "ADD_MEETING",
            StoreAction::SetCurrentMeeting(_) => "SET_CURRENT_MEETING",
            StoreAction::UpdateConsentSettings(_) => "UPDATE_CONSENT_SETTINGS",
            StoreAction::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_search_query() {
        let action = StoreAction::from_json(r#"{"type":"SET_SEARCH_QUERY","payload":"vc"}"#).unwrap();
        assert_eq!(action, StoreAction::SetSearchQuery("vc".into()));
    }

    #[test]
    fn decodes_partial_consent() {
        let action = StoreAction::from_json(
            r#"{"type":"UPDATE_CONSENT_SETTINGS","payload":{"faceMemoryEnabled":true}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            StoreAction::UpdateConsentSettings(ConsentUpdate {
                face_memory_enabled: Some(true),
                ..Default::default()
            })
        );
    }

    #[test]
    fn unrecognized_kind_decodes_to_unknown() {
        let action = StoreAction::from_json(r#"{"type":"DELETE_EVERYTHING"}"#).unwrap();
        assert_eq!(action, StoreAction::Unknown);
        assert_eq!(action.kind(), "UNKNOWN");
        let action =
            StoreAction::from_json(r#"{"type":"DELETE_EVERYTHING","payload":{"all":true}}"#).unwrap();
        assert_eq!(action, StoreAction::Unknown);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = StoreAction::from_json(r#"{"type":"ADD_PERSON","payload":42}"#).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[test]
    fn kind_matches_wire_tag() {
        let action = StoreAction::SetSearchQuery("x".into());
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.kind());
        assert!(StoreAction::KINDS.contains(&action.kind()));
    }
}
