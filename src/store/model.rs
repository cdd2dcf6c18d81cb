//! Data model held by the store.
//!
//! All structs derive `Serialize`/`Deserialize` with camelCase field names so
//! the export document reads the same as the in-memory model. Optional fields
//! are skipped when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Someone the user has met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text impressions; searched alongside tags and notes.
    #[serde(default)]
    pub vibes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_meeting: Option<DateTime<Utc>>,
    #[serde(default)]
    pub meeting_count: u32,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// A past meeting. `attendees` holds `Person::id` values; they are not
/// checked against the people list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(default)]
    pub is_recorded: bool,
}

impl Meeting {
    pub fn completed_count(&self) -> usize {
        self.action_items.iter().filter(|a| a.completed).count()
    }
}

/// Follow-up task owned by a single meeting. Ids are unique per meeting only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub text: String,
    pub assigned_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentSettings {
    pub recording_enabled: bool,
    pub transcript_enabled: bool,
    pub face_memory_enabled: bool,
}

impl Default for ConsentSettings {
    fn default() -> Self {
        Self {
            recording_enabled: false,
            transcript_enabled: true,
            face_memory_enabled: false,
        }
    }
}

impl ConsentSettings {
    /// Shallow merge: keys present in `update` win, the rest keep their value.
    pub fn merged(self, update: &ConsentUpdate) -> Self {
        Self {
            recording_enabled: update.recording_enabled.unwrap_or(self.recording_enabled),
            transcript_enabled: update.transcript_enabled.unwrap_or(self.transcript_enabled),
            face_memory_enabled: update.face_memory_enabled.unwrap_or(self.face_memory_enabled),
        }
    }

    pub fn get(&self, key: ConsentKey) -> bool {
        match key {
            ConsentKey::Transcript => self.transcript_enabled,
            ConsentKey::Recording => self.recording_enabled,
            ConsentKey::FaceMemory => self.face_memory_enabled,
        }
    }
}

/// Partial consent settings, as carried by `UPDATE_CONSENT_SETTINGS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_memory_enabled: Option<bool>,
}

impl ConsentUpdate {
    /// An update touching exactly one key.
    pub fn single(key: ConsentKey, value: bool) -> Self {
        let mut update = Self::default();
        match key {
            ConsentKey::Transcript => update.transcript_enabled = Some(value),
            ConsentKey::Recording => update.recording_enabled = Some(value),
            ConsentKey::FaceMemory => update.face_memory_enabled = Some(value),
        }
        update
    }
}

/// Names one of the three consent flags. Ordered the way the consent forms
/// list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentKey {
    Transcript,
    Recording,
    FaceMemory,
}

impl ConsentKey {
    pub const ALL: [ConsentKey; 3] = [
        ConsentKey::Transcript,
        ConsentKey::Recording,
        ConsentKey::FaceMemory,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ConsentKey::Transcript => "Meeting Transcripts",
            ConsentKey::Recording => "Audio Recording",
            ConsentKey::FaceMemory => "Face Memory",
        }
    }
}

/// Root aggregate. Every dispatch produces a new value; nothing mutates a
/// state in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub people: Vec<Person>,
    pub meetings: Vec<Meeting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_meeting: Option<Meeting>,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub consent_settings: ConsentSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_keeps_unspecified_keys() {
        let base = ConsentSettings::default();
        let merged = base.merged(&ConsentUpdate {
            recording_enabled: Some(true),
            ..Default::default()
        });
        assert_eq!(
            merged,
            ConsentSettings {
                recording_enabled: true,
                transcript_enabled: true,
                face_memory_enabled: false,
            }
        );
    }

    #[test]
    fn empty_update_is_identity() {
        let base = ConsentSettings {
            recording_enabled: true,
            transcript_enabled: false,
            face_memory_enabled: true,
        };
        assert_eq!(base.merged(&ConsentUpdate::default()), base);
    }

    #[test]
    fn single_touches_one_key() {
        let update = ConsentUpdate::single(ConsentKey::FaceMemory, true);
        assert_eq!(update.face_memory_enabled, Some(true));
        assert_eq!(update.recording_enabled, None);
        assert_eq!(update.transcript_enabled, None);
    }

    #[test]
    fn person_serializes_camel_case_and_skips_absent() {
        let person = Person {
            id: "9".into(),
            name: "Ana Lee".into(),
            email: "ana@example.com".into(),
            company: None,
            role: None,
            tags: vec![],
            vibes: String::new(),
            last_meeting: None,
            meeting_count: 0,
            notes: vec![],
            photo: None,
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["meetingCount"], 0);
        assert!(json.get("company").is_none());
        assert!(json.get("lastMeeting").is_none());
    }
}
