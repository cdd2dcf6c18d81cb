use crate::store::action::StoreAction;
use crate::store::model::StoreState;

/// Derive the next state from `state` and `action`.
///
/// Total: there is no failure path. The input is never modified; the result
/// is a fresh value even when nothing changed.
pub fn apply(state: &StoreState, action: &StoreAction) -> StoreState {
    match action {
        StoreAction::SetSearchQuery(query) => StoreState {
            search_query: query.clone(),
            ..state.clone()
        },
        StoreAction::AddPerson(person) => {
            let mut people = state.people.clone();
            people.push(person.clone());
            StoreState {
                people,
                ..state.clone()
            }
        }
        StoreAction::UpdatePerson(person) => StoreState {
            people: state
                .people
                .iter()
                .map(|p| if p.id == person.id { person.clone() } else { p.clone() })
                .collect(),
            ..state.clone()
        },
        StoreAction::AddMeeting(meeting) => {
            let mut meetings = state.meetings.clone();
            meetings.push(meeting.clone());
            StoreState {
                meetings,
                ..state.clone()
            }
        }
        StoreAction::SetCurrentMeeting(meeting) => StoreState {
            current_meeting: Some(meeting.clone()),
            ..state.clone()
        },
        StoreAction::UpdateConsentSettings(update) => StoreState {
            consent_settings: state.consent_settings.merged(update),
            ..state.clone()
        },
        StoreAction::Unknown => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::{ConsentSettings, ConsentUpdate, Meeting, Person};
    use crate::store::seed;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", id),
            company: None,
            role: None,
            tags: vec![],
            vibes: String::new(),
            last_meeting: None,
            meeting_count: 0,
            notes: vec![],
            photo: None,
        }
    }

    #[test]
    fn unknown_is_identity() {
        let state = seed::initial_state();
        assert_eq!(apply(&state, &StoreAction::Unknown), state);
    }

    #[test]
    fn add_then_update_replaces_in_place() {
        let state = seed::initial_state();
        let before = state.people.len();
        let added = apply(&state, &StoreAction::AddPerson(person("42", "Jo Park")));

        let mut renamed = person("42", "Jo Park-Lee");
        renamed.meeting_count = 1;
        let updated = apply(&added, &StoreAction::UpdatePerson(renamed.clone()));

        assert_eq!(updated.people.len(), before + 1);
        assert_eq!(updated.people.last(), Some(&renamed));
        assert_eq!(updated.people[..before], state.people[..]);
    }

    #[test]
    fn update_without_match_is_noop() {
        let state = seed::initial_state();
        let next = apply(&state, &StoreAction::UpdatePerson(person("nope", "Nobody")));
        assert_eq!(next, state);
    }

    #[test]
    fn add_person_does_not_check_ids() {
        let state = seed::initial_state();
        let next = apply(&state, &StoreAction::AddPerson(person("1", "Duplicate")));
        assert_eq!(next.people.iter().filter(|p| p.id == "1").count(), 2);
    }

    #[test]
    fn add_meeting_accepts_dangling_attendees() {
        let state = seed::initial_state();
        let meeting = Meeting {
            id: "3".into(),
            title: "Ghost sync".into(),
            date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            attendees: vec!["404".into()],
            summary: String::new(),
            action_items: vec![],
            transcript: None,
            is_recorded: false,
        };
        let next = apply(&state, &StoreAction::AddMeeting(meeting.clone()));
        assert_eq!(next.meetings.len(), 3);
        assert_eq!(next.meetings[2], meeting);
    }

    #[test]
    fn set_current_meeting_is_not_linked() {
        let state = seed::initial_state();
        let mut meeting = state.meetings[0].clone();
        meeting.title = "Edited copy".into();
        let next = apply(&state, &StoreAction::SetCurrentMeeting(meeting.clone()));
        assert_eq!(next.current_meeting, Some(meeting));
        assert_eq!(next.meetings, state.meetings);
    }

    #[test]
    fn consent_merge_is_idempotent() {
        let state = seed::initial_state();
        let action = StoreAction::UpdateConsentSettings(ConsentUpdate {
            transcript_enabled: Some(false),
            face_memory_enabled: Some(true),
            ..Default::default()
        });
        let once = apply(&state, &action);
        let twice = apply(&once, &action);
        assert_eq!(once, twice);
        assert_eq!(
            once.consent_settings,
            ConsentSettings {
                recording_enabled: false,
                transcript_enabled: false,
                face_memory_enabled: true,
            }
        );
    }

    #[test]
    fn search_query_is_stored_verbatim() {
        let state = seed::initial_state();
        let next = apply(&state, &StoreAction::SetSearchQuery("  Climbing ".into()));
        assert_eq!(next.search_query, "  Climbing ");
        assert_eq!(next.people, state.people);
    }
}
