//! Read-side selectors over store data. None of these touch the store; views
//! call them with borrowed slices.

use crate::store::model::{Meeting, Person};
use chrono::{DateTime, Utc};

/// Label used for attendee ids that match no person.
pub const UNKNOWN_PERSON: &str = "Unknown";

/// Case-insensitive substring filter over name, company, role, vibes, tags
/// and notes. A blank query returns everyone in the original order.
pub fn search_people<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    if query.trim().is_empty() {
        return people.iter().collect();
    }
    let needle = query.to_lowercase();
    people
        .iter()
        .filter(|p| person_matches(p, &needle))
        .collect()
}

fn person_matches(person: &Person, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(person.name.as_str())
        || person.company.as_deref().is_some_and(hit)
        || person.role.as_deref().is_some_and(hit)
        || hit(person.vibes.as_str())
        || person.tags.iter().any(|t| hit(t.as_str()))
        || person.notes.iter().any(|n| hit(n.as_str()))
}

pub fn find_person<'a>(people: &'a [Person], id: &str) -> Option<&'a Person> {
    people.iter().find(|p| p.id == id)
}

pub fn person_by_name<'a>(people: &'a [Person], name: &str) -> Option<&'a Person> {
    people.iter().find(|p| p.name == name)
}

pub fn person_name<'a>(people: &'a [Person], id: &str) -> &'a str {
    find_person(people, id)
        .map(|p| p.name.as_str())
        .unwrap_or(UNKNOWN_PERSON)
}

pub fn attendee_names(people: &[Person], meeting: &Meeting) -> String {
    meeting
        .attendees
        .iter()
        .map(|id| person_name(people, id))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn meetings_with<'a>(meetings: &'a [Meeting], person_id: &str) -> Vec<&'a Meeting> {
    meetings
        .iter()
        .filter(|m| m.attendees.iter().any(|a| a == person_id))
        .collect()
}

/// "Madison Chen" -> "MC".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect()
}

/// Whole days between `date` and `now`, rounded down.
pub fn days_since(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - date).num_seconds().div_euclid(86_400)
}

/// "company • role", with absent parts left empty.
pub fn affiliation(person: &Person) -> String {
    format!(
        "{} \u{2022} {}",
        person.company.as_deref().unwrap_or_default(),
        person.role.as_deref().unwrap_or_default()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingStats {
    pub meetings: usize,
    pub action_items: usize,
    pub completed: usize,
}

impl MeetingStats {
    pub fn collect(meetings: &[Meeting]) -> Self {
        Self {
            meetings: meetings.len(),
            action_items: meetings.iter().map(|m| m.action_items.len()).sum(),
            completed: meetings.iter().map(Meeting::completed_count).sum(),
        }
    }

    /// Rounded percentage of completed items; `None` when there are no items.
    pub fn completion_rate(&self) -> Option<u32> {
        if self.action_items == 0 {
            return None;
        }
        Some((self.completed as f64 / self.action_items as f64 * 100.0).round() as u32)
    }
}

/// Plain-text follow-up email for a meeting, signed by `sender`.
pub fn follow_up_email(people: &[Person], meeting: &Meeting, sender: &str) -> String {
    let items = meeting
        .action_items
        .iter()
        .map(|item| format!("\u{2022} {}", item.text))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Subject: Follow-up from {title}\n\n\
         Hi {names},\n\n\
         Thanks for the great discussion today! Here are the key points and action items:\n\n\
         {summary}\n\n\
         Action items:\n\
         {items}\n\n\
         Looking forward to our continued collaboration!\n\n\
         Best,\n\
         {sender}",
        title = meeting.title,
        names = attendee_names(people, meeting),
        summary = meeting.summary,
        items = items,
        sender = sender,
    )
}
