//! Demo data the store starts with, plus the static fixtures the pre-meeting
//! brief shows (upcoming meeting, hooks, open loops).

use crate::store::model::{ActionItem, ConsentSettings, Meeting, Person, StoreState};
use chrono::{DateTime, TimeZone, Utc};

fn day(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn people() -> Vec<Person> {
    vec![
        Person {
            id: "1".into(),
            name: "Madison Chen".into(),
            email: "madison@genaimusic.com".into(),
            company: Some("GenAI Music".into()),
            role: Some("Founder".into()),
            tags: strings(&["AI", "Music", "Founder"]),
            vibes: "Passionate about AI-generated music, very technical, likes discussing latency optimization".into(),
            last_meeting: day(2024, 1, 15),
            meeting_count: 3,
            notes: strings(&[
                "Working on reducing AI music generation latency",
                "Interested in real-time audio processing",
                "Asked about our voice recognition tech",
            ]),
            photo: None,
        },
        Person {
            id: "2".into(),
            name: "Alex Rodriguez".into(),
            email: "alex@climatevc.com".into(),
            company: Some("Climate Ventures".into()),
            role: Some("Investment Associate".into()),
            tags: strings(&["VC", "Climate", "Investing"]),
            vibes: "Climate-focused investor, rock climbing enthusiast, very analytical about carbon markets".into(),
            last_meeting: day(2024, 1, 10),
            meeting_count: 2,
            notes: strings(&[
                "Loves rock climbing on weekends",
                "Looking for B2B climate solutions",
                "Mentioned interest in carbon capture tech",
            ]),
            photo: None,
        },
        Person {
            id: "3".into(),
            name: "Sarah Kim".into(),
            email: "sarah.kim@harvard.edu".into(),
            company: Some("Harvard CS".into()),
            role: Some("PhD Student".into()),
            tags: strings(&["Research", "NLP", "Academia"]),
            vibes: "NLP researcher focused on conversational AI, very detail-oriented, prefers deep technical discussions".into(),
            last_meeting: day(2024, 1, 8),
            meeting_count: 4,
            notes: strings(&[
                "Researching conversational AI ethics",
                "Working on bias detection in language models",
                "Interested in our consent mechanisms",
            ]),
            photo: None,
        },
    ]
}

pub fn meetings() -> Vec<Meeting> {
    let epoch = DateTime::<Utc>::UNIX_EPOCH;
    vec![
        Meeting {
            id: "1".into(),
            title: "Harvard CS Networking Mixer".into(),
            date: day(2024, 1, 15).unwrap_or(epoch),
            attendees: strings(&["1", "3"]),
            summary: "Discussed AI music generation and NLP research. Madison showed interest in collaboration.".into(),
            action_items: vec![ActionItem {
                id: "1".into(),
                text: "Send Madison our voice processing paper".into(),
                assigned_to: "me".into(),
                due_date: day(2024, 1, 17),
                completed: false,
            }],
            transcript: None,
            is_recorded: false,
        },
        Meeting {
            id: "2".into(),
            title: "Climate Tech Coffee Chat".into(),
            date: day(2024, 1, 10).unwrap_or(epoch),
            attendees: strings(&["2"]),
            summary: "Alex explained Climate Ventures investment thesis. Discussed potential B2B opportunities.".into(),
            action_items: vec![ActionItem {
                id: "2".into(),
                text: "Research carbon capture startups for Alex".into(),
                assigned_to: "me".into(),
                due_date: day(2024, 1, 15),
                completed: true,
            }],
            transcript: None,
            is_recorded: false,
        },
    ]
}

pub fn initial_state() -> StoreState {
    StoreState {
        people: people(),
        meetings: meetings(),
        current_meeting: None,
        search_query: String::new(),
        consent_settings: ConsentSettings::default(),
    }
}

/// The meeting the brief prepares for. Participants are names, not ids;
/// only some of them are known people.
#[derive(Debug, Clone)]
pub struct UpcomingMeeting {
    pub title: &'static str,
    pub time: &'static str,
    pub participants: &'static [&'static str],
    pub in_progress: bool,
}

pub const UPCOMING_MEETING: UpcomingMeeting = UpcomingMeeting {
    title: "Weekly WICS Leadership Meeting",
    time: "2:00 PM - 3:00 PM",
    participants: &["Sarah Kim", "Madison Chen", "3 others"],
    in_progress: false,
};

#[derive(Debug, Clone)]
pub struct ConversationHook {
    pub person: &'static str,
    pub hook: &'static str,
    pub context: &'static str,
}

pub const CONVERSATION_HOOKS: &[ConversationHook] = &[
    ConversationHook {
        person: "Madison Chen",
        hook: "Ask about AI music latency optimization progress",
        context: "Last mentioned working on reducing generation time",
    },
    ConversationHook {
        person: "Sarah Kim",
        hook: "Discuss potential collaboration on bias detection",
        context: "Her NLP research aligns with our ethics work",
    },
];

#[derive(Debug, Clone)]
pub struct OpenLoop {
    pub text: &'static str,
    pub due: &'static str,
    pub urgent: bool,
}

pub const OPEN_LOOPS: &[OpenLoop] = &[
    OpenLoop {
        text: "Send Madison the voice processing research paper",
        due: "Overdue by 2 days",
        urgent: true,
    },
    OpenLoop {
        text: "Share WICS event photos with Sarah",
        due: "Due today",
        urgent: false,
    },
];

pub const PREP_CHECKLIST: &[&str] = &[
    "Review participant context",
    "Prepare WICS updates to share",
    "Bring up collaboration opportunities",
    "Follow up on pending action items",
];

pub const SUGGESTED_OUTCOMES: &[(&str, &str)] = &[
    ("\u{1f91d}", "Set up Madison-Sarah collaboration on AI ethics"),
    ("\u{1f4c5}", "Schedule follow-up technical deep-dive"),
    ("\u{1f4e7}", "Exchange relevant research papers and resources"),
];

pub const SEARCH_EXAMPLES: &[&str] = &[
    "the VC into climate who likes climbing",
    "gen AI music person",
    "Harvard PhD studying bias",
    "founder working on latency",
    "researcher interested in ethics",
];
