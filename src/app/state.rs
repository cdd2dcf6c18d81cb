use crate::app::integration::{Integration, StubTrigger};
use crate::config::{AppConfig, DEFAULT_DATE_FORMAT};
use crate::export::ExportError;
use crate::store::{query, seed, ConsentKey, Store};
use std::fmt::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Brief,
    Search,
    History,
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [View::Brief, View::Search, View::History, View::Settings];

    pub fn title(self) -> &'static str {
        match self {
            View::Brief => "Meeting Brief",
            View::Search => "People Search",
            View::History => "Meeting History",
            View::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Brief => "\u{1f4cb}",
            View::Search => "\u{1f50d}",
            View::History => "\u{1f4c5}",
            View::Settings => "\u{2699}",
        }
    }

    fn index(self) -> usize {
        View::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        let len = View::ALL.len();
        View::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    ConnectServices,
    ConsentSettings,
    Complete,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::Welcome,
        OnboardingStep::ConnectServices,
        OnboardingStep::ConsentSettings,
        OnboardingStep::Complete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome",
            OnboardingStep::ConnectServices => "Connect Services",
            OnboardingStep::ConsentSettings => "Consent Settings",
            OnboardingStep::Complete => "Complete",
        }
    }

    pub fn index(self) -> usize {
        OnboardingStep::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn is_last(self) -> bool {
        self.index() + 1 == OnboardingStep::ALL.len()
    }

    /// Number of focusable items on the step.
    pub fn item_count(self) -> usize {
        match self {
            OnboardingStep::ConnectServices => ONBOARDING_SERVICES.len(),
            // three consent toggles plus the privacy promise toggle
            OnboardingStep::ConsentSettings => ConsentKey::ALL.len() + 1,
            _ => 0,
        }
    }
}

/// Services offered on the onboarding connect step.
pub const ONBOARDING_SERVICES: [Integration; 2] = [Integration::Zoom, Integration::Calendar];

#[derive(Debug)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    pub cursor: usize,
    pub show_consent_details: bool,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            cursor: 0,
            show_consent_details: false,
        }
    }

    /// Advance one step. Returns `true` when the flow is finished.
    pub fn next_step(&mut self) -> bool {
        if self.step.is_last() {
            return true;
        }
        self.step = OnboardingStep::ALL[self.step.index() + 1];
        self.cursor = 0;
        false
    }

    pub fn prev_step(&mut self) {
        if let Some(i) = self.step.index().checked_sub(1) {
            self.step = OnboardingStep::ALL[i];
            self.cursor = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.step.item_count() {
            self.cursor += 1;
        }
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-line text entry with a byte-offset cursor on char boundaries.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug)]
pub struct BriefState {
    pub cursor: usize,
    pub checked: Vec<bool>,
}

impl BriefState {
    pub fn new() -> Self {
        let mut checked = vec![false; seed::PREP_CHECKLIST.len()];
        // "Review participant context" starts ticked.
        if let Some(first) = checked.first_mut() {
            *first = true;
        }
        Self { cursor: 0, checked }
    }
}

impl Default for BriefState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Input,
    Results,
}

#[derive(Debug)]
pub struct SearchState {
    pub input: InputState,
    pub focus: SearchFocus,
    /// Index into the current result list.
    pub cursor: usize,
    /// Person whose detail panel is open.
    pub selected: Option<String>,
    pub next_example: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            focus: SearchFocus::Input,
            cursor: 0,
            selected: None,
            next_example: 0,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct HistoryState {
    pub cursor: usize,
    /// Meeting whose wrap-up panel is open.
    pub selected: Option<String>,
    pub show_wrap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    ThreeMonths,
    SixMonths,
    TwelveMonths,
    TwentyFourMonths,
    Forever,
}

impl Retention {
    pub fn label(self) -> &'static str {
        match self {
            Retention::ThreeMonths => "3 months",
            Retention::SixMonths => "6 months",
            Retention::TwelveMonths => "12 months (recommended)",
            Retention::TwentyFourMonths => "24 months",
            Retention::Forever => "Keep forever",
        }
    }

    pub fn next(self) -> Retention {
        match self {
            Retention::ThreeMonths => Retention::SixMonths,
            Retention::SixMonths => Retention::TwelveMonths,
            Retention::TwelveMonths => Retention::TwentyFourMonths,
            Retention::TwentyFourMonths => Retention::Forever,
            Retention::Forever => Retention::ThreeMonths,
        }
    }
}

pub const NOTIFICATION_LABELS: [&str; 4] = [
    "Pre-meeting briefs (5 minutes before)",
    "Action item reminders",
    "Weekly relationship insights",
    "Email summaries",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Consent(ConsentKey),
    Integration(Integration),
    Retention,
    Export,
    DeleteAll,
    Notification(usize),
}

pub const SETTINGS_ROWS: [SettingsRow; 13] = [
    SettingsRow::Consent(ConsentKey::Transcript),
    SettingsRow::Consent(ConsentKey::Recording),
    SettingsRow::Consent(ConsentKey::FaceMemory),
    SettingsRow::Integration(Integration::Zoom),
    SettingsRow::Integration(Integration::Calendar),
    SettingsRow::Integration(Integration::Email),
    SettingsRow::Retention,
    SettingsRow::Export,
    SettingsRow::DeleteAll,
    SettingsRow::Notification(0),
    SettingsRow::Notification(1),
    SettingsRow::Notification(2),
    SettingsRow::Notification(3),
];

#[derive(Debug)]
pub struct SettingsState {
    pub cursor: usize,
    pub retention: Retention,
    pub notifications: [bool; 4],
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            retention: Retention::TwelveMonths,
            notifications: [true, true, true, false],
        }
    }

    pub fn row_count() -> usize {
        SETTINGS_ROWS.len()
    }

    pub fn current_row(&self) -> SettingsRow {
        SETTINGS_ROWS[self.cursor.min(SETTINGS_ROWS.len() - 1)]
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal message box; stands in for a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Yes/no prompt awaiting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    DeleteAllData,
}

impl Confirm {
    pub fn question(self) -> &'static str {
        match self {
            Confirm::DeleteAllData => "Are you sure? This cannot be undone.",
        }
    }
}

const STATUS_TTL: Duration = Duration::from_secs(4);

pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub screen: Screen,
    pub onboarding: OnboardingState,
    pub view: View,
    pub brief: BriefState,
    pub search: SearchState,
    pub history: HistoryState,
    pub settings: SettingsState,
    pub zoom_panel: bool,
    pub notice: Option<Notice>,
    pub confirm: Option<Confirm>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Store) -> Self {
        let screen = if config.ui.skip_onboarding {
            Screen::Dashboard
        } else {
            Screen::Onboarding
        };
        Self {
            config,
            store,
            screen,
            onboarding: OnboardingState::new(),
            view: View::Brief,
            brief: BriefState::new(),
            search: SearchState::new(),
            history: HistoryState::default(),
            settings: SettingsState::new(),
            zoom_panel: false,
            notice: None,
            confirm: None,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            tracing::debug!(view = view.title(), "switch view");
        }
        self.view = view;
        self.dirty = true;
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    pub fn show_stub(&mut self, trigger: StubTrigger) {
        tracing::info!(integration = trigger.integration().name(), "placeholder integration");
        self.show_notice(Notice::info(trigger.integration().name(), trigger.message()));
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some((text.into(), Instant::now()));
        self.dirty = true;
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some((_, since)) = &self.status_message {
            if now.duration_since(*since) >= STATUS_TTL {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }

    /// Report the outcome of an export to the user.
    pub fn finish_export(&mut self, result: Result<PathBuf, ExportError>) {
        match result {
            Ok(path) => {
                self.set_status(format!("Exported to {}", path.display()));
                self.show_notice(Notice::info(
                    "Export Data",
                    format!("Exported all data to {}", path.display()),
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.show_notice(Notice::error("Export Failed", e.to_string()));
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some((ref msg, _)) = self.status_message {
            return msg.clone();
        }
        let state = self.store.state();
        let mut s = format!("People: {} | Meetings: {}", state.people.len(), state.meetings.len());
        if !state.search_query.is_empty() {
            s.push_str(&format!(" | Query: \"{}\"", state.search_query));
        }
        s
    }

    /// Ids of the people matching the store's current query, in order.
    pub fn search_result_ids(&self) -> Vec<String> {
        let state = self.store.state();
        query::search_people(&state.people, &state.search_query)
            .into_iter()
            .map(|p| p.id.clone())
            .collect()
    }

    /// Formats with `ui.date_format`, or the default format when it has a bad specifier.
    pub fn format_date(&self, date: &chrono::DateTime<chrono::Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.config.ui.date_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_walks_forward_and_back() {
        let mut ob = OnboardingState::new();
        ob.prev_step();
        assert_eq!(ob.step, OnboardingStep::Welcome);
        assert!(!ob.next_step());
        assert!(!ob.next_step());
        assert_eq!(ob.step, OnboardingStep::ConsentSettings);
        ob.prev_step();
        assert_eq!(ob.step, OnboardingStep::ConnectServices);
        assert!(!ob.next_step());
        assert!(!ob.next_step());
        assert_eq!(ob.step, OnboardingStep::Complete);
        assert!(ob.next_step());
        assert_eq!(ob.step, OnboardingStep::Complete);
    }

    #[test]
    fn onboarding_cursor_is_bounded_by_step() {
        let mut ob = OnboardingState::new();
        ob.move_down();
        assert_eq!(ob.cursor, 0);
        ob.next_step();
        ob.move_down();
        ob.move_down();
        ob.move_down();
        assert_eq!(ob.cursor, 1);
    }

    #[test]
    fn views_cycle() {
        assert_eq!(View::Settings.next(), View::Brief);
        assert_eq!(View::Brief.prev(), View::Settings);
        assert_eq!(View::Search.next(), View::History);
    }

    #[test]
    fn input_editing_respects_char_boundaries() {
        let mut input = InputState::new();
        for c in "café ok".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "café ");
        input.delete_back();
        input.delete_back();
        assert_eq!(input.text, "caf");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "af");
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text, "axf");
    }

    #[test]
    fn settings_rows_cover_last_notification() {
        let mut settings = SettingsState::new();
        settings.cursor = SettingsState::row_count() - 1;
        assert_eq!(settings.current_row(), SettingsRow::Notification(3));
        settings.cursor = 0;
        assert_eq!(settings.current_row(), SettingsRow::Consent(ConsentKey::Transcript));
    }

    #[test]
    fn retention_cycles_back() {
        let mut r = Retention::Forever;
        r = r.next();
        assert_eq!(r, Retention::ThreeMonths);
        assert_eq!(Retention::TwelveMonths.label(), "12 months (recommended)");
    }

    #[test]
    fn bad_date_format_uses_default() {
        let date = chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2024, 1, 15, 9, 30, 0).unwrap();
        let mut cfg = AppConfig::default();
        cfg.ui.date_format = "%Y-%m-%d".into();
        let app = AppState::new(cfg.clone(), Store::seeded());
        assert_eq!(app.format_date(&date), "2024-01-15");

        cfg.ui.date_format = "%Q".into();
        let app = AppState::new(cfg, Store::seeded());
        assert_eq!(app.format_date(&date), "1/15/2024");
    }

    #[test]
    fn status_expires() {
        let mut app = AppState::new(AppConfig::default(), Store::seeded());
        app.set_status("Exported");
        assert_eq!(app.status_line(), "Exported");
        app.expire_status(Instant::now() + STATUS_TTL);
        assert_eq!(app.status_line(), "People: 3 | Meetings: 2");
    }

    #[test]
    fn export_outcome_becomes_notice() {
        let mut app = AppState::new(AppConfig::default(), Store::seeded());
        app.finish_export(Ok(PathBuf::from("out/perfect-context-data.json")));
        let notice = app.notice.take().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.body.ends_with("perfect-context-data.json"));
        assert!(app.status_line().starts_with("Exported to "));

        let err = ExportError::Io {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        app.finish_export(Err(err));
        assert_eq!(app.notice.unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn skip_onboarding_starts_on_dashboard() {
        let mut cfg = AppConfig::default();
        cfg.ui.skip_onboarding = true;
        let app = AppState::new(cfg, Store::seeded());
        assert_eq!(app.screen, Screen::Dashboard);
    }
}
