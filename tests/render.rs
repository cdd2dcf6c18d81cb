use perfect_context::app::state::{AppState, Notice, View};
use perfect_context::config::AppConfig;
use perfect_context::store::{Store, StoreAction};
use perfect_context::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app(skip_onboarding: bool) -> AppState {
    let mut cfg = AppConfig::default();
    cfg.ui.skip_onboarding = skip_onboarding;
    AppState::new(cfg, Store::seeded())
}

/// Render one frame and return the screen as newline-separated rows.
fn draw(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| ui::render(f, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn onboarding_welcome_screen() {
    let screen = draw(&app(false));
    assert!(screen.contains("Welcome to Perfect Context"));
    assert!(screen.contains("Remember Everyone"));
    assert!(screen.contains("Continue"));
}

#[test]
fn dashboard_header_and_status() {
    let screen = draw(&app(true));
    assert!(screen.contains("Perfect Context"));
    assert!(screen.contains("Hi Mary!"));
    assert!(screen.contains("Transcript On"));
    assert!(screen.contains("People: 3 | Meetings: 2"));
    assert!(screen.contains("Weekly WICS Leadership Meeting"));
}

#[test]
fn search_view_reports_matches() {
    let mut state = app(true);
    state.set_view(View::Search);
    assert!(draw(&state).contains("All People (3)"));

    state
        .store
        .dispatch(StoreAction::SetSearchQuery("climbing".into()));
    let screen = draw(&state);
    assert!(screen.contains("Found 1 person"));
    assert!(screen.contains("Alex Rodriguez"));
    assert!(!screen.contains("Sarah Kim"));

    state
        .store
        .dispatch(StoreAction::SetSearchQuery("zzz-nomatch".into()));
    let screen = draw(&state);
    assert!(screen.contains("Found 0 people"));
    assert!(screen.contains("No matches found"));
}

#[test]
fn history_wrap_up_panel() {
    let mut state = app(true);
    state.set_view(View::History);
    let meeting = state.store.state().meetings[0].clone();
    state.store.dispatch(StoreAction::SetCurrentMeeting(meeting));
    state.history.show_wrap = true;

    let screen = draw(&state);
    assert!(screen.contains("Post-Meeting Wrap-up"));
    assert!(screen.contains("1 hour (estimated)"));
    assert!(screen.contains("Completion Rate"));
    assert!(screen.contains("50%"));
}

#[test]
fn settings_lists_consent_toggles() {
    let mut state = app(true);
    state.set_view(View::Settings);
    let screen = draw(&state);
    assert!(screen.contains("Meeting Transcripts"));
    assert!(screen.contains("Requires Consent"));
}

#[test]
fn notice_is_drawn_on_top() {
    let mut state = app(true);
    state.show_notice(Notice::info(
        "Zoom",
        "Zoom integration not implemented yet - using demo data",
    ));
    let screen = draw(&state);
    assert!(screen.contains("Zoom integration not implemented yet - using demo data"));
}

#[test]
fn history_survives_bad_date_format() {
    let mut cfg = AppConfig::default();
    cfg.ui.skip_onboarding = true;
    cfg.ui.date_format = "%Q".into();
    let mut state = AppState::new(cfg, Store::seeded());
    state.set_view(View::History);
    let screen = draw(&state);
    assert!(screen.contains("Harvard CS Networking Mixer"));
    assert!(screen.contains("1/15/2024"));
}

#[test]
fn email_integration_is_coming_soon() {
    let mut state = app(true);
    state.set_view(View::Settings);
    let screen = draw(&state);
    let email_row = screen
        .lines()
        .find(|row| row.contains("Email") && row.contains("["))
        .unwrap();
    assert!(email_row.contains("[Coming Soon]"));
    assert!(screen.contains("[Demo Mode]"));
}
