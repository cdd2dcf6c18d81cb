use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::integration::StubTrigger;
use crate::app::state::*;
use crate::store::{query, seed, ConsentKey, ConsentUpdate, StoreAction};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Prompts and notices capture all input while visible
    if let Some(confirm) = state.confirm {
        handle_confirm_key(state, confirm, key);
        return vec![];
    }
    if state.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.notice = None;
        }
        return vec![];
    }

    match state.screen {
        Screen::Onboarding => handle_onboarding_key(state, key),
        Screen::Dashboard => handle_dashboard_key(state, key),
    }
}

fn handle_confirm_key(state: &mut AppState, confirm: Confirm, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            state.confirm = None;
            match confirm {
                Confirm::DeleteAllData => state.show_notice(Notice::info(
                    "Delete All Data",
                    "Data deletion not implemented in demo",
                )),
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.confirm = None;
        }
        _ => {}
    }
}

fn toggle_consent(state: &mut AppState, key: ConsentKey) {
    let current = state.store.state().consent_settings.get(key);
    state
        .store
        .dispatch(StoreAction::UpdateConsentSettings(ConsentUpdate::single(key, !current)));
}

fn handle_onboarding_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Enter | KeyCode::Right => {
            if state.onboarding.next_step() {
                tracing::info!("onboarding complete");
                state.screen = Screen::Dashboard;
            }
            vec![]
        }
        KeyCode::Left | KeyCode::Backspace => {
            state.onboarding.prev_step();
            vec![]
        }
        KeyCode::Up => {
            state.onboarding.move_up();
            vec![]
        }
        KeyCode::Down => {
            state.onboarding.move_down();
            vec![]
        }
        KeyCode::Char(' ') => {
            let cursor = state.onboarding.cursor;
            match state.onboarding.step {
                OnboardingStep::ConnectServices => {
                    if let Some(service) = ONBOARDING_SERVICES.get(cursor) {
                        state.show_stub(StubTrigger::Connect(*service));
                    }
                }
                OnboardingStep::ConsentSettings => match ConsentKey::ALL.get(cursor) {
                    Some(consent) => toggle_consent(state, *consent),
                    None => {
                        state.onboarding.show_consent_details = !state.onboarding.show_consent_details;
                    }
                },
                _ => {}
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab => {
            state.set_view(state.view.next());
            return vec![];
        }
        KeyCode::BackTab => {
            state.set_view(state.view.prev());
            return vec![];
        }
        _ => {}
    }

    let typing = state.view == View::Search && state.search.focus == SearchFocus::Input;
    if !typing {
        match key.code {
            KeyCode::Char('q') => return vec![Action::Quit],
            KeyCode::Char('z') => {
                state.zoom_panel = !state.zoom_panel;
                return vec![];
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                state.set_view(View::ALL[idx]);
                return vec![];
            }
            _ => {}
        }
    }

    match state.view {
        View::Brief => handle_brief_key(state, key),
        View::Search => match state.search.focus {
            SearchFocus::Input => handle_search_input_key(state, key),
            SearchFocus::Results => handle_search_results_key(state, key),
        },
        View::History => handle_history_key(state, key),
        View::Settings => handle_settings_key(state, key),
    }
}

fn handle_brief_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = state.brief.checked.len();
    match key.code {
        KeyCode::Up => {
            state.brief.cursor = state.brief.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.brief.cursor + 1 < total {
                state.brief.cursor += 1;
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(item) = state.brief.checked.get_mut(state.brief.cursor) {
                *item = !*item;
            }
        }
        KeyCode::Char('s') => state.show_stub(StubTrigger::StartMeeting),
        _ => {}
    }
    vec![]
}

/// Push the input text into the store and keep the result cursor in range.
fn sync_query(state: &mut AppState) {
    let text = state.search.input.text.clone();
    state.store.dispatch(StoreAction::SetSearchQuery(text));
    let len = state.search_result_ids().len();
    state.search.cursor = state.search.cursor.min(len.saturating_sub(1));
}

fn fill_next_example(state: &mut AppState) {
    let examples = seed::SEARCH_EXAMPLES;
    let example = examples[state.search.next_example % examples.len()];
    state.search.next_example = (state.search.next_example + 1) % examples.len();
    state.search.input.set_text(example);
    sync_query(state);
}

fn handle_search_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => {
            state.search.input.clear();
            sync_query(state);
        }
        KeyCode::Char('w') if ctrl => {
            state.search.input.delete_word_back();
            sync_query(state);
        }
        KeyCode::Char('e') if ctrl => fill_next_example(state),
        KeyCode::Char(c) if !ctrl => {
            state.search.input.insert_char(c);
            sync_query(state);
        }
        KeyCode::Backspace => {
            state.search.input.delete_back();
            sync_query(state);
        }
        KeyCode::Delete => {
            state.search.input.delete_forward();
            sync_query(state);
        }
        KeyCode::Left => state.search.input.move_left(),
        KeyCode::Right => state.search.input.move_right(),
        KeyCode::Home => state.search.input.move_home(),
        KeyCode::End => state.search.input.move_end(),
        KeyCode::Enter | KeyCode::Down | KeyCode::Esc => {
            state.search.focus = SearchFocus::Results;
        }
        _ => {}
    }
    vec![]
}

fn handle_search_results_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let results = state.search_result_ids();
    match key.code {
        KeyCode::Up => {
            state.search.cursor = state.search.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.search.cursor + 1 < results.len() {
                state.search.cursor += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(id) = results.get(state.search.cursor) {
                state.search.selected = Some(id.clone());
            }
        }
        KeyCode::Esc => {
            if state.search.selected.is_some() {
                state.search.selected = None;
            } else {
                state.search.focus = SearchFocus::Input;
            }
        }
        KeyCode::Char('/') | KeyCode::Char('i') => {
            state.search.focus = SearchFocus::Input;
        }
        KeyCode::Char('e') => fill_next_example(state),
        KeyCode::Char('x') => {
            state.search.input.clear();
            sync_query(state);
        }
        KeyCode::Char('m') => {
            let email = state.search.selected.as_deref().and_then(|id| {
                query::find_person(&state.store.state().people, id).map(|p| p.email.clone())
            });
            if let Some(email) = email {
                state.show_stub(StubTrigger::EmailPerson { email });
            }
        }
        KeyCode::Char('c') => {
            if state.search.selected.is_some() {
                state.show_stub(StubTrigger::ScheduleMeeting);
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_history_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = state.store.state().meetings.len();
    match key.code {
        KeyCode::Up => {
            state.history.cursor = state.history.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.history.cursor + 1 < total {
                state.history.cursor += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(meeting) = state.store.state().meetings.get(state.history.cursor).cloned() {
                state.history.selected = Some(meeting.id.clone());
                state.history.show_wrap = true;
                state.store.dispatch(StoreAction::SetCurrentMeeting(meeting));
            }
        }
        KeyCode::Esc => {
            state.history.show_wrap = false;
        }
        KeyCode::Char('f') => {
            let store = state.store.state();
            if let Some(meeting) = store.meetings.get(state.history.cursor) {
                let email = query::follow_up_email(&store.people, meeting, &state.config.ui.user_name);
                state.show_stub(StubTrigger::FollowUp { email });
            }
        }
        KeyCode::Char('t') => {
            if state.history.show_wrap {
                state.show_notice(Notice::info(
                    "Action Items",
                    "Action item update not implemented in demo",
                ));
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.settings.cursor = state.settings.cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if state.settings.cursor + 1 < SettingsState::row_count() {
                state.settings.cursor += 1;
            }
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate_settings_row(state),
        _ => vec![],
    }
}

fn activate_settings_row(state: &mut AppState) -> Vec<Action> {
    match state.settings.current_row() {
        SettingsRow::Consent(key) => toggle_consent(state, key),
        SettingsRow::Integration(integration) => {
            if integration.is_available() {
                state.show_stub(StubTrigger::Configure(integration));
            }
        }
        SettingsRow::Retention => {
            state.settings.retention = state.settings.retention.next();
        }
        SettingsRow::Export => return vec![Action::ExportData],
        SettingsRow::DeleteAll => {
            state.confirm = Some(Confirm::DeleteAllData);
        }
        SettingsRow::Notification(i) => {
            if let Some(flag) = state.settings.notifications.get_mut(i) {
                *flag = !*flag;
            }
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::Store;
    use pretty_assertions::assert_eq;

    fn dashboard() -> AppState {
        let mut cfg = AppConfig::default();
        cfg.ui.skip_onboarding = true;
        AppState::new(cfg, Store::seeded())
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn press_ctrl(state: &mut AppState, c: char) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut state = AppState::new(AppConfig::default(), Store::seeded());
        assert_eq!(press_ctrl(&mut state, 'c'), vec![Action::Quit]);
    }

    #[test]
    fn onboarding_consent_reaches_store() {
        let mut state = AppState::new(AppConfig::default(), Store::seeded());
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.onboarding.step, OnboardingStep::ConsentSettings);

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.store.state().consent_settings.recording_enabled);

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.onboarding.show_consent_details);

        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.store.state().consent_settings.recording_enabled);
    }

    #[test]
    fn onboarding_connect_shows_stub() {
        let mut state = AppState::new(AppConfig::default(), Store::seeded());
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        let notice = state.notice.clone().unwrap();
        assert_eq!(notice.body, "Calendar integration not implemented yet - using demo data");

        // Notice swallows navigation until dismissed.
        press(&mut state, KeyCode::Right);
        assert!(state.notice.is_some());
        assert_eq!(state.onboarding.step, OnboardingStep::ConnectServices);
        press(&mut state, KeyCode::Esc);
        assert!(state.notice.is_none());
    }

    #[test]
    fn typing_in_search_updates_store_query() {
        let mut state = dashboard();
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.view, View::Search);

        type_text(&mut state, "climb");
        assert_eq!(state.store.state().search_query, "climb");
        assert_eq!(state.search_result_ids(), vec!["2".to_string()]);

        // 'q' is text while typing, not quit
        assert!(press(&mut state, KeyCode::Char('q')).is_empty());
        assert_eq!(state.store.state().search_query, "climbq");

        press_ctrl(&mut state, 'u');
        assert_eq!(state.store.state().search_query, "");
        assert_eq!(state.search_result_ids().len(), 3);
    }

    #[test]
    fn search_detail_and_email_stub() {
        let mut state = dashboard();
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.search.focus, SearchFocus::Results);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.search.selected.as_deref(), Some("2"));

        press(&mut state, KeyCode::Char('m'));
        let notice = state.notice.take().unwrap();
        assert!(notice.body.ends_with("alex@climatevc.com"));

        press(&mut state, KeyCode::Esc);
        assert!(state.search.selected.is_none());
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.search.focus, SearchFocus::Input);
    }

    #[test]
    fn example_chip_fills_query() {
        let mut state = dashboard();
        press(&mut state, KeyCode::Char('2'));
        press_ctrl(&mut state, 'e');
        assert_eq!(state.store.state().search_query, seed::SEARCH_EXAMPLES[0]);
        // Natural-language examples are literal substrings and usually miss.
        assert!(state.search_result_ids().is_empty());
    }

    #[test]
    fn history_wrap_sets_current_meeting() {
        let mut state = dashboard();
        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert!(state.history.show_wrap);
        assert_eq!(state.history.selected.as_deref(), Some("2"));
        assert_eq!(
            state.store.state().current_meeting.as_ref().map(|m| m.title.as_str()),
            Some("Climate Tech Coffee Chat")
        );
        press(&mut state, KeyCode::Esc);
        assert!(!state.history.show_wrap);
    }

    #[test]
    fn history_follow_up_generates_email() {
        let mut state = dashboard();
        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Char('f'));
        let notice = state.notice.unwrap();
        assert!(notice.body.contains("Subject: Follow-up from Harvard CS Networking Mixer"));
        assert!(notice.body.ends_with("Best,\nMary"));
    }

    #[test]
    fn settings_rows_activate() {
        let mut state = dashboard();
        press(&mut state, KeyCode::Char('4'));

        press(&mut state, KeyCode::Enter);
        assert!(!state.store.state().consent_settings.transcript_enabled);

        for _ in 0..7 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.settings.current_row(), SettingsRow::Export);
        assert_eq!(press(&mut state, KeyCode::Enter), vec![Action::ExportData]);

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.confirm, Some(Confirm::DeleteAllData));
        press(&mut state, KeyCode::Char('y'));
        assert!(state.confirm.is_none());
        assert_eq!(
            state.notice.as_ref().map(|n| n.body.as_str()),
            Some("Data deletion not implemented in demo")
        );
        // Nothing was actually deleted.
        assert_eq!(state.store.state().people.len(), 3);
    }

    #[test]
    fn declined_delete_shows_nothing() {
        let mut state = dashboard();
        state.view = View::Settings;
        state.settings.cursor = 8;
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Esc);
        assert!(state.confirm.is_none());
        assert!(state.notice.is_none());
    }

    #[test]
    fn email_integration_cannot_be_configured() {
        use crate::app::integration::Integration;

        let mut state = dashboard();
        state.view = View::Settings;
        state.settings.cursor = 3;
        assert_eq!(state.settings.current_row(), SettingsRow::Integration(Integration::Zoom));
        press(&mut state, KeyCode::Enter);
        assert!(state.notice.take().is_some());

        state.settings.cursor = 5;
        assert_eq!(state.settings.current_row(), SettingsRow::Integration(Integration::Email));
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn zoom_panel_toggles_outside_text_entry() {
        let mut state = dashboard();
        press(&mut state, KeyCode::Char('z'));
        assert!(state.zoom_panel);
        press(&mut state, KeyCode::Char('z'));
        assert!(!state.zoom_panel);
    }

    #[test]
    fn brief_checklist_and_start_meeting() {
        let mut state = dashboard();
        assert_eq!(state.brief.checked, vec![true, false, false, false]);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.brief.checked, vec![true, true, false, false]);
        press(&mut state, KeyCode::Char('s'));
        assert!(state.notice.unwrap().body.starts_with("Zoom integration not implemented"));
    }

    #[test]
    fn tab_cycles_views_even_while_typing() {
        let mut state = dashboard();
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.view, View::History);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.view, View::Search);
    }
}
