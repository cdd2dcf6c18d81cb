use crate::app::state::{AppState, SearchFocus, View};
use crate::store::{query, seed, Person};
use crate::ui::layout;
use crate::ui::theme::Theme;
use chrono::Utc;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const SEARCH_TIPS: [&str; 4] = [
    "Use natural language: \"the person who...\"",
    "Try company names, roles, or interests",
    "Search by personality traits or \"vibes\"",
    "Use tags like \"AI\", \"founder\", \"research\"",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(2), // Examples
            Constraint::Min(5),    // Results
        ])
        .split(area);

    render_input(frame, chunks[0], state);
    render_examples(frame, chunks[1]);

    let store = state.store.state();
    let selected = state
        .search
        .selected
        .as_deref()
        .and_then(|id| query::find_person(&store.people, id));
    let (list_area, detail_area) = layout::split_detail(chunks[2], selected.is_some());
    render_results(frame, list_area, state);
    if let (Some(person), Some(rect)) = (selected, detail_area) {
        render_detail(frame, rect, state, person);
    }
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.search.focus == SearchFocus::Input;
    let block = super::panel(View::Search.title(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = &state.search.input;
    let line = if input.text.is_empty() {
        Line::from(vec![
            Span::styled("\u{1f50d} ", Theme::muted()),
            Span::styled(
                "Try: 'the VC into climate who likes climbing' or 'gen AI music person'",
                Theme::muted(),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("\u{1f50d} ", Theme::muted()),
            Span::styled(input.text.clone(), Theme::text()),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && state.notice.is_none() && state.confirm.is_none() {
        // Emoji prefix is two columns plus a space.
        let offset = input.text[..input.cursor].width() as u16 + 3;
        let x = (inner.x + offset).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_examples(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(" Try these examples: ", Theme::muted())];
    for example in seed::SEARCH_EXAMPLES {
        spans.push(Span::styled(format!(" {} ", example), Theme::tag()));
        spans.push(Span::raw(" "));
    }
    let help = super::key_help(&[("Ctrl+E", "Next example"), ("Ctrl+U", "Clear")]);
    frame.render_widget(
        Paragraph::new(vec![Line::from(spans), help]),
        area,
    );
}

fn results_title(query_text: &str, count: usize, total: usize) -> String {
    if query_text.is_empty() {
        format!("All People ({})", total)
    } else {
        let noun = if count == 1 { "person" } else { "people" };
        format!("Found {} {}", count, noun)
    }
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let store = state.store.state();
    let results = query::search_people(&store.people, &store.search_query);
    let focused = state.search.focus == SearchFocus::Results;

    let mut block = super::panel(
        results_title(&store.search_query, results.len(), store.people.len()),
        focused,
    );
    if !store.search_query.is_empty() {
        let badge = if results.is_empty() {
            Span::styled(" \u{26a0} No matches ", Theme::urgent())
        } else {
            Span::styled(" \u{2713} High confidence ", Theme::success())
        };
        block = block.title(Line::from(badge).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if results.is_empty() {
        render_no_results(frame, inner, store.search_query.is_empty());
        return;
    }

    let width = inner.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = results
        .iter()
        .map(|person| person_card(state, person, width))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Theme::BG_SURFACE))
        .highlight_symbol("\u{258c} ");
    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.search.cursor.min(results.len() - 1)));
    }
    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn person_card(state: &AppState, person: &Person, width: usize) -> ListItem<'static> {
    let is_open = state.search.selected.as_deref() == Some(person.id.as_str());
    let name_style = if is_open {
        Theme::heading()
    } else {
        Theme::title()
    };
    let last = person
        .last_meeting
        .as_ref()
        .map(|d| state.format_date(d))
        .unwrap_or_else(|| "Never".to_string());

    let mut tags: Vec<Span> = Vec::new();
    for tag in &person.tags {
        tags.push(Span::styled(format!(" {} ", tag), Theme::tag()));
        tags.push(Span::raw(" "));
    }

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", query::initials(&person.name)), Theme::heading()),
            Span::styled(person.name.clone(), name_style),
            Span::styled(format!("  {} meetings", person.meeting_count), Theme::muted()),
        ]),
        Line::from(Span::styled(
            super::truncate(&query::affiliation(person), width),
            Theme::secondary(),
        )),
        Line::from(vec![
            Span::styled("Vibes: ", Theme::key_hint()),
            Span::styled(
                super::truncate(&person.vibes, width.saturating_sub(7)),
                Theme::text(),
            ),
        ]),
        Line::from(tags),
        Line::from(Span::styled(format!("Last met: {}", last), Theme::muted())),
        Line::default(),
    ])
}

fn render_no_results(frame: &mut Frame, area: Rect, empty_directory: bool) {
    let mut lines = Vec::new();
    if empty_directory {
        lines.push(Line::from(Span::styled("No people yet.", Theme::muted())));
    } else {
        lines.push(super::heading("\u{1f914} No matches found"));
        lines.push(Line::from(Span::styled(
            "Try a different search term or browse all people above.",
            Theme::secondary(),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Search tips:", Theme::title())));
        for tip in SEARCH_TIPS {
            lines.push(Line::from(Span::styled(format!(" \u{2022} {}", tip), Theme::text())));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_detail(frame: &mut Frame, area: Rect, state: &AppState, person: &Person) {
    let block = Block::default()
        .title(format!(" \u{1f4cb} {} ", person.name))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let store = state.store.state();
    let days = person
        .last_meeting
        .map(|d| query::days_since(d, Utc::now()).to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<9}", label), Theme::muted()),
            Span::styled(value.to_string(), Theme::text()),
        ])
    };

    let mut lines = vec![
        super::heading("Basic Info"),
        field("Company:", person.company.as_deref().unwrap_or("")),
        field("Role:", person.role.as_deref().unwrap_or("")),
        field("Email:", &person.email),
        Line::default(),
        super::heading("Meeting History"),
        Line::from(vec![
            Span::styled(format!("{:>4}", person.meeting_count), Theme::heading()),
            Span::styled(" Total Meetings   ", Theme::secondary()),
            Span::styled(days, Theme::heading()),
            Span::styled(" Days Since Last Meeting", Theme::secondary()),
        ]),
    ];
    for meeting in query::meetings_with(&store.meetings, &person.id) {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", state.format_date(&meeting.date)), Theme::muted()),
            Span::styled(meeting.title.clone(), Theme::text()),
        ]));
    }

    lines.push(Line::default());
    lines.push(super::heading("Notes & Context"));
    for note in &person.notes {
        lines.push(Line::from(Span::styled(format!(" \u{2022} {}", note), Theme::text())));
    }
    lines.push(Line::default());
    lines.push(super::heading("Vibes & Personality"));
    lines.push(Line::from(Span::styled(person.vibes.clone(), Theme::text())));
    lines.push(Line::default());
    lines.push(super::key_help(&[
        ("m", "\u{1f4e7} Send Email"),
        ("c", "\u{1f4c5} Schedule Meeting"),
        ("Esc", "Close"),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_title_counts() {
        assert_eq!(results_title("", 3, 3), "All People (3)");
        assert_eq!(results_title("climate", 1, 3), "Found 1 person");
        assert_eq!(results_title("zzz", 0, 3), "Found 0 people");
        assert_eq!(results_title("AI", 2, 3), "Found 2 people");
    }
}
