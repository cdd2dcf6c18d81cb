use crate::app::state::{AppState, View};
use crate::store::query::{self, MeetingStats};
use crate::store::Meeting;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

const FOLLOW_UP_SUGGESTIONS: [(&str, &str, &str); 3] = [
    ("\u{1f4e7}", "Send thank you email", "Include meeting summary and action items"),
    ("\u{1f4c5}", "Schedule follow-up meeting", "Based on action item deadlines"),
    ("\u{1f517}", "Connect attendees", "Facilitate potential collaborations"),
];

const KEY_INSIGHTS: [&str; 3] = [
    "\u{1f4a1} Madison and Sarah have complementary research interests",
    "\u{1f91d} Potential collaboration opportunity on AI ethics",
    "\u{1f4c8} Growing interest in technical deep-dives",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(area);

    let store = state.store.state();
    let wrap = if state.history.show_wrap {
        store.current_meeting.as_ref()
    } else {
        None
    };
    let (list_area, wrap_area) = layout::split_detail(chunks[0], wrap.is_some());
    render_meetings(frame, list_area, state);
    if let (Some(meeting), Some(rect)) = (wrap, wrap_area) {
        render_wrap(frame, rect, state, meeting);
    }
    render_stats(frame, chunks[1], state);
}

fn render_meetings(frame: &mut Frame, area: Rect, state: &AppState) {
    let store = state.store.state();
    let block = super::panel(
        format!("{} \u{2022} Recent Meetings ({})", View::History.title(), store.meetings.len()),
        !state.history.show_wrap,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if store.meetings.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No meetings recorded yet.", Theme::muted())),
            inner,
        );
        return;
    }

    let width = inner.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = store
        .meetings
        .iter()
        .map(|meeting| {
            let recording = if meeting.is_recorded {
                Span::styled("\u{1f3a5} Recorded", Theme::success())
            } else {
                Span::styled("\u{1f4dd} Notes Only", Theme::secondary())
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{}  ", state.format_date(&meeting.date)), Theme::muted()),
                    recording,
                ]),
                Line::from(Span::styled(meeting.title.clone(), Theme::title())),
                Line::from(vec![
                    Span::styled("Attendees: ", Theme::key_hint()),
                    Span::styled(
                        super::truncate(
                            &query::attendee_names(&store.people, meeting),
                            width.saturating_sub(11),
                        ),
                        Theme::text(),
                    ),
                ]),
                Line::from(Span::styled(
                    super::truncate(&meeting.summary, width),
                    Theme::secondary(),
                )),
                Line::from(Span::styled(
                    format!(
                        "{} action items  {} completed",
                        meeting.action_items.len(),
                        meeting.completed_count()
                    ),
                    Theme::muted(),
                )),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Theme::BG_SURFACE))
        .highlight_symbol("\u{258c} ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.history.cursor.min(store.meetings.len() - 1)));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn render_wrap(frame: &mut Frame, area: Rect, state: &AppState, meeting: &Meeting) {
    let block = Block::default()
        .title(" \u{1f4cb} Post-Meeting Wrap-up ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let people = &state.store.state().people;
    let detail = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Theme::key_hint()),
            Span::styled(value, Theme::text()),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(meeting.title.clone(), Theme::title())),
        detail("Date", state.format_date(&meeting.date)),
        detail("Duration", "1 hour (estimated)".to_string()),
        detail("Attendees", query::attendee_names(people, meeting)),
        Line::default(),
        super::heading("\u{1f4dd} Meeting Summary"),
        Line::from(Span::styled(meeting.summary.clone(), Theme::text())),
        Line::default(),
        super::heading("\u{2705} Action Items"),
    ];
    for item in &meeting.action_items {
        let style = if item.completed {
            Theme::muted().crossed_out()
        } else {
            Theme::text()
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {}", super::checkbox(item.completed), item.text),
            style,
        )));
        let mut meta = format!("     Assigned to: {}", item.assigned_to);
        if let Some(due) = &item.due_date {
            meta.push_str(&format!(" \u{2022} Due: {}", state.format_date(due)));
        }
        lines.push(Line::from(Span::styled(meta, Theme::muted())));
    }

    lines.push(Line::default());
    lines.push(super::heading("\u{1f504} Follow-up Suggestions"));
    for (icon, title, hint) in FOLLOW_UP_SUGGESTIONS {
        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", icon)),
            Span::styled(title, Theme::title()),
        ]));
        lines.push(Line::from(Span::styled(format!("    {}", hint), Theme::muted())));
    }

    lines.push(Line::default());
    lines.push(super::heading("\u{1f3af} Key Insights"));
    for insight in KEY_INSIGHTS {
        lines.push(Line::from(Span::styled(format!(" {}", insight), Theme::text())));
    }

    lines.push(Line::default());
    lines.push(super::key_help(&[
        ("f", "Generate Follow-up"),
        ("t", "Toggle Item"),
        ("Esc", "Close"),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn completion_label(stats: &MeetingStats) -> String {
    stats
        .completion_rate()
        .map(|rate| format!("{}%", rate))
        .unwrap_or_else(|| "N/A".to_string())
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let store = state.store.state();
    let stats = MeetingStats::collect(&store.meetings);

    let block = super::panel("\u{1f4ca} Meeting Insights", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = [
        (stats.meetings.to_string(), "Total Meetings"),
        (stats.action_items.to_string(), "Action Items Created"),
        (completion_label(&stats), "Completion Rate"),
        (store.people.len().to_string(), "Unique Contacts"),
    ];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);
    for ((value, label), rect) in cards.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(value, Theme::heading())),
            Line::from(Span::styled(label, Theme::muted())),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn completion_label_handles_empty() {
        assert_eq!(completion_label(&MeetingStats::collect(&[])), "N/A");
        let stats = MeetingStats::collect(&seed::meetings());
        assert_eq!(completion_label(&stats), "50%");
    }
}
