use crate::app::state::{AppState, View};
use crate::store::{query, seed};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = super::panel(View::Brief.title(), true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(inner);

    let mut lines = meeting_header();
    lines.push(Line::default());
    lines.extend(participants(state));
    lines.push(Line::default());
    lines.extend(hooks());
    lines.push(Line::default());
    lines.extend(open_loops());
    lines.push(Line::default());
    lines.extend(checklist(state));
    lines.push(Line::default());
    lines.extend(outcomes());

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(super::key_help(&[
            ("\u{2191}\u{2193}", "Checklist"),
            ("Space", "Toggle"),
            ("s", "Start Meeting"),
        ])),
        chunks[1],
    );
}

fn meeting_header() -> Vec<Line<'static>> {
    let upcoming = &seed::UPCOMING_MEETING;
    let badge = if upcoming.in_progress {
        Span::styled(" In Progress ", Theme::tag())
    } else {
        Span::styled(" Upcoming ", Theme::tag())
    };
    vec![
        Line::from(vec![
            Span::styled(upcoming.title, Theme::title()),
            Span::raw("  "),
            badge,
        ]),
        Line::from(vec![
            Span::styled("\u{1f552} ", Theme::muted()),
            Span::styled(upcoming.time, Theme::secondary()),
            Span::styled("   \u{1f465} ", Theme::muted()),
            Span::styled(upcoming.participants.join(", "), Theme::secondary()),
        ]),
    ]
}

fn participants(state: &AppState) -> Vec<Line<'static>> {
    let people = &state.store.state().people;
    let mut lines = vec![super::heading("\u{1f465} Participant Context")];
    for name in seed::UPCOMING_MEETING.participants {
        let Some(person) = query::person_by_name(people, name) else {
            continue;
        };
        let last = person
            .last_meeting
            .as_ref()
            .map(|d| state.format_date(d))
            .unwrap_or_else(|| "Never".to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", query::initials(&person.name)), Theme::heading()),
            Span::styled(person.name.clone(), Theme::title()),
            Span::styled(format!("  {}", query::affiliation(person)), Theme::secondary()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(format!("\"{}\"", person.vibes), Theme::muted().italic()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     Last met: {}", last),
            Theme::muted(),
        )));
        if !person.tags.is_empty() {
            let mut tags = vec![Span::raw("     ")];
            for tag in person.tags.iter().take(3) {
                tags.push(Span::styled(format!(" {} ", tag), Theme::tag()));
                tags.push(Span::raw(" "));
            }
            lines.push(Line::from(tags));
        }
    }
    lines
}

fn hooks() -> Vec<Line<'static>> {
    let mut lines = vec![super::heading("\u{1f4a1} Conversation Hooks")];
    for hook in seed::CONVERSATION_HOOKS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}: ", hook.person), Theme::heading()),
            Span::styled(hook.hook, Theme::text()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", hook.context),
            Theme::muted(),
        )));
    }
    lines
}

fn open_loops() -> Vec<Line<'static>> {
    let mut lines = vec![super::heading("\u{1f504} Open Loops")];
    for item in seed::OPEN_LOOPS {
        let due_style = if item.urgent {
            Theme::urgent()
        } else {
            Theme::secondary()
        };
        let mut spans = vec![
            Span::styled(" \u{2022} ", Theme::muted()),
            Span::styled(item.text, Theme::text()),
            Span::styled(format!("  {}", item.due), due_style),
        ];
        if item.urgent {
            spans.push(Span::styled("  [Urgent]", Theme::urgent()));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn checklist(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![super::heading("\u{2705} Prep Checklist")];
    for (i, item) in seed::PREP_CHECKLIST.iter().enumerate() {
        let checked = state.brief.checked.get(i).copied().unwrap_or(false);
        let style = if i == state.brief.cursor {
            Theme::selected()
        } else if checked {
            Theme::success()
        } else {
            Theme::text()
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {}", super::checkbox(checked), item),
            style,
        )));
    }
    lines
}

fn outcomes() -> Vec<Line<'static>> {
    let mut lines = vec![super::heading("\u{1f3af} Suggested Outcomes")];
    for (icon, text) in seed::SUGGESTED_OUTCOMES {
        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", icon)),
            Span::styled(*text, Theme::text()),
        ]));
    }
    lines
}
