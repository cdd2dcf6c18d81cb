use crate::app::state::{AppState, View};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = super::panel("Navigate", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(inner);

    let items: Vec<ListItem> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if *view == state.view {
                Theme::selected()
            } else {
                Theme::text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Theme::key_hint()),
                Span::styled(format!("{} {}", view.icon(), view.title()), style),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    let store = state.store.state();
    let stats = vec![
        Line::from(vec![
            Span::styled(format!("{:>3}", store.people.len()), Theme::heading()),
            Span::styled(" People", Theme::secondary()),
        ]),
        Line::from(vec![
            Span::styled(format!("{:>3}", store.meetings.len()), Theme::heading()),
            Span::styled(" Meetings", Theme::secondary()),
        ]),
    ];
    frame.render_widget(Paragraph::new(stats), chunks[1]);
}
