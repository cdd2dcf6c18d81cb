use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(62)])
        .split(inner);

    let left = Line::from(vec![
        Span::styled(" Perfect Context ", Theme::title().fg(Theme::ACCENT_TEAL)),
        Span::styled(
            format!(" Hi {}! \u{1f44b}", state.config.ui.user_name),
            Theme::secondary(),
        ),
    ]);
    frame.render_widget(Paragraph::new(left), chunks[0]);

    let zoom_label = if state.zoom_panel {
        "\u{1f4f9} Zoom Panel (Active)"
    } else {
        "\u{1f4f9} Zoom Panel"
    };
    let mut right = vec![
        Span::styled("z ", Theme::key_hint()),
        Span::styled(
            zoom_label,
            if state.zoom_panel {
                Theme::success()
            } else {
                Theme::text()
            },
        ),
        Span::styled("  \u{1f4dd} Notes Mode", Theme::secondary()),
    ];
    if state.store.state().consent_settings.transcript_enabled {
        right.push(Span::styled("  \u{1f4c4} Transcript On", Theme::success()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        chunks[1],
    );
}
