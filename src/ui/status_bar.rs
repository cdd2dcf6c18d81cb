use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

fn view_hints(state: &AppState) -> &'static str {
    match state.view {
        View::Brief => "\u{2191}\u{2193} Move  Space Check  s Start meeting",
        View::Search => match state.search.focus {
            SearchFocus::Input => "Type to search  Ctrl+E Example  Ctrl+U Clear  Enter Results",
            SearchFocus::Results => "\u{2191}\u{2193} Move  Enter Open  m Email  c Schedule  / Edit",
        },
        View::History => "\u{2191}\u{2193} Move  Enter Wrap-up  f Follow-up  Esc Close",
        View::Settings => "\u{2191}\u{2193} Move  Enter Toggle/Run",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.view.title()),
        Style::default().fg(Theme::BG_DARK).bg(Theme::ACCENT_TEAL),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = format!(" {}  Tab View  q Quit ", view_hints(state));

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        hints,
        Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BORDER_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
