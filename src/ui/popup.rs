use crate::app::state::{AppState, Confirm, Notice, NoticeKind};
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Draws the confirm prompt or the notice box over whatever is on screen.
pub fn render(frame: &mut Frame, state: &AppState) {
    if let Some(confirm) = state.confirm {
        render_confirm(frame, confirm);
    } else if let Some(notice) = &state.notice {
        render_notice(frame, notice);
    }
}

fn render_notice(frame: &mut Frame, notice: &Notice) {
    let area = frame.area();
    let width = layout::centered(area, 60, 0, 44, 0).width;
    let text_w = width.saturating_sub(4).max(1) as usize;
    let body_rows: usize = notice
        .body
        .lines()
        .map(|l| l.width().div_ceil(text_w).max(1))
        .sum();
    let popup_area = layout::centered(area, 60, 0, 44, body_rows as u16 + 3);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let border = match notice.kind {
        NoticeKind::Info => Theme::border_focused(),
        NoticeKind::Error => Theme::urgent(),
    };
    let block = Block::default()
        .title(format!(" {} ", notice.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(border)
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = notice
        .body
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Theme::text())))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[0].inner(Margin::new(1, 0)),
    );
    frame.render_widget(
        Paragraph::new(super::key_help(&[("Enter", "OK")])).alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_confirm(frame: &mut Frame, confirm: Confirm) {
    let area = frame.area();
    let popup_area = layout::centered(area, 40, 0, 44, 5);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(Theme::urgent())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::urgent())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from(Span::styled(confirm.question(), Theme::text())),
        Line::default(),
        super::key_help(&[("y", "Yes"), ("n", "No")]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
