mod brief;
mod header;
mod history;
pub mod layout;
mod onboarding;
mod popup;
mod search;
mod settings;
mod sidebar;
mod status_bar;
pub mod theme;
mod zoom_panel;

use crate::app::state::{AppState, Screen, View};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};
use theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    match state.screen {
        Screen::Onboarding => onboarding::render(frame, area, state),
        Screen::Dashboard => render_dashboard(frame, area, state),
    }
    popup::render(frame, state);
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let app_layout = layout::compute_layout(area, state.zoom_panel);

    header::render(frame, app_layout.header, state);
    sidebar::render(frame, app_layout.sidebar, state);
    match state.view {
        View::Brief => brief::render(frame, app_layout.main, state),
        View::Search => search::render(frame, app_layout.main, state),
        View::History => history::render(frame, app_layout.main, state),
        View::Settings => settings::render(frame, app_layout.main, state),
    }
    if let Some(panel) = app_layout.zoom_panel {
        zoom_panel::render(frame, panel, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

/// Bordered block with a bold title, used by every panel.
fn panel(title: impl Into<String>, focused: bool) -> Block<'static> {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    Block::default()
        .title(format!(" {} ", title.into()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Theme::heading()))
}

/// "key Label  key Label" help line.
fn key_help(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, label) in pairs {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(format!(" {} ", label), Theme::secondary()));
    }
    Line::from(spans)
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Cut `text` to at most `width` display columns, ending in "..." when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width < 4 {
        return text.chars().take(width).collect();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_by_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Climate Ventures", 10), "Climate...");
        assert_eq!(truncate("日本語テキスト", 9), "日本語...");
        assert_eq!(truncate("abcdef", 3), "abc");
    }
}
