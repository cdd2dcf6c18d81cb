use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const LIVE_PROMPTS: [&str; 2] = [
    "\u{1f4a1} Ask Madison about her latency optimization progress",
    "\u{1f91d} Sarah mentioned bias detection - good collaboration opportunity",
];

/// Static in-meeting whisper panel. Nothing here is live.
pub fn render(frame: &mut Frame, area: Rect, _state: &AppState) {
    let block = super::panel("In-Meeting Whisper", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        super::heading("Current Meeting Context"),
        Line::from(vec![
            Span::styled("Participants: ", Theme::key_hint()),
            Span::styled("Sarah, Madison, +3 others", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Last discussed: ", Theme::key_hint()),
            Span::styled("AI music latency (Madison)", Theme::text()),
        ]),
        Line::default(),
        super::heading("Live Prompts"),
    ];
    for prompt in LIVE_PROMPTS {
        lines.push(Line::from(Span::styled(prompt, Theme::text())));
    }
    lines.extend([
        Line::default(),
        super::heading("Quick Capture"),
        Line::from(Span::styled(
            "Capture important moments, action items, or insights...",
            Theme::muted().italic(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Demo Mode: ", Theme::key_hint()),
            Span::styled(
                "In a real implementation, this panel would integrate with Zoom to provide real-time suggestions and capture.",
                Theme::muted(),
            ),
        ]),
        Line::default(),
        super::key_help(&[("z", "Close")]),
    ]);

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
