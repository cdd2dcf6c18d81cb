use crate::app::integration::Integration;
use crate::app::state::{AppState, SettingsRow, View, NOTIFICATION_LABELS, SETTINGS_ROWS};
use crate::store::ConsentKey;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const APP_VERSION: &str = "1.0.0 (Prototype)";
pub const SUPPORT_EMAIL: &str = "support@perfct.io";

fn consent_badge(key: ConsentKey) -> (&'static str, Style) {
    match key {
        ConsentKey::Transcript => ("Recommended", Theme::success()),
        ConsentKey::Recording => ("Requires Consent", Style::default().fg(Theme::ACCENT_AMBER)),
        ConsentKey::FaceMemory => ("Beta", Style::default().fg(Theme::ACCENT_LAVENDER)),
    }
}

fn consent_description(key: ConsentKey) -> (&'static str, &'static str) {
    match key {
        ConsentKey::Transcript => (
            "Capture text from meetings when all participants consent. Enables better context and search.",
            "\u{1f4dd} Notes-only mode is always available as fallback",
        ),
        ConsentKey::Recording => (
            "Record audio for enhanced context and accuracy. Requires explicit consent from all participants.",
            "\u{1f399} Audio is processed locally when possible",
        ),
        ConsentKey::FaceMemory => (
            "Remember faces to help identify people in future meetings. Processing happens on your device only.",
            "\u{1f4f1} All face data stays on your device and is never shared",
        ),
    }
}

fn integration_badge(integration: Integration) -> &'static str {
    if integration.is_available() {
        "Demo Mode"
    } else {
        "Coming Soon"
    }
}

/// Heading printed above a row when it opens a new section.
fn section_before(row: SettingsRow) -> Option<(&'static str, Option<&'static str>)> {
    match row {
        SettingsRow::Consent(ConsentKey::Transcript) => Some((
            "\u{1f512} Privacy & Consent",
            Some("Control what data is captured and how it's used. Changes apply to future meetings."),
        )),
        SettingsRow::Integration(Integration::Zoom) => Some(("\u{1f517} Integrations", None)),
        SettingsRow::Retention => Some(("\u{1f4be} Data & Export", None)),
        SettingsRow::Notification(0) => Some((
            "\u{1f514} Notifications",
            Some("Control when and how you're notified"),
        )),
        _ => None,
    }
}

fn row_lines(state: &AppState, row: SettingsRow, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected {
        Span::styled("\u{25b6} ", Theme::key_hint())
    } else {
        Span::raw("  ")
    };
    let title_style = if selected {
        Theme::selected()
    } else {
        Theme::title()
    };

    match row {
        SettingsRow::Consent(key) => {
            let on = state.store.state().consent_settings.get(key);
            let (badge, badge_style) = consent_badge(key);
            let (description, detail) = consent_description(key);
            vec![
                Line::from(vec![
                    marker,
                    Span::styled(format!("{} ", super::checkbox(on)), Theme::toggle(on)),
                    Span::styled(key.title(), title_style),
                    Span::styled(format!("  {}", badge), badge_style),
                ]),
                Line::from(Span::styled(format!("      {}", description), Theme::secondary())),
                Line::from(Span::styled(format!("      {}", detail), Theme::muted())),
            ]
        }
        SettingsRow::Integration(integration) => vec![
            Line::from(vec![
                marker,
                Span::raw(format!("{} ", integration.icon())),
                Span::styled(integration.name(), title_style),
                Span::styled(format!("  [{}]", integration_badge(integration)), Theme::muted()),
                if integration.is_available() {
                    Span::styled("  Configure", Theme::key_hint())
                } else {
                    Span::styled("  Configure", Theme::muted().add_modifier(Modifier::CROSSED_OUT))
                },
            ]),
            Line::from(Span::styled(
                format!("      {}", integration.description()),
                Theme::secondary(),
            )),
        ],
        SettingsRow::Retention => vec![
            Line::from(vec![
                marker,
                Span::styled("Data Retention", title_style),
                Span::styled(format!("  < {} >", state.settings.retention.label()), Theme::heading()),
            ]),
            Line::from(Span::styled(
                "      How long to keep your meeting data",
                Theme::secondary(),
            )),
        ],
        SettingsRow::Export => vec![
            Line::from(vec![
                marker,
                Span::styled("\u{1f4e5} Export All Data (JSON)", title_style),
            ]),
            Line::from(Span::styled(
                "      Download all your Perfect Context data",
                Theme::secondary(),
            )),
        ],
        SettingsRow::DeleteAll => vec![
            Line::from(vec![
                marker,
                Span::styled(
                    "\u{1f5d1} Delete All Data",
                    if selected { Theme::selected() } else { Theme::urgent() },
                ),
            ]),
            Line::from(Span::styled(
                "      Permanently remove all your data from Perfect Context",
                Theme::secondary(),
            )),
        ],
        SettingsRow::Notification(i) => {
            let on = state.settings.notifications.get(i).copied().unwrap_or(false);
            let label = NOTIFICATION_LABELS.get(i).copied().unwrap_or("");
            vec![Line::from(vec![
                marker,
                Span::styled(format!("{} ", super::checkbox(on)), Theme::toggle(on)),
                Span::styled(label, title_style),
            ])]
        }
    }
}

fn about_lines() -> Vec<Line<'static>> {
    let item = |label: &'static str, value: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {}: ", label), Theme::key_hint()),
            Span::styled(value, Theme::text()),
        ])
    };
    vec![
        super::heading("\u{2139} About"),
        item("Version", APP_VERSION),
        item("Build", "Demo Mode"),
        item("Support", SUPPORT_EMAIL),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = super::panel(View::Settings.title(), true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Manage your privacy, integrations, and preferences",
        Theme::muted(),
    ))];
    let mut cursor_line = 0;
    for (i, row) in SETTINGS_ROWS.iter().enumerate() {
        if let Some((title, description)) = section_before(*row) {
            lines.push(Line::default());
            lines.push(super::heading(title));
            if let Some(description) = description {
                lines.push(Line::from(Span::styled(description, Theme::muted())));
            }
        }
        let selected = i == state.settings.cursor;
        if selected {
            cursor_line = lines.len();
        }
        lines.extend(row_lines(state, *row, selected));
    }
    lines.push(Line::default());
    lines.extend(about_lines());

    // Keep the selected row (and a couple of its detail lines) on screen.
    let height = chunks[0].height as usize;
    let scroll = (cursor_line + 3).saturating_sub(height);
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll as u16, 0)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(super::key_help(&[
            ("\u{2191}\u{2193}", "Move"),
            ("Enter", "Toggle / Run"),
        ])),
        chunks[1],
    );
}
