use crate::app::state::{AppState, OnboardingStep, ONBOARDING_SERVICES};
use crate::store::ConsentKey;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const FEATURES: [(&str, &str, &str); 3] = [
    ("\u{1f91d}", "Remember Everyone", "Never forget a name or conversation detail again"),
    ("\u{1f512}", "Privacy First", "Full control over what's captured and shared"),
    ("\u{26a1}", "Instant Context", "Get meeting briefs and follow-up suggestions"),
];

const PRIVACY_PROMISE: [&str; 5] = [
    "All data is encrypted and stored securely",
    "You can export or delete your data anytime",
    "Meeting participants always see consent status",
    "No data is shared without your explicit permission",
    "Face recognition stays on your device only",
];

const WHATS_NEXT: [&str; 4] = [
    "\u{1f4cb} Get pre-meeting briefs with past conversation context",
    "\u{1f50d} Search for people using \"vibes\" - like \"the VC who likes climbing\"",
    "\u{1f4dd} Review meeting summaries and follow-up suggestions",
    "\u{1f91d} Build stronger relationships with better context",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Block::default().style(Theme::panel_bg()), area);

    let card = layout::centered(area, 70, 85, 64, 24);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Theme::panel_bg());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Progress
            Constraint::Min(6),    // Step content
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    render_progress(frame, chunks[0], state.onboarding.step);

    let lines = match state.onboarding.step {
        OnboardingStep::Welcome => welcome(),
        OnboardingStep::ConnectServices => connect(state.onboarding.cursor),
        OnboardingStep::ConsentSettings => consent(state),
        OnboardingStep::Complete => complete(),
    };
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[1].inner(Margin::new(2, 0)),
    );

    render_buttons(frame, chunks[2], state.onboarding.step);
}

fn render_progress(frame: &mut Frame, area: Rect, current: OnboardingStep) {
    let mut spans = Vec::new();
    for step in OnboardingStep::ALL {
        let style = if step == current {
            Theme::selected()
        } else if step.index() < current.index() {
            Theme::heading()
        } else {
            Theme::muted()
        };
        spans.push(Span::styled(format!(" {} {} ", step.index() + 1, step.name()), style));
        if !step.is_last() {
            spans.push(Span::styled(" \u{2500} ", Theme::muted()));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn welcome() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("Welcome to Perfect Context", Theme::title())).centered(),
        Line::from(Span::styled("Your consent-first meeting companion", Theme::secondary()))
            .centered(),
        Line::default(),
    ];
    for (icon, title, text) in FEATURES {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", icon)),
            Span::styled(title, Theme::heading()),
        ]));
        lines.push(Line::from(Span::styled(format!("     {}", text), Theme::text())));
        lines.push(Line::default());
    }
    lines
}

fn connect(cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        super::heading("Connect Your Services"),
        Line::from(Span::styled("Connect Zoom and Calendar to get started", Theme::secondary())),
        Line::default(),
    ];
    for (i, service) in ONBOARDING_SERVICES.iter().enumerate() {
        let focused = i == cursor;
        lines.push(Line::from(vec![
            Span::styled(if focused { "\u{25b6} " } else { "  " }, Theme::key_hint()),
            Span::raw(format!("{} ", service.icon())),
            Span::styled(service.name(), Theme::title()),
            Span::styled(
                "  [Connect (Demo)]",
                if focused { Theme::selected() } else { Theme::key_hint() },
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", service.connect_blurb()),
            Theme::secondary(),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::styled("Demo Mode: ", Theme::key_hint()),
        Span::styled(
            "This prototype uses synthetic meeting data to demonstrate functionality.",
            Theme::muted(),
        ),
    ]));
    lines
}

fn consent_copy(key: ConsentKey) -> (&'static str, Option<&'static str>) {
    match key {
        ConsentKey::Transcript => (
            "Capture text from meetings when all participants consent",
            Some("Recommended"),
        ),
        ConsentKey::Recording => (
            "Record audio for enhanced context (requires explicit consent from all participants)",
            None,
        ),
        ConsentKey::FaceMemory => (
            "Remember faces to help identify people (stored locally on device)",
            Some("Beta"),
        ),
    }
}

fn consent(state: &AppState) -> Vec<Line<'static>> {
    let settings = &state.store.state().consent_settings;
    let cursor = state.onboarding.cursor;
    let mut lines = vec![
        Line::default(),
        super::heading("Privacy & Consent Settings"),
        Line::from(Span::styled(
            "Choose your default privacy level. You can change these anytime.",
            Theme::secondary(),
        )),
        Line::default(),
    ];
    for (i, key) in ConsentKey::ALL.iter().enumerate() {
        let on = settings.get(*key);
        let (description, badge) = consent_copy(*key);
        let mut spans = vec![
            Span::styled(if i == cursor { "\u{25b6} " } else { "  " }, Theme::key_hint()),
            Span::styled(format!("{} ", super::checkbox(on)), Theme::toggle(on)),
            Span::styled(
                key.title(),
                if i == cursor { Theme::selected() } else { Theme::title() },
            ),
        ];
        if let Some(badge) = badge {
            spans.push(Span::styled(format!("  {}", badge), Theme::tag()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(format!("      {}", description), Theme::muted())));
    }

    let details_focused = cursor == ConsentKey::ALL.len();
    let verb = if state.onboarding.show_consent_details {
        "Hide"
    } else {
        "Learn more about"
    };
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(if details_focused { "\u{25b6} " } else { "  " }, Theme::key_hint()),
        Span::styled(
            format!("{} our privacy practices", verb),
            if details_focused {
                Theme::selected()
            } else {
                Theme::heading().underlined()
            },
        ),
    ]));
    if state.onboarding.show_consent_details {
        lines.push(Line::from(Span::styled("  Our Privacy Promise", Theme::title())));
        for promise in PRIVACY_PROMISE {
            lines.push(Line::from(Span::styled(format!("   \u{2022} {}", promise), Theme::text())));
        }
    }
    lines
}

fn complete() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("You're All Set! \u{1f389}", Theme::title())).centered(),
        Line::from(Span::styled(
            "Perfect Context is ready to help you remember everyone you meet.",
            Theme::secondary(),
        ))
        .centered(),
        Line::default(),
        super::heading("What's next:"),
    ];
    for item in WHATS_NEXT {
        lines.push(Line::from(Span::styled(format!("  {}", item), Theme::text())));
    }
    lines
}

fn render_buttons(frame: &mut Frame, area: Rect, step: OnboardingStep) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    if step.index() > 0 {
        frame.render_widget(
            Paragraph::new(super::key_help(&[("\u{2190}", "Back")])),
            columns[0],
        );
    }
    let next = if step.is_last() { "Get Started" } else { "Continue" };
    let mut pairs = vec![("Enter", next)];
    if matches!(step, OnboardingStep::ConnectServices | OnboardingStep::ConsentSettings) {
        pairs.insert(0, ("Space", "Select"));
    }
    frame.render_widget(
        Paragraph::new(super::key_help(&pairs)).alignment(Alignment::Right),
        columns[1],
    );
}
