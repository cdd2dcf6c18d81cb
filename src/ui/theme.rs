use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 20, 28);
    pub const BG_SURFACE: Color = Color::Rgb(28, 31, 42);
    pub const BORDER_DIM: Color = Color::Rgb(60, 64, 80);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 155, 175);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 105, 125);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 190);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(170, 150, 240);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 210, 120);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tag() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_LAVENDER)
    }

    pub fn urgent() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn toggle(on: bool) -> Style {
        if on {
            Style::default().fg(Self::ACCENT_GREEN)
        } else {
            Style::default().fg(Self::TEXT_MUTED)
        }
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BORDER_DIM)
    }
}
