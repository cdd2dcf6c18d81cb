use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct DashboardLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub zoom_panel: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, zoom_panel: bool) -> DashboardLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: sidebar | main view | optional zoom panel
    let mut constraints = vec![Constraint::Length(24), Constraint::Min(30)];
    if zoom_panel {
        constraints.push(Constraint::Length(36));
    }
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(content);

    DashboardLayout {
        header,
        sidebar: h_chunks[0],
        main: h_chunks[1],
        zoom_panel: zoom_panel.then(|| h_chunks[2]),
        status_bar,
    }
}

/// Split a view's area into a list column and an optional detail column.
pub fn split_detail(area: Rect, detail: bool) -> (Rect, Option<Rect>) {
    if !detail {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

/// Centered popup rectangle, `pct_w` x `pct_h` percent of `area`, clamped to
/// at least `min_w` x `min_h` where the screen allows.
pub fn centered(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let popup_w = percent_of(area.width, pct_w)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let popup_h = percent_of(area.height, pct_h)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

fn percent_of(len: u16, pct: u16) -> u16 {
    u16::try_from(u32::from(len) * u32::from(pct) / 100).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_panel_takes_a_column() {
        let area = Rect::new(0, 0, 120, 40);
        let without = compute_layout(area, false);
        assert!(without.zoom_panel.is_none());
        let with = compute_layout(area, true);
        let panel = with.zoom_panel.unwrap();
        assert_eq!(panel.width, 36);
        assert!(with.main.width < without.main.width);
        assert_eq!(with.status_bar.height, 1);
    }

    #[test]
    fn centered_stays_inside() {
        let area = Rect::new(0, 0, 50, 10);
        let popup = centered(area, 60, 40, 60, 8);
        assert!(popup.width <= 46);
        assert!(popup.x + popup.width <= area.width);
        assert!(popup.y + popup.height <= area.height);
    }

    #[test]
    fn centered_on_wide_terminal() {
        let area = Rect::new(0, 0, 2000, 600);
        let popup = centered(area, 60, 40, 44, 5);
        assert_eq!((popup.width, popup.height), (1200, 240));
        assert_eq!((popup.x, popup.y), (400, 180));
    }
}
