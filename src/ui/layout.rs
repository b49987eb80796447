use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub titlebar: Rect,
    pub main: Rect,
    /// Present only during a casual-mode quiz.
    pub helper: Option<Rect>,
    pub keybar: Rect,
}

pub fn compute_layout(area: Rect, with_helper: bool) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Min(5),    // content
            Constraint::Length(1), // keybar
        ])
        .split(area);

    if with_helper {
        // Quiz card on the left, helper panel on the right, roughly the
        // 1:1 split the web layout used once the card is readable.
        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[1]);

        AppLayout {
            titlebar: vertical[0],
            main: middle[0],
            helper: Some(middle[1]),
            keybar: vertical[2],
        }
    } else {
        AppLayout {
            titlebar: vertical[0],
            main: vertical[1],
            helper: None,
            keybar: vertical[2],
        }
    }
}
