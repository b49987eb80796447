use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, QuizFocus, Screen};
use crate::ui::theme::Palette;

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = match state.screen {
        Screen::Setup => {
            if state.quiz_loading {
                vec![("Esc", "cancel"), ("Ctrl+Q", "quit")]
            } else {
                vec![
                    ("Tab", "next field"),
                    ("←/→", "change"),
                    ("Enter", "confirm"),
                    ("Ctrl+T", "theme"),
                    ("Ctrl+Q", "quit"),
                ]
            }
        }
        Screen::Quiz => match state.quiz_focus {
            QuizFocus::Quiz => {
                let mut v = vec![("a-z", "answer"), ("←/→", "prev/next"), ("Esc", "exit quiz")];
                if state.helper_available() {
                    v.push(("Tab", "helper"));
                }
                v.push(("Ctrl+Q", "quit"));
                v
            }
            QuizFocus::Helper => vec![
                ("Enter", "ask"),
                ("Tab", "back to quiz"),
                ("Esc", "back to quiz"),
                ("Ctrl+Q", "quit"),
            ],
        },
        Screen::Results => vec![("Enter", "new quiz"), ("Ctrl+Q", "quit")],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let palette = Palette::for_theme(state.theme);
    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bar_bg));
    f.render_widget(widget, area);
}
