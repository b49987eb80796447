use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::Mode;
use crate::state::AppState;
use crate::stopwatch::format_elapsed;
use crate::ui::theme::Palette;

pub fn draw_results(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let (score, total) = state
        .session
        .as_ref()
        .map(|s| (s.score(), s.len()))
        .unwrap_or((0, 0));

    // Time taken is only meaningful in competitive mode.
    let time_taken = if state.quiz_mode == Mode::Competitive {
        format_elapsed(state.stopwatch.elapsed())
    } else {
        "N/A".to_string()
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Results",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Your score: ", Style::default().fg(palette.text)),
            Span::styled(
                format!("{} / {}", score, total),
                Style::default()
                    .fg(palette.correct)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Time taken: {}", time_taken),
            Style::default().fg(palette.sub_text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] New quiz    [Ctrl+Q] Exit",
            Style::default().fg(palette.sub_text),
        )),
        Line::from(""),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);
}
