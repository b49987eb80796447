use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AppState, QuizFocus};
use crate::ui::markdown::markdown_to_lines;
use crate::ui::theme::Palette;

/// Casual-mode side panel: free-form questions to the AI helper.
pub fn draw_helper(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let focused = state.quiz_focus == QuizFocus::Helper;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "  Ask follow-up questions about this topic or question.",
            Style::default().fg(palette.sub_text),
        )),
        Line::from(""),
    ];

    // Input row with a block cursor while the panel has focus.
    let mut input_spans = vec![Span::raw("  > ")];
    let cursor = state.helper_cursor.min(state.helper_input.len());
    if focused {
        let (before, rest) = state.helper_input.split_at(cursor);
        input_spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(palette.text),
        ));
        let mut chars = rest.chars();
        match chars.next() {
            Some(at_cursor) => {
                input_spans.push(Span::styled(
                    at_cursor.to_string(),
                    Style::default().fg(Color::Black).bg(Color::White),
                ));
                input_spans.push(Span::styled(
                    chars.as_str().to_string(),
                    Style::default().fg(palette.text),
                ));
            }
            None => input_spans.push(Span::styled(
                " ",
                Style::default().fg(Color::Black).bg(Color::White),
            )),
        }
    } else if state.helper_input.is_empty() {
        input_spans.push(Span::styled(
            "Type your question here...",
            Style::default().fg(palette.sub_text),
        ));
    } else {
        input_spans.push(Span::styled(
            state.helper_input.clone(),
            Style::default().fg(palette.text),
        ));
    }
    lines.push(Line::from(input_spans));
    lines.push(Line::from(""));

    if state.helper_loading {
        lines.push(Line::from(Span::styled(
            "  Thinking...",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::ITALIC),
        )));
    } else if let Some(answer) = &state.helper_answer {
        for mut line in markdown_to_lines(answer, palette.accent) {
            line.spans.insert(0, Span::raw("  "));
            lines.push(line);
        }
    }

    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" AI Helper ");
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
