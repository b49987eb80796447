use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::theme::Palette;

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let Some(session) = state.session.as_ref() else {
        return;
    };

    if session.is_empty() {
        draw_no_questions(f, area, state);
        return;
    }

    let total = session.len();
    let number = session.current_index() + 1;
    let feedback = session.feedback_visible();
    let selected = session.selected_option();

    let mut lines: Vec<Line> = Vec::new();

    // Progress header with a simple filled bar, as the web client had.
    let bar_width = (area.width as usize).saturating_sub(4).min(40);
    let filled = if total > 0 {
        bar_width * number / total
    } else {
        0
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("  Question {} / {}  ", number, total),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(palette.accent)),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled)),
            Style::default().fg(palette.border),
        ),
    ]));
    lines.push(Line::from(""));

    if let Some(question) = session.current_question() {
        lines.push(Line::from(Span::styled(
            format!("  {}", question.text),
            Style::default().fg(palette.text),
        )));
        lines.push(Line::from(""));

        if question.options.is_empty() {
            lines.push(Line::from(Span::styled(
                "  This question arrived without any options.",
                Style::default().fg(palette.wrong),
            )));
            lines.push(Line::from(Span::styled(
                "  Press → to skip it.",
                Style::default().fg(palette.sub_text),
            )));
        }

        for (i, option) in question.options.iter().enumerate() {
            let letter = (b'a' + (i % 26) as u8) as char;
            let is_chosen = selected == Some(i);
            let radio = if is_chosen { "(●)" } else { "( )" };

            let style = if feedback {
                let is_correct = question.is_correct(i);
                if is_chosen && is_correct {
                    Style::default()
                        .fg(palette.correct)
                        .add_modifier(Modifier::BOLD)
                } else if is_chosen {
                    Style::default()
                        .fg(palette.wrong)
                        .add_modifier(Modifier::BOLD)
                } else if is_correct {
                    // Reveal the right answer even when it was not picked.
                    Style::default().fg(palette.correct)
                } else {
                    Style::default().fg(palette.sub_text)
                }
            } else if is_chosen {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.text)
            };

            lines.push(Line::from(Span::styled(
                format!("  {} {}. {}", radio, letter, option),
                style,
            )));
        }

        if feedback {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Explanation:",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            let explanation = if question.explanation.trim().is_empty() {
                "(none provided)"
            } else {
                question.explanation.trim()
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", explanation),
                Style::default().fg(palette.text),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Quiz ");
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn draw_no_questions(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "No questions available.",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Go back and try another topic.",
            Style::default().fg(palette.sub_text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Back to setup",
            Style::default().fg(palette.sub_text),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);
}
