use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, SetupField};
use crate::ui::theme::Palette;

pub fn draw_setup(f: &mut Frame, area: Rect, state: &AppState) {
    if state.quiz_loading {
        draw_loading(f, area, state);
        return;
    }

    let palette = Palette::for_theme(state.theme);
    let focus = |field: SetupField| {
        if state.setup_field == field {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        }
    };

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Enter a topic to generate a quiz.",
            Style::default().fg(palette.sub_text),
        )),
        Line::from(""),
    ];

    // Topic input with a visible cursor while focused.
    let topic_label = Span::styled("  Topic:      ", focus(SetupField::Topic));
    let mut topic_spans = vec![topic_label];
    if state.setup_field == SetupField::Topic {
        let cursor = state.topic_cursor.min(state.config.topic.len());
        let (before, rest) = state.config.topic.split_at(cursor);
        topic_spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(palette.text),
        ));
        let mut chars = rest.chars();
        match chars.next() {
            Some(at_cursor) => {
                topic_spans.push(Span::styled(
                    at_cursor.to_string(),
                    Style::default().fg(Color::Black).bg(Color::White),
                ));
                topic_spans.push(Span::styled(
                    chars.as_str().to_string(),
                    Style::default().fg(palette.text),
                ));
            }
            None => {
                topic_spans.push(Span::styled(
                    " ",
                    Style::default().fg(Color::Black).bg(Color::White),
                ));
            }
        }
    } else if state.config.topic.is_empty() {
        topic_spans.push(Span::styled(
            "e.g. mathematics",
            Style::default().fg(palette.sub_text),
        ));
    } else {
        topic_spans.push(Span::styled(
            state.config.topic.clone(),
            Style::default().fg(palette.text),
        ));
    }
    lines.push(Line::from(topic_spans));
    lines.push(Line::from(""));

    let difficulty = state
        .config
        .difficulty
        .map(|d| d.to_string())
        .unwrap_or_else(|| "select level".to_string());
    lines.push(selector_line(
        "  Difficulty: ",
        &difficulty,
        focus(SetupField::Difficulty),
        state.setup_field == SetupField::Difficulty,
    ));
    lines.push(Line::from(""));

    let mode = match state.config.mode {
        crate::model::Mode::Casual => "casual (with AI helper)",
        crate::model::Mode::Competitive => "competitive (with timer)",
    };
    lines.push(selector_line(
        "  Mode:       ",
        mode,
        focus(SetupField::Mode),
        state.setup_field == SetupField::Mode,
    ));
    lines.push(Line::from(""));

    let length = format!("{} questions", state.config.length);
    lines.push(selector_line(
        "  Length:     ",
        &length,
        focus(SetupField::Length),
        state.setup_field == SetupField::Length,
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(""));

    let start_style = if state.setup_field == SetupField::Start {
        Style::default()
            .fg(Color::Black)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("[ Start Quiz ]", start_style),
    ]));

    if let Some(notice) = &state.notice {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", notice),
            Style::default().fg(palette.wrong),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" New Quiz ");
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}

fn selector_line<'a>(label: &'a str, value: &str, style: Style, focused: bool) -> Line<'a> {
    let arrows = if focused { "◂ " } else { "  " };
    let arrows_end = if focused { " ▸" } else { "" };
    Line::from(vec![
        Span::styled(label, style),
        Span::raw(arrows),
        Span::styled(value.to_string(), style),
        Span::raw(arrows_end),
    ])
}

fn draw_loading(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Loading quiz...",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Generating {} {} questions about \"{}\"",
                state.config.length,
                state
                    .config
                    .difficulty
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                state.config.topic.trim()
            ),
            Style::default().fg(palette.sub_text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc] Cancel",
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
