use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::Mode;
use crate::state::{AppState, Screen};
use crate::stopwatch::format_elapsed;
use crate::ui::theme::Palette;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = Palette::for_theme(state.theme);

    let title = if state.config.topic.trim().is_empty() || state.screen == Screen::Setup {
        "[ Quizzao ]".to_string()
    } else {
        format!("[ Quizzao — {} ]", state.config.topic.trim())
    };

    let clock = if state.screen == Screen::Quiz && state.quiz_mode == Mode::Competitive {
        format!(" {} ", format_elapsed(state.stopwatch.elapsed()))
    } else {
        String::new()
    };

    let available = area.width as usize;
    let title_len = title.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + clock.chars().count());

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(right_pad)),
        Span::styled(clock, Style::default().fg(palette.accent)),
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(palette.bar_bg))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
