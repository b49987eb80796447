//! Render the helper's markdown answer into ratatui lines.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub fn markdown_to_lines(text: &str, accent: Color) -> Vec<Line<'static>> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = Renderer {
        accent,
        lines: Vec::new(),
        spans: Vec::new(),
        styles: vec![Style::default()],
        in_code_block: false,
    };

    for event in Parser::new_ext(text, opts) {
        out.event(event);
    }
    out.flush_line();
    out.lines
}

struct Renderer {
    accent: Color,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    styles: Vec<Style>,
    in_code_block: bool,
}

impl Renderer {
    fn style(&self) -> Style {
        *self.styles.last().unwrap_or(&Style::default())
    }

    fn flush_line(&mut self) {
        if !self.spans.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) => self.spans.clear(),
            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                self.lines.push(Line::from(""));
            }
            Event::Start(Tag::Strong) => {
                let s = self.style().add_modifier(Modifier::BOLD);
                self.styles.push(s);
            }
            Event::End(TagEnd::Strong) => {
                self.styles.pop();
            }
            Event::Start(Tag::Emphasis) => {
                let s = self.style().add_modifier(Modifier::ITALIC);
                self.styles.push(s);
            }
            Event::End(TagEnd::Emphasis) => {
                self.styles.pop();
            }
            Event::Start(Tag::Item) => {
                self.spans.clear();
                self.spans.push(Span::raw("  • "));
            }
            Event::End(TagEnd::Item) => self.flush_line(),
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush_line();
                let prefix = match level {
                    HeadingLevel::H1 => "# ",
                    HeadingLevel::H2 => "## ",
                    _ => "### ",
                };
                self.spans.push(Span::styled(
                    prefix.to_string(),
                    Style::default()
                        .fg(self.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                self.styles.push(
                    Style::default()
                        .fg(self.accent)
                        .add_modifier(Modifier::BOLD),
                );
            }
            Event::End(TagEnd::Heading(_)) => {
                self.styles.pop();
                self.flush_line();
                self.lines.push(Line::from(""));
            }
            Event::Start(Tag::CodeBlock(_)) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.lines.push(Line::from(""));
            }
            Event::Text(text) => {
                if self.in_code_block {
                    for code_line in text.lines() {
                        self.lines.push(Line::from(Span::styled(
                            format!("  {}", code_line),
                            Style::default().fg(Color::Green),
                        )));
                    }
                } else {
                    self.spans
                        .push(Span::styled(text.to_string(), self.style()));
                }
            }
            Event::Code(code) => {
                self.spans.push(Span::styled(
                    format!("`{}`", code),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Event::SoftBreak | Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            _ => {}
        }
    }
}
