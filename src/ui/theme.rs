use ratatui::style::Color;

use crate::state::Theme;

/// Color palette derived from the active theme. Mirrors the light/dark
/// palettes of the web client this replaces.
pub struct Palette {
    pub text: Color,
    pub sub_text: Color,
    pub accent: Color,
    pub correct: Color,
    pub wrong: Color,
    pub border: Color,
    pub bar_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                text: Color::White,
                sub_text: Color::Gray,
                accent: Color::Rgb(255, 159, 67),
                correct: Color::Green,
                wrong: Color::Red,
                border: Color::DarkGray,
                bar_bg: Color::Rgb(30, 30, 30),
            },
            Theme::Dark => Palette {
                text: Color::Rgb(229, 231, 235),
                sub_text: Color::Rgb(156, 163, 175),
                accent: Color::Rgb(139, 92, 246),
                correct: Color::Rgb(22, 163, 74),
                wrong: Color::Rgb(220, 38, 38),
                border: Color::Rgb(55, 65, 81),
                bar_bg: Color::Rgb(17, 24, 39),
            },
        }
    }
}
