pub mod helper;
pub mod keybar;
pub mod layout;
pub mod markdown;
pub mod question;
pub mod result;
pub mod setup;
pub mod theme;
pub mod titlebar;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area, state.helper_available());

    titlebar::draw_titlebar(f, layout.titlebar, state);

    match state.screen {
        Screen::Setup => setup::draw_setup(f, layout.main, state),
        Screen::Quiz => {
            question::draw_question(f, layout.main, state);
            if let Some(helper_area) = layout.helper {
                helper::draw_helper(f, helper_area, state);
            }
        }
        Screen::Results => result::draw_results(f, layout.main, state),
    }

    keybar::draw_keybar(f, layout.keybar, state);
}
