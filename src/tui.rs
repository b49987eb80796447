use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::model::{HelperRequest, Mode, Question, QuizRequest};
use crate::service::{QuizService, ServiceError};
use crate::state::{AppState, QuizFocus, Screen, SetupField};

/// Outcomes delivered from worker threads back to the UI loop. Each carries
/// the generation token it was spawned with; stale ones are ignored by the
/// state layer.
#[derive(Debug)]
pub enum FetchEvent {
    Quiz {
        generation: u64,
        mode: Mode,
        result: Result<Vec<Question>, ServiceError>,
    },
    Helper {
        generation: u64,
        result: Result<String, ServiceError>,
    },
}

pub fn run_tui(mut state: AppState, service: QuizService) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let (fetch_tx, fetch_rx) = mpsc::channel::<FetchEvent>();

    let result = main_loop(&mut terminal, &mut state, &service, &fetch_rx, &fetch_tx);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    service: &QuizService,
    fetch_rx: &mpsc::Receiver<FetchEvent>,
    fetch_tx: &mpsc::Sender<FetchEvent>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        // The 100ms poll doubles as the stopwatch display tick.
        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                handle_key(key, state, service, fetch_tx);
            }
        }

        while let Ok(ev) = fetch_rx.try_recv() {
            handle_fetch(ev, state);
        }
    }

    Ok(())
}

fn handle_fetch(event: FetchEvent, state: &mut AppState) {
    match event {
        FetchEvent::Quiz {
            generation,
            mode,
            result,
        } => {
            state.apply_quiz_fetch(generation, mode, result);
        }
        FetchEvent::Helper { generation, result } => {
            state.apply_helper_response(generation, result);
        }
    }
}

fn handle_key(
    key: KeyEvent,
    state: &mut AppState,
    service: &QuizService,
    fetch_tx: &mpsc::Sender<FetchEvent>,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global bindings
    if ctrl {
        match key.code {
            KeyCode::Char('q') => {
                state.should_quit = true;
                return;
            }
            KeyCode::Char('t') => {
                state.theme = state.theme.toggle();
                return;
            }
            _ => {}
        }
    }

    match state.screen {
        Screen::Setup => handle_setup_key(key, state, service, fetch_tx),
        Screen::Quiz => handle_quiz_key(key, state, service, fetch_tx),
        Screen::Results => handle_results_key(key, state),
    }
}

fn handle_setup_key(
    key: KeyEvent,
    state: &mut AppState,
    service: &QuizService,
    fetch_tx: &mpsc::Sender<FetchEvent>,
) {
    if state.quiz_loading {
        // Only escape hatch while a fetch is in flight; the late response
        // is discarded by its generation token.
        if key.code == KeyCode::Esc {
            state.exit_to_setup();
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.setup_field = state.setup_field.next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.setup_field = state.setup_field.prev();
            return;
        }
        _ => {}
    }

    match state.setup_field {
        SetupField::Topic => match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.config.topic.insert(state.topic_cursor, c);
                state.topic_cursor += c.len_utf8();
            }
            KeyCode::Backspace => {
                if state.topic_cursor > 0 {
                    let prev = prev_char_boundary(&state.config.topic, state.topic_cursor);
                    state.config.topic.remove(prev);
                    state.topic_cursor = prev;
                }
            }
            KeyCode::Left => {
                if state.topic_cursor > 0 {
                    state.topic_cursor =
                        prev_char_boundary(&state.config.topic, state.topic_cursor);
                }
            }
            KeyCode::Right => {
                if state.topic_cursor < state.config.topic.len() {
                    state.topic_cursor =
                        next_char_boundary(&state.config.topic, state.topic_cursor);
                }
            }
            KeyCode::Home => state.topic_cursor = 0,
            KeyCode::End => state.topic_cursor = state.config.topic.len(),
            KeyCode::Enter => state.setup_field = state.setup_field.next(),
            _ => {}
        },
        SetupField::Difficulty => match key.code {
            KeyCode::Left => state.cycle_difficulty(false),
            KeyCode::Right | KeyCode::Char(' ') => state.cycle_difficulty(true),
            KeyCode::Enter => state.setup_field = state.setup_field.next(),
            _ => {}
        },
        SetupField::Mode => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => state.cycle_mode(),
            KeyCode::Enter => state.setup_field = state.setup_field.next(),
            _ => {}
        },
        SetupField::Length => match key.code {
            KeyCode::Left => state.cycle_length(false),
            KeyCode::Right | KeyCode::Char(' ') => state.cycle_length(true),
            KeyCode::Enter => state.setup_field = state.setup_field.next(),
            _ => {}
        },
        SetupField::Start => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                start_quiz_fetch(state, service, fetch_tx);
            }
        }
    }
}

fn handle_quiz_key(
    key: KeyEvent,
    state: &mut AppState,
    service: &QuizService,
    fetch_tx: &mpsc::Sender<FetchEvent>,
) {
    let empty_quiz = state.session.as_ref().is_none_or(|s| s.is_empty());
    if empty_quiz {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            state.exit_to_setup();
        }
        return;
    }

    if key.code == KeyCode::Esc {
        if state.quiz_focus == QuizFocus::Helper {
            state.quiz_focus = QuizFocus::Quiz;
        } else {
            state.exit_to_setup();
        }
        return;
    }

    if key.code == KeyCode::Tab && state.helper_available() {
        state.quiz_focus = match state.quiz_focus {
            QuizFocus::Quiz => QuizFocus::Helper,
            QuizFocus::Helper => QuizFocus::Quiz,
        };
        return;
    }

    match state.quiz_focus {
        QuizFocus::Quiz => handle_question_key(key, state),
        QuizFocus::Helper => handle_helper_key(key, state, service, fetch_tx),
    }
}

fn handle_question_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(c)
            if c.is_ascii_lowercase() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            let idx = (c as u8 - b'a') as usize;
            state.select_option(idx);
        }
        KeyCode::Right | KeyCode::Enter => {
            state.next_question();
        }
        KeyCode::Left => {
            state.previous_question();
        }
        _ => {}
    }
}

fn handle_helper_key(
    key: KeyEvent,
    state: &mut AppState,
    service: &QuizService,
    fetch_tx: &mpsc::Sender<FetchEvent>,
) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.helper_input.insert(state.helper_cursor, c);
            state.helper_cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if state.helper_cursor > 0 {
                let prev = prev_char_boundary(&state.helper_input, state.helper_cursor);
                state.helper_input.remove(prev);
                state.helper_cursor = prev;
            }
        }
        KeyCode::Left => {
            if state.helper_cursor > 0 {
                state.helper_cursor = prev_char_boundary(&state.helper_input, state.helper_cursor);
            }
        }
        KeyCode::Right => {
            if state.helper_cursor < state.helper_input.len() {
                state.helper_cursor = next_char_boundary(&state.helper_input, state.helper_cursor);
            }
        }
        KeyCode::Home => state.helper_cursor = 0,
        KeyCode::End => state.helper_cursor = state.helper_input.len(),
        KeyCode::Enter => {
            if let Some((generation, request)) = state.begin_helper_ask() {
                spawn_helper_ask(service.clone(), request, generation, fetch_tx.clone());
            }
        }
        _ => {}
    }
}

fn handle_results_key(key: KeyEvent, state: &mut AppState) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r')) {
        state.exit_to_setup();
    }
}

fn start_quiz_fetch(
    state: &mut AppState,
    service: &QuizService,
    fetch_tx: &mpsc::Sender<FetchEvent>,
) {
    if let Some((generation, request)) = state.begin_quiz_fetch() {
        spawn_quiz_fetch(service.clone(), request, generation, fetch_tx.clone());
    }
}

fn spawn_quiz_fetch(
    service: QuizService,
    request: QuizRequest,
    generation: u64,
    tx: mpsc::Sender<FetchEvent>,
) {
    thread::spawn(move || {
        let mode = request.mode;
        let result = service.generate_quiz(&request);
        let _ = tx.send(FetchEvent::Quiz {
            generation,
            mode,
            result,
        });
    });
}

fn spawn_helper_ask(
    service: QuizService,
    request: HelperRequest,
    generation: u64,
    tx: mpsc::Sender<FetchEvent>,
) {
    thread::spawn(move || {
        let result = service.ask_helper(&request);
        let _ = tx.send(FetchEvent::Helper { generation, result });
    });
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    let mut idx = from.saturating_sub(1);
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    let mut idx = (from + 1).min(s.len());
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
