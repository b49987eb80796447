//! Lifecycle tests for the fetch/teardown paths, exercised through
//! `AppState` without any network or terminal.

use quizzao::model::{Difficulty, Mode, Question, QuizConfig};
use quizzao::service::ServiceError;
use quizzao::state::{AppState, Screen, Theme};

fn state_with(mode: Mode) -> AppState {
    let config = QuizConfig {
        topic: "rivers of europe".to_string(),
        difficulty: Some(Difficulty::Medium),
        mode,
        length: 5,
    };
    AppState::new(config, Theme::Dark)
}

fn questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| Question {
            text: format!("Question {}", i),
            options: vec!["right".to_string(), "wrong".to_string()],
            correct_answer: "right".to_string(),
            explanation: String::new(),
        })
        .collect()
}

#[test]
fn test_stale_fetch_never_resurrects_a_session() {
    let mut state = state_with(Mode::Casual);
    let (token, request) = state.begin_quiz_fetch().unwrap();

    state.exit_to_setup();
    state.apply_quiz_fetch(token, request.mode, Ok(questions(5)));

    assert_eq!(state.screen, Screen::Setup);
    assert!(state.session.is_none());
}

#[test]
fn test_newer_fetch_wins_over_older_one() {
    let mut state = state_with(Mode::Casual);
    let (old_token, old_request) = state.begin_quiz_fetch().unwrap();

    // User cancels and retries; the retry is the live generation.
    state.exit_to_setup();
    let (new_token, new_request) = state.begin_quiz_fetch().unwrap();
    assert_ne!(old_token, new_token);

    state.apply_quiz_fetch(old_token, old_request.mode, Ok(questions(1)));
    assert_eq!(state.screen, Screen::Setup);

    state.apply_quiz_fetch(new_token, new_request.mode, Ok(questions(5)));
    assert_eq!(state.screen, Screen::Quiz);
    assert_eq!(state.session.as_ref().unwrap().len(), 5);
}

#[test]
fn test_casual_mode_reports_no_elapsed_time() {
    let mut state = state_with(Mode::Casual);
    let (token, request) = state.begin_quiz_fetch().unwrap();
    state.apply_quiz_fetch(token, request.mode, Ok(questions(1)));

    assert!(!state.stopwatch.is_running());
    assert_eq!(state.stopwatch.elapsed_ms(), 0);

    state.select_option(0);
    state.next_question();
    assert_eq!(state.screen, Screen::Results);
    assert_eq!(state.stopwatch.elapsed_ms(), 0);
}

#[test]
fn test_competitive_mode_runs_and_stops_the_clock() {
    let mut state = state_with(Mode::Competitive);
    let (token, request) = state.begin_quiz_fetch().unwrap();
    state.apply_quiz_fetch(token, request.mode, Ok(questions(1)));
    assert!(state.stopwatch.is_running());

    state.select_option(0);
    state.next_question();
    assert_eq!(state.screen, Screen::Results);
    assert!(!state.stopwatch.is_running());
}

#[test]
fn test_fetch_error_keeps_setup_and_reenables_trigger() {
    let mut state = state_with(Mode::Casual);
    let (token, request) = state.begin_quiz_fetch().unwrap();
    state.apply_quiz_fetch(
        token,
        request.mode,
        Err(ServiceError::Backend("quota exceeded".to_string())),
    );

    assert_eq!(state.screen, Screen::Setup);
    assert!(state.notice.as_deref().unwrap().contains("quota exceeded"));
    // A new fetch may be started after the failure.
    assert!(state.begin_quiz_fetch().is_some());
}

#[test]
fn test_helper_answer_does_not_disturb_quiz_state() {
    let mut state = state_with(Mode::Casual);
    let (token, request) = state.begin_quiz_fetch().unwrap();
    state.apply_quiz_fetch(token, request.mode, Ok(questions(2)));

    state.select_option(0);
    state.helper_input = "tell me more".to_string();
    let (ask_token, ask_request) = state.begin_helper_ask().unwrap();
    assert_eq!(ask_request.user_question, "tell me more");
    assert_eq!(ask_request.current_question_text, "Question 0");

    state.apply_helper_response(ask_token, Ok("**More.**".to_string()));
    assert_eq!(state.helper_answer.as_deref(), Some("**More.**"));

    let session = state.session.as_ref().unwrap();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.score(), 1);
    assert_eq!(state.screen, Screen::Quiz);
}
