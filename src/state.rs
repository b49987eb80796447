use crate::model::{
    Difficulty, HelperRequest, Mode, Question, QuizConfig, QuizRequest, QUIZ_LENGTHS,
};
use crate::service::{ServiceError, HELPER_UNAVAILABLE};
use crate::session::{Advance, QuizSession};
use crate::stopwatch::Stopwatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Quiz,
    Results,
}

/// Focusable fields on the Setup screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Topic,
    Difficulty,
    Mode,
    Length,
    Start,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Topic => SetupField::Difficulty,
            SetupField::Difficulty => SetupField::Mode,
            SetupField::Mode => SetupField::Length,
            SetupField::Length => SetupField::Start,
            SetupField::Start => SetupField::Topic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Topic => SetupField::Start,
            SetupField::Difficulty => SetupField::Topic,
            SetupField::Mode => SetupField::Difficulty,
            SetupField::Length => SetupField::Mode,
            SetupField::Start => SetupField::Length,
        }
    }
}

/// Which panel owns keyboard input during a casual-mode quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFocus {
    Quiz,
    Helper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct AppState {
    pub screen: Screen,
    pub config: QuizConfig,
    pub setup_field: SetupField,
    pub topic_cursor: usize,
    /// Validation or fetch error shown on the Setup screen.
    pub notice: Option<String>,

    pub quiz_loading: bool,
    fetch_generation: u64,
    pub session: Option<QuizSession>,
    /// Mode locked in when the running quiz was fetched; the Setup form may
    /// have changed since.
    pub quiz_mode: Mode,
    pub stopwatch: Stopwatch,

    pub quiz_focus: QuizFocus,
    pub helper_input: String,
    pub helper_cursor: usize,
    pub helper_answer: Option<String>,
    pub helper_loading: bool,
    helper_generation: u64,

    pub theme: Theme,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: QuizConfig, theme: Theme) -> Self {
        let topic_cursor = config.topic.len();
        Self {
            screen: Screen::Setup,
            config,
            setup_field: SetupField::Topic,
            topic_cursor,
            notice: None,
            quiz_loading: false,
            fetch_generation: 0,
            session: None,
            quiz_mode: Mode::Casual,
            stopwatch: Stopwatch::new(),
            quiz_focus: QuizFocus::Quiz,
            helper_input: String::new(),
            helper_cursor: 0,
            helper_answer: None,
            helper_loading: false,
            helper_generation: 0,
            theme,
            should_quit: false,
        }
    }

    // --- quiz fetch lifecycle -------------------------------------------

    /// Validate the form and hand out a request plus its generation token.
    /// Returns None (with a notice where appropriate) when a fetch is
    /// already in flight or validation fails; fetches are serialized by
    /// refusing to start a second one.
    pub fn begin_quiz_fetch(&mut self) -> Option<(u64, QuizRequest)> {
        if self.quiz_loading {
            return None;
        }
        if let Err(message) = self.config.validate() {
            self.notice = Some(message);
            return None;
        }
        let request = self.config.to_request()?;
        self.notice = None;
        self.quiz_loading = true;
        self.fetch_generation += 1;
        Some((self.fetch_generation, request))
    }

    /// Apply a quiz-fetch outcome. Responses carrying a stale generation
    /// token are discarded wholesale; a late response must not resurrect a
    /// session the user already left.
    pub fn apply_quiz_fetch(
        &mut self,
        token: u64,
        mode: Mode,
        result: Result<Vec<Question>, ServiceError>,
    ) {
        if token != self.fetch_generation {
            return;
        }
        self.quiz_loading = false;
        match result {
            Ok(questions) => {
                self.install_session(questions, mode);
            }
            Err(err) => {
                self.notice = Some(format!("Error fetching quiz: {}", err));
                self.screen = Screen::Setup;
            }
        }
    }

    /// Atomically replace all per-session state. An empty question list is
    /// installed too; the quiz screen renders it as "no questions".
    fn install_session(&mut self, questions: Vec<Question>, mode: Mode) {
        self.session = Some(QuizSession::new(questions));
        self.quiz_mode = mode;
        self.quiz_focus = QuizFocus::Quiz;
        self.helper_input.clear();
        self.helper_cursor = 0;
        self.helper_answer = None;
        self.helper_loading = false;
        self.helper_generation += 1;
        self.stopwatch.reset();
        if mode == Mode::Competitive {
            self.stopwatch.start();
        }
        self.screen = Screen::Quiz;
        self.notice = None;
    }

    /// Discard the session and return to Setup. Topic and difficulty stay
    /// as the user last entered them. Bumping both generations makes any
    /// in-flight response inert.
    pub fn exit_to_setup(&mut self) {
        self.fetch_generation += 1;
        self.helper_generation += 1;
        self.quiz_loading = false;
        self.session = None;
        self.stopwatch.reset();
        self.helper_input.clear();
        self.helper_cursor = 0;
        self.helper_answer = None;
        self.helper_loading = false;
        self.quiz_focus = QuizFocus::Quiz;
        self.screen = Screen::Setup;
        self.setup_field = SetupField::Topic;
        self.topic_cursor = self.config.topic.len();
    }

    // --- in-quiz events --------------------------------------------------

    pub fn select_option(&mut self, option: usize) {
        if self.screen != Screen::Quiz {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.select(option);
        }
    }

    pub fn next_question(&mut self) {
        if self.screen != Screen::Quiz {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.next() == Advance::Finished {
            self.stopwatch.stop();
            self.screen = Screen::Results;
        }
    }

    pub fn previous_question(&mut self) {
        if self.screen != Screen::Quiz {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.previous();
        }
    }

    // --- helper panel ----------------------------------------------------

    pub fn helper_available(&self) -> bool {
        self.screen == Screen::Quiz && self.quiz_mode == Mode::Casual
    }

    /// Hand out a helper request plus its generation token. Casual mode
    /// only; requires a non-empty question and no ask already in flight.
    pub fn begin_helper_ask(&mut self) -> Option<(u64, HelperRequest)> {
        if !self.helper_available() || self.helper_loading {
            return None;
        }
        let user_question = self.helper_input.trim();
        if user_question.is_empty() {
            return None;
        }
        let current_question_text = self
            .session
            .as_ref()
            .and_then(|s| s.current_question())
            .map(|q| q.text.clone())
            .unwrap_or_else(|| self.config.topic.clone());
        let request = HelperRequest {
            topic: self.config.topic.clone(),
            difficulty: self.config.difficulty.unwrap_or(Difficulty::Medium),
            mode: self.quiz_mode,
            user_question: user_question.to_string(),
            current_question_text,
        };
        self.helper_answer = None;
        self.helper_loading = true;
        self.helper_generation += 1;
        Some((self.helper_generation, request))
    }

    /// Helper outcomes never touch quiz session state; failures degrade to
    /// a fixed friendly message.
    pub fn apply_helper_response(&mut self, token: u64, result: Result<String, ServiceError>) {
        if token != self.helper_generation {
            return;
        }
        self.helper_loading = false;
        self.helper_answer = Some(match result {
            Ok(answer) => answer,
            Err(_) => HELPER_UNAVAILABLE.to_string(),
        });
    }

    // --- setup form ------------------------------------------------------

    pub fn cycle_difficulty(&mut self, forward: bool) {
        let all = Difficulty::ALL;
        let next = match self.config.difficulty {
            None => {
                if forward {
                    all[0]
                } else {
                    all[all.len() - 1]
                }
            }
            Some(current) => {
                let pos = all.iter().position(|&d| d == current).unwrap_or(0);
                if forward {
                    all[(pos + 1) % all.len()]
                } else {
                    all[(pos + all.len() - 1) % all.len()]
                }
            }
        };
        self.config.difficulty = Some(next);
    }

    pub fn cycle_mode(&mut self) {
        self.config.mode = match self.config.mode {
            Mode::Casual => Mode::Competitive,
            Mode::Competitive => Mode::Casual,
        };
    }

    pub fn cycle_length(&mut self, forward: bool) {
        let pos = QUIZ_LENGTHS
            .iter()
            .position(|&l| l == self.config.length)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % QUIZ_LENGTHS.len()
        } else {
            (pos + QUIZ_LENGTHS.len() - 1) % QUIZ_LENGTHS.len()
        };
        self.config.length = QUIZ_LENGTHS[next];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state(mode: Mode) -> AppState {
        let config = QuizConfig {
            topic: "geography".to_string(),
            difficulty: Some(Difficulty::Easy),
            mode,
            length: 5,
        };
        AppState::new(config, Theme::Light)
    }

    fn one_question() -> Vec<Question> {
        vec![Question {
            text: "Capital of France?".to_string(),
            options: vec!["Paris".to_string(), "London".to_string()],
            correct_answer: "Paris".to_string(),
            explanation: String::new(),
        }]
    }

    #[test]
    fn fetch_is_serialized_while_in_flight() {
        let mut state = ready_state(Mode::Casual);
        let first = state.begin_quiz_fetch();
        assert!(first.is_some());
        assert!(state.quiz_loading);
        assert!(state.begin_quiz_fetch().is_none());
    }

    #[test]
    fn validation_failure_stays_in_setup_with_notice() {
        let mut state = ready_state(Mode::Casual);
        state.config.topic.clear();
        assert!(state.begin_quiz_fetch().is_none());
        assert!(state.notice.is_some());
        assert_eq!(state.screen, Screen::Setup);
        assert!(!state.quiz_loading);
    }

    #[test]
    fn stale_fetch_response_is_discarded_after_exit() {
        let mut state = ready_state(Mode::Casual);
        let (token, request) = state.begin_quiz_fetch().unwrap();

        // User leaves before the response arrives.
        state.exit_to_setup();
        state.apply_quiz_fetch(token, request.mode, Ok(one_question()));

        assert_eq!(state.screen, Screen::Setup);
        assert!(state.session.is_none());
        assert!(!state.quiz_loading);
    }

    #[test]
    fn successful_fetch_installs_session_atomically() {
        let mut state = ready_state(Mode::Competitive);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(token, request.mode, Ok(one_question()));

        assert_eq!(state.screen, Screen::Quiz);
        assert!(state.stopwatch.is_running());
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn failed_fetch_surfaces_message_and_commits_nothing() {
        let mut state = ready_state(Mode::Casual);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(
            token,
            request.mode,
            Err(ServiceError::Backend("model overloaded".to_string())),
        );

        assert_eq!(state.screen, Screen::Setup);
        assert!(state.session.is_none());
        let notice = state.notice.unwrap();
        assert!(notice.contains("model overloaded"));
    }

    #[test]
    fn empty_question_list_is_a_valid_quiz() {
        let mut state = ready_state(Mode::Casual);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(token, request.mode, Ok(Vec::new()));

        assert_eq!(state.screen, Screen::Quiz);
        assert!(state.session.as_ref().unwrap().is_empty());
    }

    #[test]
    fn stopwatch_is_inert_in_casual_mode() {
        let mut state = ready_state(Mode::Casual);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(token, request.mode, Ok(one_question()));

        assert!(!state.stopwatch.is_running());
        assert_eq!(state.stopwatch.elapsed_ms(), 0);
    }

    #[test]
    fn finishing_last_question_stops_the_clock() {
        let mut state = ready_state(Mode::Competitive);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(token, request.mode, Ok(one_question()));

        state.select_option(0);
        state.next_question();

        assert_eq!(state.screen, Screen::Results);
        assert!(!state.stopwatch.is_running());
        assert_eq!(state.session.as_ref().unwrap().score(), 1);
    }

    #[test]
    fn exit_retains_topic_and_difficulty() {
        let mut state = ready_state(Mode::Casual);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(token, request.mode, Ok(one_question()));

        state.exit_to_setup();
        assert_eq!(state.config.topic, "geography");
        assert_eq!(state.config.difficulty, Some(Difficulty::Easy));
        assert!(state.session.is_none());
    }

    #[test]
    fn helper_requires_casual_mode() {
        let mut state = ready_state(Mode::Competitive);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(token, request.mode, Ok(one_question()));

        state.helper_input = "why?".to_string();
        assert!(state.begin_helper_ask().is_none());
    }

    #[test]
    fn stale_helper_response_is_discarded() {
        let mut state = ready_state(Mode::Casual);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(token, request.mode, Ok(one_question()));

        state.helper_input = "why is Paris the capital?".to_string();
        let (ask_token, _request) = state.begin_helper_ask().unwrap();
        state.exit_to_setup();
        state.apply_helper_response(ask_token, Ok("because".to_string()));

        assert!(state.helper_answer.is_none());
        assert!(!state.helper_loading);
    }

    #[test]
    fn helper_failure_yields_fixed_fallback() {
        let mut state = ready_state(Mode::Casual);
        let (token, request) = state.begin_quiz_fetch().unwrap();
        state.apply_quiz_fetch(token, request.mode, Ok(one_question()));

        state.helper_input = "hm".to_string();
        let (ask_token, _request) = state.begin_helper_ask().unwrap();
        state.apply_helper_response(
            ask_token,
            Err(ServiceError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY)),
        );

        assert_eq!(state.helper_answer.as_deref(), Some(HELPER_UNAVAILABLE));
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
    }
}
