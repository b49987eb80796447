use std::fmt;

use serde::{Deserialize, Serialize};

/// Quiz lengths the backend accepts.
pub const QUIZ_LENGTHS: [usize; 3] = [5, 10, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No stopwatch; the helper panel is available.
    Casual,
    /// Stopwatch runs; no helper panel.
    Competitive,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Casual => write!(f, "casual"),
            Mode::Competitive => write!(f, "competitive"),
        }
    }
}

/// One generated question as delivered by the backend. Immutable once
/// received; field names follow the service's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Whether the option at `idx` matches the correct answer under
    /// case-insensitive, whitespace-trimmed comparison. A `correct_answer`
    /// that matches no option makes every index wrong; never panics.
    pub fn is_correct(&self, idx: usize) -> bool {
        match self.options.get(idx) {
            Some(opt) => answers_match(opt, &self.correct_answer),
            None => false,
        }
    }

    /// Index of the correct option, if the backend data is well formed.
    pub fn correct_index(&self) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.is_correct(i))
    }
}

pub fn answers_match(a: &str, b: &str) -> bool {
    let a = a.trim();
    let b = b.trim();
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

/// Setup-screen configuration. Created and edited only while in Setup;
/// retained across an exit back to Setup so the user's last inputs stay
/// visible.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub topic: String,
    pub difficulty: Option<Difficulty>,
    pub mode: Mode,
    pub length: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            topic: String::new(),
            difficulty: None,
            mode: Mode::Casual,
            length: QUIZ_LENGTHS[0],
        }
    }
}

impl QuizConfig {
    /// Local validation performed before anything is sent over the network.
    pub fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("Please enter a topic".to_string());
        }
        if self.difficulty.is_none() {
            return Err("Please select a difficulty level".to_string());
        }
        Ok(())
    }

    pub fn to_request(&self) -> Option<QuizRequest> {
        Some(QuizRequest {
            topic: self.topic.trim().to_string(),
            difficulty: self.difficulty?,
            number_of_questions: self.length,
            mode: self.mode,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub number_of_questions: usize,
    pub mode: Mode,
}

#[derive(Debug, Deserialize)]
pub struct QuizResponse {
    /// Missing or null `questions` is a valid zero-length quiz.
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub mode: Mode,
    pub user_question: String,
    pub current_question_text: String,
}

#[derive(Debug, Deserialize)]
pub struct HelperResponse {
    #[serde(default)]
    pub answer: Option<String>,
}
