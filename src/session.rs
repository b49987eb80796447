//! Quiz session state machine: answer ledger, scoring, navigation.
//!
//! Kept free of any terminal or network dependency so the whole machine is
//! testable on its own. Display state (selected option, feedback shown) is
//! derived from the ledger rather than stored, so revisiting a question
//! restores it automatically.

use crate::model::Question;

/// Per-question record of which option (if any) the user selected.
/// Dense over `[0, len)`; recording overwrites any prior entry.
#[derive(Debug, Clone)]
pub struct AnswerLedger {
    entries: Vec<Option<usize>>,
}

impl AnswerLedger {
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `option` for question `index`. Overwrites, never accumulates.
    /// Returns false when `index` is out of bounds.
    pub fn record(&mut self, index: usize, option: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = Some(option);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.entries.get(index).copied().flatten()
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.get(index).is_some()
    }
}

/// Score as a pure function of the ledger. Each question contributes at
/// most once no matter how often its entry was overwritten, so the
/// double-count bug class of an incremental counter cannot occur.
pub fn score(questions: &[Question], ledger: &AnswerLedger) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(i, q)| ledger.get(*i).is_some_and(|opt| q.is_correct(opt)))
        .count()
}

/// Outcome of a forward navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question.
    Moved,
    /// Was on the last question; the session is now finished.
    Finished,
    /// Current question has not been answered yet.
    Blocked,
}

/// One attempt at a generated quiz, from the first question to the results
/// view. Owns the question sequence exclusively; replaced wholesale when a
/// new quiz is fetched.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    ledger: AnswerLedger,
    current: usize,
    finished: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let ledger = AnswerLedger::new(questions.len());
        Self {
            questions,
            ledger,
            current: 0,
            finished: false,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Ledger entry for the question currently on screen.
    pub fn selected_option(&self) -> Option<usize> {
        self.ledger.get(self.current)
    }

    /// Feedback (correctness + explanation) is shown as soon as the current
    /// question has a recorded answer.
    pub fn feedback_visible(&self) -> bool {
        self.ledger.is_answered(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn score(&self) -> usize {
        score(&self.questions, &self.ledger)
    }

    /// Select an option for the current question. Rejected once feedback is
    /// shown (answers lock on reveal) and for out-of-bounds option indices.
    pub fn select(&mut self, option: usize) -> bool {
        if self.finished || self.feedback_visible() {
            return false;
        }
        let Some(question) = self.questions.get(self.current) else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }
        self.ledger.record(self.current, option)
    }

    /// Forward navigation is gated on feedback being visible. A question
    /// with no options can never show feedback, so it is auto-skippable
    /// instead of a permanent dead-end.
    pub fn can_advance(&self) -> bool {
        if self.finished || self.questions.is_empty() {
            return false;
        }
        self.feedback_visible()
            || self
                .current_question()
                .is_some_and(|q| q.options.is_empty())
    }

    pub fn next(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Advance::Moved
        } else {
            self.finished = true;
            Advance::Finished
        }
    }

    /// No-op at index 0 or after finishing.
    pub fn previous(&mut self) -> bool {
        if self.finished || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }
}
