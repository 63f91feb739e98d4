use crate::model::Question;

//
// ─── PER-QUESTION STATE ────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Answer {
    #[default]
    Unanswered,
    Answered(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackVisibility {
    #[default]
    Hidden,
    Revealed,
}

/// Answer crossed with feedback visibility for one question.
///
/// Both halves move independently. Visibility only ever moves forward to
/// `Revealed`; the answer can be replaced at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionState {
    answer: Answer,
    visibility: FeedbackVisibility,
}

impl QuestionState {
    pub fn select(&mut self, label: impl Into<String>) {
        self.answer = Answer::Answered(label.into());
    }

    pub fn reveal(&mut self) {
        self.visibility = FeedbackVisibility::Revealed;
    }

    #[must_use]
    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    #[must_use]
    pub fn visibility(&self) -> FeedbackVisibility {
        self.visibility
    }

    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        match &self.answer {
            Answer::Unanswered => None,
            Answer::Answered(label) => Some(label.as_str()),
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.visibility == FeedbackVisibility::Revealed
    }

    #[must_use]
    pub fn is_chosen(&self, label: &str) -> bool {
        self.selected_label() == Some(label)
    }

    /// Feedback text to display for `question` right now.
    ///
    /// Derived on every call so a changed answer never leaves stale text.
    #[must_use]
    pub fn visible_feedback<'q>(&self, question: &'q Question) -> Option<&'q str> {
        if !self.is_revealed() {
            return None;
        }
        self.selected_label()
            .and_then(|label| question.feedback_for(label))
    }
}

//
// ─── ALL QUESTIONS ─────────────────────────────────────────────────────────────
//

/// Selection and reveal state for every self-reflection question, indexed
/// by list position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReflectionState {
    questions: Vec<QuestionState>,
}

impl ReflectionState {
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            questions: vec![QuestionState::default(); question_count],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Records `label` as the answer to question `index`, replacing any
    /// earlier choice. Returns `false` and changes nothing when the index is
    /// out of range.
    pub fn select_option(&mut self, index: usize, label: impl Into<String>) -> bool {
        match self.questions.get_mut(index) {
            Some(state) => {
                state.select(label);
                true
            }
            None => false,
        }
    }

    /// Marks question `index` as revealed. Idempotent. Returns `false` when
    /// the index is out of range.
    pub fn reveal_feedback(&mut self, index: usize) -> bool {
        match self.questions.get_mut(index) {
            Some(state) => {
                state.reveal();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuestionState> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn visible_feedback<'q>(&self, index: usize, question: &'q Question) -> Option<&'q str> {
        self.question(index)
            .and_then(|state| state.visible_feedback(question))
    }
}
