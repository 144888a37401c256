use super::answers::{AnswerSheet, AnswerSheetError, AnswerValue};
use super::scoring::{ScoringEngine, ScoringError, StressAssessment};
use serde::Serialize;

/// Where a respondent is in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    Collecting { current: usize },
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Answer(#[from] AnswerSheetError),
    #[error("question {} must be answered before moving on", .item + 1)]
    Unanswered { item: usize },
    #[error("all questions are already answered")]
    AlreadyComplete,
    #[error("question {} does not exist", .item + 1)]
    UnknownItem { item: usize },
}

/// Answer-collection state for one respondent. Transitions consume the session
/// and hand back the next state; the hosting layer decides where it lives between
/// interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireSession {
    answers: AnswerSheet,
    current: usize,
}

impl QuestionnaireSession {
    pub fn new(item_count: usize) -> Self {
        Self {
            answers: AnswerSheet::new(item_count),
            current: 0,
        }
    }

    pub fn for_engine(engine: &ScoringEngine) -> Self {
        Self::new(engine.catalog().len())
    }

    pub fn phase(&self) -> SessionPhase {
        if self.current >= self.answers.len() {
            SessionPhase::Complete
        } else {
            SessionPhase::Collecting {
                current: self.current,
            }
        }
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Previously recorded answer for the current question, used to preselect it.
    pub fn current_answer(&self) -> Option<AnswerValue> {
        self.answers.get(self.current)
    }

    /// Records `raw` for the current question and advances to the next one.
    pub fn submit(self, raw: u8) -> Result<Self, SessionError> {
        let current = match self.phase() {
            SessionPhase::Collecting { current } => current,
            SessionPhase::Complete => return Err(SessionError::AlreadyComplete),
        };
        self.answer(current, raw)?.advance()
    }

    /// Records or overwrites the answer for `item` without moving.
    pub fn answer(mut self, item: usize, raw: u8) -> Result<Self, SessionError> {
        self.answers.record(item, raw)?;
        Ok(self)
    }

    /// Moves forward; the current question must already have an answer.
    pub fn advance(mut self) -> Result<Self, SessionError> {
        match self.phase() {
            SessionPhase::Complete => Err(SessionError::AlreadyComplete),
            SessionPhase::Collecting { current } if self.answers.get(current).is_none() => {
                Err(SessionError::Unanswered { item: current })
            }
            SessionPhase::Collecting { current } => {
                self.current = current + 1;
                Ok(self)
            }
        }
    }

    /// Steps back one question. Stays on the first question when already there.
    pub fn back(mut self) -> Self {
        self.current = self.current.saturating_sub(1);
        self
    }

    /// Revisits `item` so its answer can be changed.
    pub fn jump_to(mut self, item: usize) -> Result<Self, SessionError> {
        if item >= self.answers.len() {
            return Err(SessionError::UnknownItem { item });
        }
        self.current = item;
        Ok(self)
    }

    /// Discards every answer and returns to the first question.
    pub fn restart(self) -> Self {
        Self::new(self.answers.len())
    }

    /// Scores the collected answers. The session is consumed so the answers are
    /// dropped once the assessment exists.
    pub fn finish(self, engine: &ScoringEngine) -> Result<StressAssessment, ScoringError> {
        engine.score(&self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_records_and_advances_until_complete() {
        let mut session = QuestionnaireSession::new(3);
        assert_eq!(session.phase(), SessionPhase::Collecting { current: 0 });

        for raw in [2, 3, 4] {
            session = session.submit(raw).expect("valid answer");
        }

        assert_eq!(session.phase(), SessionPhase::Complete);
        assert!(session.answers().is_complete());
        assert_eq!(session.submit(1), Err(SessionError::AlreadyComplete));
    }

    #[test]
    fn cannot_advance_past_an_unanswered_question() {
        let session = QuestionnaireSession::new(2);
        assert_eq!(
            session.advance(),
            Err(SessionError::Unanswered { item: 0 })
        );
    }

    #[test]
    fn back_keeps_answers_and_preselects_previous_choice() {
        let session = QuestionnaireSession::new(3)
            .submit(5)
            .expect("answer")
            .back();

        assert_eq!(session.phase(), SessionPhase::Collecting { current: 0 });
        assert_eq!(session.current_answer().map(AnswerValue::get), Some(5));

        let session = session.back();
        assert_eq!(session.phase(), SessionPhase::Collecting { current: 0 });

        let session = session.submit(1).expect("overwrite");
        assert_eq!(session.answers().get(0).map(AnswerValue::get), Some(1));
        assert_eq!(session.phase(), SessionPhase::Collecting { current: 1 });
    }

    #[test]
    fn out_of_range_submission_leaves_state_untouched() {
        let session = QuestionnaireSession::new(2);
        let err = session.clone().submit(7).expect_err("7 is off the scale");

        assert!(matches!(
            err,
            SessionError::Answer(AnswerSheetError::OutOfRange { item: 0, .. })
        ));
        assert_eq!(session.phase(), SessionPhase::Collecting { current: 0 });
    }

    #[test]
    fn jump_to_and_restart() {
        let session = QuestionnaireSession::new(3)
            .submit(2)
            .and_then(|session| session.submit(2))
            .expect("answers");

        let session = session.jump_to(0).expect("known item");
        assert_eq!(session.phase(), SessionPhase::Collecting { current: 0 });
        assert_eq!(
            session.clone().jump_to(3),
            Err(SessionError::UnknownItem { item: 3 })
        );

        let session = session.restart();
        assert_eq!(session.answers().answered_count(), 0);
        assert_eq!(session.phase(), SessionPhase::Collecting { current: 0 });
    }
}
