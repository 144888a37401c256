use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

/// A single Likert answer, guaranteed to lie in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("answer {0} is outside the 1-5 scale")]
pub struct InvalidAnswer(pub u8);

impl AnswerValue {
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Mirror image on the 1-5 scale: `6 - raw`.
    pub const fn reversed(self) -> Self {
        Self(MIN_ANSWER + MAX_ANSWER - self.0)
    }

    pub const fn effective(self, reversed: bool) -> Self {
        if reversed {
            self.reversed()
        } else {
            self
        }
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = InvalidAnswer;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if (MIN_ANSWER..=MAX_ANSWER).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(InvalidAnswer(raw))
        }
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerSheetError {
    #[error("question {} does not exist (sheet has {len} questions)", .item + 1)]
    UnknownItem { item: usize, len: usize },
    #[error("question {}: {source}", .item + 1)]
    OutOfRange { item: usize, source: InvalidAnswer },
}

/// Fixed-length answer slots for one respondent. Held in memory only.
#[derive(Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: Vec<Option<AnswerValue>>,
}

impl AnswerSheet {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Builds a sheet from raw slots, rejecting the first value outside 1..=5.
    pub fn from_raw(raw: &[Option<u8>]) -> Result<Self, AnswerSheetError> {
        let mut sheet = Self::new(raw.len());
        for (item, value) in raw.iter().enumerate() {
            if let Some(value) = value {
                sheet.record(item, *value)?;
            }
        }
        Ok(sheet)
    }

    /// Sets or overwrites the answer for `item`.
    pub fn record(&mut self, item: usize, raw: u8) -> Result<AnswerValue, AnswerSheetError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(item)
            .ok_or(AnswerSheetError::UnknownItem { item, len })?;
        let value = AnswerValue::try_from(raw)
            .map_err(|source| AnswerSheetError::OutOfRange { item, source })?;
        *slot = Some(value);
        Ok(value)
    }

    pub fn clear(&mut self, item: usize) {
        if let Some(slot) = self.slots.get_mut(item) {
            *slot = None;
        }
    }

    pub fn get(&self, item: usize) -> Option<AnswerValue> {
        self.slots.get(item).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<AnswerValue>] {
        &self.slots
    }

    /// Zero-based positions still unanswered, in item order.
    pub fn missing(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(item, _)| item)
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

// Answers are sensitive; keep them out of logs and panic messages.
impl fmt::Debug for AnswerSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnswerSheet")
            .field("len", &self.slots.len())
            .field("answered", &self.answered_count())
            .finish()
    }
}
