use serde::Deserialize;
use thiserror::Error;

/// Raw sentinel for a question with no recorded selection.
pub const UNANSWERED: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl Question {
    /// Checks the shape invariants a decoded record must hold.
    pub fn validate(&self) -> Result<(), String> {
        if self.options.len() < 2 {
            return Err(format!(
                "expected at least 2 options, found {}",
                self.options.len()
            ));
        }
        if self.correct >= self.options.len() {
            return Err(format!(
                "correct index {} is out of range for {} options",
                self.correct,
                self.options.len()
            ));
        }
        Ok(())
    }

    pub fn correct_text(&self) -> &str {
        &self.options[self.correct]
    }

    pub fn option_text(&self, idx: usize) -> Option<&str> {
        self.options.get(idx).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("question {index} is invalid: {reason}")]
pub struct InvalidQuestion {
    pub index: usize,
    pub reason: String,
}

/// Checks every question, reporting the first that breaks its invariants.
pub fn validate_all(questions: &[Question]) -> Result<(), InvalidQuestion> {
    for (index, q) in questions.iter().enumerate() {
        q.validate()
            .map_err(|reason| InvalidQuestion { index, reason })?;
    }
    Ok(())
}

/// Ordered questions for one session. Order is fixed once the loader has
/// shuffled it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank, rejecting any question whose `correct` index or option
    /// count is out of shape.
    pub fn new(questions: Vec<Question>) -> Result<Self, InvalidQuestion> {
        validate_all(&questions)?;
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Selected option per question index. `None` means unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    selections: Vec<Option<usize>>,
}

impl AnswerRecord {
    pub fn unanswered(len: usize) -> Self {
        Self {
            selections: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<usize> {
        self.selections.get(idx).copied().flatten()
    }

    pub fn is_answered(&self, idx: usize) -> bool {
        self.get(idx).is_some()
    }

    /// Records a selection only if the slot exists and is still empty.
    /// Returns whether the record changed.
    pub fn record(&mut self, idx: usize, option: usize) -> bool {
        match self.selections.get_mut(idx) {
            Some(slot) if slot.is_none() => {
                *slot = Some(option);
                true
            }
            _ => false,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Selections as raw integers: the option index, or [`UNANSWERED`] (-1)
    /// for an empty slot.
    pub fn to_raw(&self) -> Vec<i64> {
        self.selections
            .iter()
            .map(|s| s.map(|v| v as i64).unwrap_or(UNANSWERED))
            .collect()
    }
}
