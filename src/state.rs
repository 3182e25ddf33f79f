use std::time::{Duration, Instant};

use crate::session::{
    Advance, Control, Direction, Feedback, Outcome, Phase, QuizEvent, Session, SessionError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    ConfirmSubmit,
    ConfirmQuit,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Unanswered,
    Correct,
    Incorrect,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
}

/// Auto-advance scheduled by a correct answer.
#[derive(Debug, Clone, Copy)]
pub struct PendingAdvance {
    pub due: Instant,
    pub from_index: usize,
}

/// Host-side state wrapped around the session: dialogs, the pending
/// auto-advance, and notices that do not belong to the quiz itself.
#[derive(Debug)]
pub struct AppState {
    pub title: String,
    pub session: Session,
    pub dialog_stack: Vec<Dialog>,
    pub pending_advance: Option<PendingAdvance>,
    pub notice: Option<String>,
    pub result_scroll: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(title: impl Into<String>, session: Session) -> Self {
        Self {
            title: title.into(),
            session,
            dialog_stack: Vec::new(),
            pending_advance: None,
            notice: None,
            result_scroll: 0,
            should_quit: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn question_status(&self, idx: usize) -> QuestionStatus {
        let Some(question) = self.session.bank().get(idx) else {
            return QuestionStatus::Unanswered;
        };
        match self.session.answers().get(idx) {
            None => QuestionStatus::Unanswered,
            Some(sel) if sel == question.correct => QuestionStatus::Correct,
            Some(_) => QuestionStatus::Incorrect,
        }
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for idx in 0..self.session.bank().len() {
            match self.question_status(idx) {
                QuestionStatus::Unanswered => counts.unanswered += 1,
                QuestionStatus::Correct => counts.correct += 1,
                QuestionStatus::Incorrect => counts.incorrect += 1,
            }
        }
        counts
    }

    /// Feeds an event into the session and applies the host-side effects of
    /// its outcome.
    pub fn apply(&mut self, event: QuizEvent) -> Result<Outcome, SessionError> {
        let outcome = match self.session.dispatch(event) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.notice = Some(e.to_string());
                return Err(e);
            }
        };

        match &outcome {
            Outcome::Answered(feedback) => self.schedule_advance(feedback),
            Outcome::Question(_) | Outcome::Finished(_) | Outcome::Home => {
                self.pending_advance = None;
                self.notice = None;
                self.result_scroll = 0;
            }
            Outcome::Ticked(_) | Outcome::Ignored => {}
        }

        Ok(outcome)
    }

    pub fn select(&mut self, option: usize) {
        let question = self.session.current_index();
        let _ = self.apply(QuizEvent::OptionClicked { question, option });
    }

    pub fn navigate(&mut self, direction: Direction) {
        // Forward navigation is offered only once the question is answered.
        if direction == Direction::Next && !self.session.can_go_next() {
            return;
        }
        let _ = self.apply(QuizEvent::Nav(direction));
    }

    pub fn control(&mut self, control: Control) {
        let _ = self.apply(QuizEvent::Control(control));
    }

    /// Runs once per loop iteration: live clock and due auto-advances.
    pub fn on_idle(&mut self, now: Instant) {
        self.session.poll_ticks();

        if let Some(pending) = self.pending_advance {
            if now >= pending.due {
                self.pending_advance = None;
                if self.session.auto_advance(pending.from_index).is_some() {
                    self.result_scroll = 0;
                }
            }
        }
    }

    fn schedule_advance(&mut self, feedback: &Feedback) {
        self.pending_advance = match feedback.advance {
            Advance::Auto { after, from_index } => Some(PendingAdvance {
                due: Instant::now() + after,
                from_index,
            }),
            Advance::Manual => None,
        };
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}

/// Poll timeout that wakes the loop in time for a pending auto-advance.
pub fn poll_timeout(state: &AppState, now: Instant) -> Duration {
    const IDLE: Duration = Duration::from_millis(100);
    match state.pending_advance {
        Some(pending) => pending.due.saturating_duration_since(now).min(IDLE),
        None => IDLE,
    }
}
