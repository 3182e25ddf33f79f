//! Quiz session state machine: Welcome → InProgress → Finished.
//!
//! Every operation returns plain data for the rendering surface. Operations
//! that are not valid in the current phase, or that target an out-of-range
//! index, are silent no-ops and return `None`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerRecord, Question, QuestionBank};
use crate::timer::{round_seconds, Clock, Ticker, TICK_INTERVAL};

pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(1);
pub const UNANSWERED_LABEL: &str = "Unanswered";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    InProgress,
    Finished,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the question bank is empty")]
    EmptyBank,
}

/// Display state of one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Unselected,
    SelectedCorrect,
    SelectedIncorrect,
    CorrectNotSelected,
}

impl OptionState {
    fn classify(idx: usize, selected: Option<usize>, correct: usize) -> Self {
        let Some(selected) = selected else {
            return OptionState::Unselected;
        };
        match (idx == selected, idx == correct) {
            (true, true) => OptionState::SelectedCorrect,
            (true, false) => OptionState::SelectedIncorrect,
            (false, true) => OptionState::CorrectNotSelected,
            (false, false) => OptionState::Unselected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub text: String,
    pub is_selected: bool,
    pub is_correct: bool,
    pub state: OptionState,
}

/// Everything needed to draw one question, answered or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderData {
    pub index: usize,
    pub question: String,
    pub options: Vec<OptionView>,
    pub selected_option: Option<usize>,
    pub correct_option: usize,
    pub is_answered: bool,
}

/// What the host does after a selection: correct answers move on by
/// themselves, incorrect ones wait for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Auto { after: Duration, from_index: usize },
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub question_index: usize,
    pub selected: usize,
    pub correct: usize,
    pub is_correct: bool,
    pub options: Vec<OptionView>,
    pub message: String,
    pub advance: Advance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub question: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl ResultEntry {
    pub fn your_answer_text(&self) -> &str {
        self.your_answer.as_deref().unwrap_or(UNANSWERED_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsSummary {
    pub score: usize,
    pub total: usize,
    pub elapsed_seconds: u64,
    pub entries: Vec<ResultEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    Question(RenderData),
    Finished(ResultsSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Restart,
    Home,
    Submit,
}

/// Input relayed from the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    OptionClicked { question: usize, option: usize },
    Nav(Direction),
    Control(Control),
    Tick,
}

/// What changed as a result of a dispatched event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Question(RenderData),
    Answered(Feedback),
    Finished(ResultsSummary),
    Home,
    Ticked(u64),
}

impl From<Option<RenderData>> for Outcome {
    fn from(data: Option<RenderData>) -> Self {
        data.map(Outcome::Question).unwrap_or(Outcome::Ignored)
    }
}

impl From<NextStep> for Outcome {
    fn from(step: NextStep) -> Self {
        match step {
            NextStep::Question(data) => Outcome::Question(data),
            NextStep::Finished(summary) => Outcome::Finished(summary),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    bank: QuestionBank,
    phase: Phase,
    current_index: usize,
    score: usize,
    answers: AnswerRecord,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    elapsed_seconds: u64,
    results: Option<ResultsSummary>,
    clock: Clock,
    tick_interval: Duration,
    ticker: Option<Ticker>,
}

impl Session {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            answers: AnswerRecord::unanswered(bank.len()),
            bank,
            phase: Phase::Welcome,
            current_index: 0,
            score: 0,
            start_time: None,
            end_time: None,
            elapsed_seconds: 0,
            results: None,
            clock: Clock::default(),
            tick_interval: TICK_INTERVAL,
            ticker: None,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Live score, maintained as answers come in.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Summary of the last finished attempt, if the session is on the
    /// result screen.
    pub fn results(&self) -> Option<&ResultsSummary> {
        self.results.as_ref()
    }

    pub fn is_timer_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// One-based position and total, for the progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index + 1, self.bank.len())
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.bank.len()
    }

    /// The "next" affordance is only offered once the current question has
    /// an answer. `go_next` itself does not require it.
    pub fn can_go_next(&self) -> bool {
        self.phase == Phase::InProgress && self.answers.is_answered(self.current_index)
    }

    pub fn can_go_previous(&self) -> bool {
        self.phase == Phase::InProgress && self.current_index > 0
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last() {
            "Finish"
        } else {
            "Next"
        }
    }

    /// Begins a fresh attempt from any phase. The bank order is kept.
    pub fn start(&mut self) -> Result<RenderData, SessionError> {
        if self.bank.is_empty() {
            return Err(SessionError::EmptyBank);
        }

        self.stop_timer();
        self.current_index = 0;
        self.score = 0;
        self.answers = AnswerRecord::unanswered(self.bank.len());
        self.start_time = Some(self.clock.now());
        self.end_time = None;
        self.elapsed_seconds = 0;
        self.results = None;
        self.ticker = Some(Ticker::spawn(self.tick_interval));
        self.phase = Phase::InProgress;
        log::debug!("session started with {} questions", self.bank.len());

        Ok(self.build_render_data(0))
    }

    pub fn restart(&mut self) -> Result<RenderData, SessionError> {
        self.start()
    }

    /// Locks in the first selection for a question. Later selections on the
    /// same question return `None` and change nothing.
    pub fn select_answer(&mut self, question_index: usize, option_index: usize) -> Option<Feedback> {
        if self.phase != Phase::InProgress {
            return None;
        }
        let question = self.bank.get(question_index)?;
        if option_index >= question.options.len() {
            return None;
        }
        if !self.answers.record(question_index, option_index) {
            return None;
        }

        let correct = question.correct;
        let is_correct = option_index == correct;
        if is_correct {
            self.score += 1;
        }

        let message = feedback_message(question, option_index);
        let options = option_views(question, Some(option_index));
        let advance = if is_correct {
            Advance::Auto {
                after: AUTO_ADVANCE_DELAY,
                from_index: question_index,
            }
        } else {
            Advance::Manual
        };

        log::debug!(
            "question {} answered with option {} ({})",
            question_index,
            option_index,
            if is_correct { "correct" } else { "incorrect" }
        );

        Some(Feedback {
            question_index,
            selected: option_index,
            correct,
            is_correct,
            options,
            message,
            advance,
        })
    }

    /// Moves forward, or finishes when already on the last question.
    pub fn go_next(&mut self) -> Option<NextStep> {
        if self.phase != Phase::InProgress {
            return None;
        }
        if self.is_last() {
            return self.finish().map(NextStep::Finished);
        }
        self.current_index += 1;
        Some(NextStep::Question(self.build_render_data(self.current_index)))
    }

    pub fn go_previous(&mut self) -> Option<RenderData> {
        if !self.can_go_previous() {
            return None;
        }
        self.current_index -= 1;
        Some(self.build_render_data(self.current_index))
    }

    /// Performs a scheduled auto-advance only if the user is still on the
    /// question that triggered it.
    pub fn auto_advance(&mut self, from_index: usize) -> Option<NextStep> {
        if self.phase != Phase::InProgress || self.current_index != from_index {
            return None;
        }
        self.go_next()
    }

    pub fn render_data(&self, index: usize) -> Option<RenderData> {
        if index >= self.bank.len() {
            return None;
        }
        Some(self.build_render_data(index))
    }

    pub fn current(&self) -> Option<RenderData> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.render_data(self.current_index)
    }

    /// Feedback line for an answered question.
    pub fn feedback_for(&self, index: usize) -> Option<String> {
        let question = self.bank.get(index)?;
        let selected = self.answers.get(index)?;
        Some(feedback_message(question, selected))
    }

    pub fn finish(&mut self) -> Option<ResultsSummary> {
        if self.phase != Phase::InProgress {
            return None;
        }

        self.stop_timer();
        let end = self.clock.now();
        self.end_time = Some(end);
        let start = self.start_time.unwrap_or(end);
        self.elapsed_seconds = round_seconds(start, end);

        let entries: Vec<ResultEntry> = self
            .bank
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let selected = self.answers.get(i);
                ResultEntry {
                    question: q.question.clone(),
                    your_answer: selected.and_then(|s| q.option_text(s)).map(str::to_string),
                    correct_answer: q.correct_text().to_string(),
                    is_correct: selected == Some(q.correct),
                }
            })
            .collect();

        // Derived from the answers, not the live counter.
        self.score = entries.iter().filter(|e| e.is_correct).count();
        self.phase = Phase::Finished;

        let summary = ResultsSummary {
            score: self.score,
            total: self.bank.len(),
            elapsed_seconds: self.elapsed_seconds,
            entries,
        };
        log::debug!(
            "session finished: {}/{} in {}s",
            summary.score,
            summary.total,
            summary.elapsed_seconds
        );
        self.results = Some(summary.clone());
        Some(summary)
    }

    /// Returns to the welcome screen. From `InProgress` this abandons the
    /// attempt. Answers and score are left for the next `start` to reset.
    pub fn go_home(&mut self) -> bool {
        if self.phase == Phase::Welcome {
            return false;
        }
        self.stop_timer();
        self.phase = Phase::Welcome;
        log::debug!("session returned home");
        true
    }

    /// Counts one elapsed second for the live clock.
    pub fn tick(&mut self) -> Option<u64> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.elapsed_seconds += 1;
        Some(self.elapsed_seconds)
    }

    /// Folds ticks delivered by the background timer into the live clock.
    pub fn poll_ticks(&mut self) -> u64 {
        if self.phase != Phase::InProgress {
            return 0;
        }
        let ticks = self.ticker.as_ref().map(Ticker::drain).unwrap_or(0);
        self.elapsed_seconds += ticks;
        ticks
    }

    pub fn dispatch(&mut self, event: QuizEvent) -> Result<Outcome, SessionError> {
        let outcome = match event {
            QuizEvent::OptionClicked { question, option } => self
                .select_answer(question, option)
                .map(Outcome::Answered)
                .unwrap_or(Outcome::Ignored),
            QuizEvent::Nav(Direction::Next) => {
                self.go_next().map(Outcome::from).unwrap_or(Outcome::Ignored)
            }
            QuizEvent::Nav(Direction::Previous) => self.go_previous().into(),
            QuizEvent::Control(Control::Start) => Outcome::Question(self.start()?),
            QuizEvent::Control(Control::Restart) => Outcome::Question(self.restart()?),
            QuizEvent::Control(Control::Submit) => self
                .finish()
                .map(Outcome::Finished)
                .unwrap_or(Outcome::Ignored),
            QuizEvent::Control(Control::Home) => {
                if self.go_home() {
                    Outcome::Home
                } else {
                    Outcome::Ignored
                }
            }
            QuizEvent::Tick => self.tick().map(Outcome::Ticked).unwrap_or(Outcome::Ignored),
        };
        Ok(outcome)
    }

    fn stop_timer(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    fn build_render_data(&self, index: usize) -> RenderData {
        let question = &self.bank.questions()[index];
        let selected = self.answers.get(index);
        RenderData {
            index,
            question: question.question.clone(),
            options: option_views(question, selected),
            selected_option: selected,
            correct_option: question.correct,
            is_answered: selected.is_some(),
        }
    }
}

fn option_views(question: &Question, selected: Option<usize>) -> Vec<OptionView> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| OptionView {
            text: text.clone(),
            is_selected: selected == Some(i),
            is_correct: i == question.correct,
            state: OptionState::classify(i, selected, question.correct),
        })
        .collect()
}

fn feedback_message(question: &Question, selected: usize) -> String {
    if selected == question.correct {
        "✓ Correct!".to_string()
    } else {
        format!(
            "✗ Incorrect. The correct answer is: {}",
            question.correct_text()
        )
    }
}
