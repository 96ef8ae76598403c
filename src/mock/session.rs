// src/mock/session.rs - Timed mock interview: Idle -> Running -> Submitted

use super::countdown::{Countdown, Tick};
use super::evaluator::{evaluate, visible_word_count, Evaluation};
use super::random::RandomSource;
use crate::catalog::{MockQuestion, Selection};
use crate::infra::errors::{InterviewMateError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockPhase {
    Idle,
    Running,
    Submitted,
}

/// Random question for `selection`; any question at all when nothing matches.
/// `None` only for an empty catalog.
pub fn select_question<'a>(
    catalog: &'a [MockQuestion],
    selection: &Selection,
    rng: &mut dyn RandomSource,
) -> Option<&'a MockQuestion> {
    if catalog.is_empty() {
        return None;
    }
    let matching: Vec<&MockQuestion> = catalog
        .iter()
        .filter(|q| q.domain == selection.domain && q.difficulty == selection.difficulty)
        .collect();

    if matching.is_empty() {
        tracing::debug!(
            "No mock question for {} / {}, picking from the full set",
            selection.domain,
            selection.difficulty
        );
        Some(&catalog[rng.pick(catalog.len())])
    } else {
        Some(matching[rng.pick(matching.len())])
    }
}

#[derive(Debug)]
pub struct MockSession {
    catalog: Vec<MockQuestion>,
    selection: Selection,
    phase: MockPhase,
    question: Option<MockQuestion>,
    answer: String,
    countdown: Countdown,
    evaluation: Option<Evaluation>,
    auto_submitted: bool,
}

impl MockSession {
    pub fn new(selection: Selection, catalog: Vec<MockQuestion>) -> Self {
        Self {
            catalog,
            selection,
            phase: MockPhase::Idle,
            question: None,
            answer: String::new(),
            countdown: Countdown::new(0),
            evaluation: None,
            auto_submitted: false,
        }
    }

    /// Leave `Idle` with a freshly drawn question. Outside `Idle` this is a no-op.
    pub fn start(&mut self, rng: &mut dyn RandomSource) -> Result<&MockQuestion> {
        if self.phase == MockPhase::Idle {
            self.arm(rng)?;
        }
        self.current_question()
    }

    /// Discard the current attempt and start over with a new question.
    pub fn new_question(&mut self, rng: &mut dyn RandomSource) -> Result<&MockQuestion> {
        self.arm(rng)?;
        self.current_question()
    }

    fn arm(&mut self, rng: &mut dyn RandomSource) -> Result<()> {
        let question = select_question(&self.catalog, &self.selection, rng)
            .cloned()
            .ok_or_else(|| InterviewMateError::Config("mock question catalog is empty".into()))?;

        let id = question.id;
        self.countdown = Countdown::new(question.time_limit_secs()).with_on_expire(move || {
            tracing::info!("Time is up on mock question {}, auto-submitting", id);
        });
        self.question = Some(question);
        self.answer.clear();
        self.evaluation = None;
        self.auto_submitted = false;
        self.phase = MockPhase::Running;
        tracing::info!("Mock question {} armed", id);
        Ok(())
    }

    fn current_question(&self) -> Result<&MockQuestion> {
        self.question.as_ref().ok_or(InterviewMateError::NotRunning)
    }

    /// Replace the draft answer. Only while the clock runs.
    pub fn set_answer(&mut self, text: impl Into<String>) -> Result<()> {
        if self.phase != MockPhase::Running {
            return Err(InterviewMateError::NotRunning);
        }
        self.answer = text.into();
        Ok(())
    }

    /// Advance the clock by one second. Returns the evaluation when this
    /// tick ran the clock out and auto-submitted the current draft.
    pub fn tick(&mut self) -> Option<&Evaluation> {
        if self.phase != MockPhase::Running {
            return None;
        }
        match self.countdown.tick() {
            Tick::Running(_) => None,
            Tick::Expired => {
                self.auto_submitted = true;
                self.finish();
                self.evaluation.as_ref()
            }
        }
    }

    /// Submit the current draft (possibly empty) for scoring.
    pub fn submit(&mut self) -> Result<&Evaluation> {
        if self.phase != MockPhase::Running {
            return Err(InterviewMateError::NotRunning);
        }
        self.finish();
        self.evaluation.as_ref().ok_or(InterviewMateError::NotRunning)
    }

    fn finish(&mut self) {
        if let Some(ref question) = self.question {
            let evaluation = evaluate(&self.answer, question);
            tracing::info!(
                "Mock question {} submitted: {}/10{}",
                question.id,
                evaluation.score,
                if self.auto_submitted { " (auto)" } else { "" }
            );
            self.evaluation = Some(evaluation);
        }
        self.phase = MockPhase::Submitted;
    }

    pub fn phase(&self) -> MockPhase {
        self.phase
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn question(&self) -> Option<&MockQuestion> {
        self.question.as_ref()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    pub fn was_auto_submitted(&self) -> bool {
        self.auto_submitted
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    /// True while running with `threshold` seconds or less on the clock.
    pub fn is_low_on_time(&self, threshold: u32) -> bool {
        self.phase == MockPhase::Running
            && self.countdown.remaining() > 0
            && self.countdown.remaining() <= threshold
    }

    /// (characters, words) of the current draft.
    pub fn answer_stats(&self) -> (usize, usize) {
        (
            self.answer.chars().count(),
            visible_word_count(&self.answer),
        )
    }
}
