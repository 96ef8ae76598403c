// src/mock/mod.rs - Timed free-text mock interview

pub mod countdown;
pub mod evaluator;
pub mod random;
pub mod session;

pub use countdown::{format_clock, Countdown, Tick};
pub use evaluator::{evaluate, Evaluation};
pub use random::{OsRandom, RandomSource, SequenceRandom};
pub use session::{select_question, MockPhase, MockSession};
