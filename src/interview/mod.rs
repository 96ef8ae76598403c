// src/interview/mod.rs - Chat-style scripted interview

pub mod engine;
pub mod transcript;

pub use engine::{ScriptedInterview, DEFAULT_TOTAL_QUESTIONS};
pub use transcript::{Feedback, Message, Speaker, Transcript};
