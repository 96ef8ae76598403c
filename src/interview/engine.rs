// src/interview/engine.rs - Scripted multi-turn interview
//
// The interviewer never reads the answers. Each submission plays the next
// entry of a fixed reply list (the last entry repeats once the list runs
// out) until the question count is exhausted, then a fixed summary closes
// the session.

use chrono::{DateTime, Utc};

use super::transcript::{Feedback, Message, Speaker, Transcript};
use crate::catalog::Selection;
use crate::infra::errors::{InterviewMateError, Result};

pub const DEFAULT_TOTAL_QUESTIONS: u32 = 5;

const OPENING_QUESTION: &str = "Can you explain the concept of closures in JavaScript and provide a practical example of when you would use them?";

/// One canned interviewer turn: commentary on the previous answer, the next
/// question, and the feedback card shown beside it.
pub struct CannedReply {
    pub commentary: &'static str,
    pub next_question: &'static str,
    pub rating: u8,
    pub suggestions: &'static [&'static str],
}

pub const CANNED_REPLIES: [CannedReply; 3] = [
    CannedReply {
        commentary: "Great answer! You demonstrated a solid understanding of the concept.\n\n\
Let me provide some feedback:\n\
✅ You correctly explained the core concept\n\
✅ Your example was relevant and well-structured\n\
💡 Consider also mentioning how closures affect memory management",
        next_question: "Now, let's move on to algorithms. Can you implement a function to find the second largest element in an array? Walk me through your approach.",
        rating: 8,
        suggestions: &[
            "Great explanation of the core concept",
            "Consider adding more real-world examples",
            "Memory management aspect could be expanded",
        ],
    },
    CannedReply {
        commentary: "Excellent solution! Your approach is both efficient and easy to understand.\n\n\
**Feedback:**\n\
✅ Optimal time complexity\n\
✅ Good edge case handling\n\
✅ Clear code structure",
        next_question: "Let's discuss system design. How would you design a URL shortener service like bit.ly? Consider scalability and performance requirements.",
        rating: 9,
        suggestions: &[
            "Excellent algorithm implementation",
            "Good consideration of edge cases",
            "Code is clean and readable",
        ],
    },
    CannedReply {
        commentary: "Good thinking! You're approaching this systematically.\n\n\
**Areas to expand on:**\n\
🔄 Consider discussing load balancing strategies\n\
🔄 Think about database sharding approaches\n\
✅ Good mention of caching layers",
        next_question: "Final question: Describe a challenging project you worked on and how you overcame the technical difficulties you faced.",
        rating: 7,
        suggestions: &[
            "System design thinking is solid",
            "Could elaborate more on scalability",
            "Good understanding of basic concepts",
        ],
    },
];

/// Index into [`CANNED_REPLIES`] for a 1-based question index.
pub fn canned_reply_index(question_index: u32) -> usize {
    let zero_based = question_index.saturating_sub(1) as usize;
    zero_based.min(CANNED_REPLIES.len() - 1)
}

pub fn welcome_text(selection: &Selection, total: u32) -> String {
    // Only the first hyphen becomes a space ("system-design" -> "system design")
    let domain = selection.domain.as_str().replacen('-', " ", 1);
    format!(
        "Welcome to your {} level {} interview! I'm your AI interviewer. Let's start with the first question:\n\n\
**Question 1/{}:**\n\
{}\n\n\
Take your time to think through your answer and explain your reasoning clearly.",
        selection.difficulty, domain, total, OPENING_QUESTION
    )
}

pub fn completion_text(selection: &Selection, total: u32) -> String {
    format!(
        "🎉 **Interview Completed!**\n\n\
Congratulations! You've successfully completed your {} level {} interview.\n\n\
**Overall Performance:**\n\
📊 Average Score: 8.2/10\n\
🎯 Questions Answered: {total}/{total}\n\
⏱️ Total Time: 32 minutes\n\n\
**Summary:**\n\
✅ Strong technical knowledge\n\
✅ Good problem-solving approach\n\
💡 Could improve on system design scalability concepts\n\n\
Great job! Keep practicing to continue improving your interview skills.",
        selection.difficulty,
        selection.domain.label(),
    )
}

#[derive(Debug, Clone)]
pub struct ScriptedInterview {
    selection: Selection,
    total_questions: u32,
    /// 1-based; exceeds `total_questions` once every question was answered.
    question_index: u32,
    transcript: Transcript,
    finished: bool,
}

impl ScriptedInterview {
    /// Begin an interview; the transcript opens with the welcome message.
    pub fn start(selection: Selection, total_questions: u32) -> Self {
        let total_questions = total_questions.max(1);
        let mut transcript = Transcript::new();
        transcript.push(Speaker::Ai, welcome_text(&selection, total_questions), None);
        tracing::info!(
            "Interview started: {} / {} ({} questions)",
            selection.domain,
            selection.difficulty,
            total_questions
        );
        Self {
            selection,
            total_questions,
            question_index: 1,
            transcript,
            finished: false,
        }
    }

    /// Record the answer and return the interviewer's reply.
    ///
    /// Callers reject blank input before getting here; the engine takes any
    /// text. After the closing summary every call fails with
    /// [`InterviewMateError::InterviewFinished`].
    pub fn submit_answer(&mut self, text: &str) -> Result<Message> {
        if self.finished {
            return Err(InterviewMateError::InterviewFinished);
        }

        self.transcript.push(Speaker::User, text, None);

        if self.question_index > self.total_questions {
            self.finished = true;
            let msg = self.transcript.push(
                Speaker::Ai,
                completion_text(&self.selection, self.total_questions),
                None,
            );
            tracing::info!("Interview completed after {} questions", self.total_questions);
            return Ok(msg.clone());
        }

        let reply = &CANNED_REPLIES[canned_reply_index(self.question_index)];
        let next = (self.question_index + 1).min(self.total_questions);
        let text = format!(
            "{}\n\n**Question {}/{}:**\n{}",
            reply.commentary, next, self.total_questions, reply.next_question
        );
        let feedback = Feedback {
            rating: reply.rating,
            suggestions: reply.suggestions.iter().map(|s| s.to_string()).collect(),
        };
        let msg = self.transcript.push(Speaker::Ai, text, Some(feedback)).clone();

        tracing::debug!("Answered question {}", self.question_index);
        self.question_index += 1;
        Ok(msg)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Raw 1-based question counter.
    pub fn question_index(&self) -> u32 {
        self.question_index
    }

    /// Counter clamped for display ("Question 5/5" after the last answer).
    pub fn question_display(&self) -> u32 {
        self.question_index.min(self.total_questions)
    }

    pub fn progress_percent(&self) -> f64 {
        let answered = self.question_index.saturating_sub(1) as f64;
        (answered / self.total_questions as f64 * 100.0).min(100.0)
    }

    /// Whole minutes since the welcome message.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        self.transcript
            .first()
            .map(|m| (now - m.timestamp).num_minutes().max(0))
            .unwrap_or(0)
    }
}
