// src/mock/evaluator.rs - Heuristic answer scoring
//
// Pattern matching only: word count, first-word keyword hits, example
// markers and raw length. Reproduced exactly, including the loose
// first-word keyword rule.

use serde::{Deserialize, Serialize};

use crate::catalog::{Difficulty, MockQuestion};

pub const MAX_SCORE: u8 = 10;

pub const OVERALL_COMMENTS: [&str; 5] = [
    "Good foundation, but could expand on key concepts",
    "Solid understanding demonstrated with room for improvement",
    "Well-structured answer with good technical depth",
    "Excellent response showing strong technical knowledge",
    "Outstanding answer with comprehensive coverage",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub overall: String,
}

impl Evaluation {
    /// Filled stars out of five.
    pub fn stars(&self) -> u8 {
        // round(score / 2) with halves rounding up
        self.score.div_ceil(2)
    }

    /// Position of `overall` in [`OVERALL_COMMENTS`].
    pub fn overall_index(&self) -> usize {
        overall_index(self.score)
    }
}

pub fn overall_index(score: u8) -> usize {
    (score as usize / 2).min(OVERALL_COMMENTS.len() - 1)
}

/// Word count as the answer box counts it: pieces between single spaces,
/// so "" and "short" both count as one.
pub fn raw_word_count(answer: &str) -> usize {
    answer.split(' ').count()
}

/// Non-empty words, for the live counter under the answer box.
pub fn visible_word_count(answer: &str) -> usize {
    answer.split(' ').filter(|w| !w.is_empty()).count()
}

fn mentions_expected_point(answer: &str, question: &MockQuestion) -> bool {
    let answer = answer.to_lowercase();
    question.expected_points.iter().any(|point| {
        let point = point.to_lowercase();
        let first = point.split(' ').next().unwrap_or("");
        answer.contains(first)
    })
}

/// Score an answer. Pure: the same inputs always give the same result.
pub fn evaluate(answer: &str, question: &MockQuestion) -> Evaluation {
    let mut score: u8 = 0;
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if raw_word_count(answer) > 50 {
        score += 2;
        strengths.push("Detailed explanation provided");
    } else {
        improvements.push("Could provide more detailed explanation");
    }

    if mentions_expected_point(answer, question) {
        score += 3;
        strengths.push("Covered key concepts");
    } else {
        improvements.push("Could address more key points");
    }

    // Case-sensitive on purpose: "Example" does not count
    if answer.contains("example") || answer.contains("for instance") {
        score += 2;
        strengths.push("Good use of examples");
    } else {
        improvements.push("Consider adding practical examples");
    }

    if answer.chars().count() > 200 {
        score += 2;
        strengths.push("Comprehensive answer");
    }

    if question.difficulty == Difficulty::Hard && score >= 7 {
        score += 1;
    }

    let score = score.min(MAX_SCORE);

    Evaluation {
        score,
        strengths: strengths.into_iter().map(String::from).collect(),
        improvements: improvements.into_iter().map(String::from).collect(),
        overall: OVERALL_COMMENTS[overall_index(score)].to_string(),
    }
}
