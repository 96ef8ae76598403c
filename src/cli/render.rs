// src/cli/render.rs - Plain-text rendering of transcript messages, scores and questions

use crate::catalog::{MockQuestion, PracticeQuestion};
use crate::interview::{Message, Speaker};
use crate::mock::Evaluation;

/// Score band used for the headline: >= 8 strong, >= 6 fair, else weak.
pub fn score_band(score: u8) -> &'static str {
    if score >= 8 {
        "strong"
    } else if score >= 6 {
        "fair"
    } else {
        "weak"
    }
}

/// Five-slot star bar, e.g. `★★★★☆`.
pub fn star_bar(filled: u8) -> String {
    let filled = filled.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Fixed-width progress bar for a percentage in 0..=100.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}

pub fn render_message(msg: &Message) -> String {
    let who = match msg.speaker {
        Speaker::User => "You",
        Speaker::Ai => "Interviewer",
    };
    let mut out = format!(
        "[{} · {}]\n{}",
        who,
        msg.timestamp.format("%H:%M:%S"),
        msg.text
    );
    if let Some(ref fb) = msg.feedback {
        out.push_str(&format!("\n\n  Rating: {}/10", fb.rating));
        for s in &fb.suggestions {
            out.push_str(&format!("\n  - {s}"));
        }
    }
    out
}

pub fn render_evaluation(eval: &Evaluation) -> String {
    let mut out = format!(
        "Score: {}/10 ({})  {}\n{}\n",
        eval.score,
        score_band(eval.score),
        star_bar(eval.stars()),
        eval.overall
    );
    if !eval.strengths.is_empty() {
        out.push_str("\nStrengths\n");
        for s in &eval.strengths {
            out.push_str(&format!("  + {s}\n"));
        }
    }
    if !eval.improvements.is_empty() {
        out.push_str("\nAreas for Improvement\n");
        for s in &eval.improvements {
            out.push_str(&format!("  - {s}\n"));
        }
    }
    out
}

pub fn render_practice_question(q: &PracticeQuestion) -> String {
    format!(
        "#{} {}\n   {} · {} · {}\n   {}\n   tags: {}",
        q.id,
        q.title,
        q.domain.label(),
        q.difficulty.label(),
        q.time_estimate,
        q.description,
        q.tags.join(", ")
    )
}

pub fn render_mock_question(q: &MockQuestion) -> String {
    format!(
        "{}\n\n{} · {} · {} min",
        q.question,
        q.domain.label(),
        q.difficulty,
        q.time_limit_minutes
    )
}

pub fn render_expected_points(q: &MockQuestion) -> String {
    let mut out = String::from("Key points to cover:\n");
    for p in &q.expected_points {
        out.push_str(&format!("  • {p}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{mock_questions, practice_questions};
    use crate::interview::{Feedback, Transcript};
    use crate::mock::evaluate;

    #[test]
    fn test_score_band_edges() {
        assert_eq!(score_band(10), "strong");
        assert_eq!(score_band(8), "strong");
        assert_eq!(score_band(7), "fair");
        assert_eq!(score_band(6), "fair");
        assert_eq!(score_band(5), "weak");
        assert_eq!(score_band(0), "weak");
    }

    #[test]
    fn test_star_bar() {
        assert_eq!(star_bar(0), "☆☆☆☆☆");
        assert_eq!(star_bar(3), "★★★☆☆");
        assert_eq!(star_bar(9), "★★★★★");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 10), "[----------]   0%");
        assert_eq!(progress_bar(40.0, 10), "[####------]  40%");
        assert_eq!(progress_bar(150.0, 4), "[####] 100%");
    }

    #[test]
    fn test_render_message_with_feedback() {
        let mut t = Transcript::new();
        let msg = t
            .push(
                Speaker::Ai,
                "Nice.",
                Some(Feedback {
                    rating: 9,
                    suggestions: vec!["Clear code structure".into()],
                }),
            )
            .clone();
        let out = render_message(&msg);
        assert!(out.starts_with("[Interviewer · "));
        assert!(out.contains("Nice."));
        assert!(out.contains("Rating: 9/10"));
        assert!(out.contains("  - Clear code structure"));
    }

    #[test]
    fn test_render_evaluation_sections() {
        let catalog = mock_questions();
        let out = render_evaluation(&evaluate("short", &catalog[0]));
        assert!(out.starts_with("Score: 0/10 (weak)  ☆☆☆☆☆"));
        assert!(!out.contains("Strengths"));
        assert!(out.contains("Areas for Improvement"));
        assert!(out.contains("  - Consider adding practical examples"));
    }

    #[test]
    fn test_render_practice_question() {
        let catalog = practice_questions();
        let out = render_practice_question(&catalog[1]);
        assert!(out.starts_with("#2 Binary Tree Traversal"));
        assert!(out.contains("Data Structures & Algorithms · Easy · 20 min"));
        assert!(out.contains("tags: Trees, Recursion, Algorithms"));
    }

    #[test]
    fn test_render_expected_points() {
        let out = render_expected_points(&mock_questions()[0]);
        assert!(out.contains("  • Hoisting behavior\n"));
    }
}
