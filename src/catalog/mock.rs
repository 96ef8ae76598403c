// src/catalog/mock.rs - Timed mock-interview questions

use serde::{Deserialize, Serialize};

use super::{Difficulty, Domain};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockQuestion {
    pub id: u32,
    pub question: String,
    pub domain: Domain,
    pub difficulty: Difficulty,
    /// Phrases a good answer should touch on. Only the first word of each is
    /// ever matched against the answer.
    pub expected_points: Vec<String>,
    pub time_limit_minutes: u32,
}

impl MockQuestion {
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_minutes * 60
    }
}

fn q(
    id: u32,
    question: &str,
    domain: Domain,
    difficulty: Difficulty,
    points: &[&str],
    minutes: u32,
) -> MockQuestion {
    MockQuestion {
        id,
        question: question.into(),
        domain,
        difficulty,
        expected_points: points.iter().map(|p| p.to_string()).collect(),
        time_limit_minutes: minutes,
    }
}

pub fn mock_questions() -> Vec<MockQuestion> {
    vec![
        q(
            1,
            "Explain the difference between var, let, and const in JavaScript. When would you use each one?",
            Domain::WebDev,
            Difficulty::Medium,
            &[
                "Scope differences (function vs block)",
                "Hoisting behavior",
                "Reassignment rules",
                "Temporal dead zone for let/const",
                "Best practices and use cases",
            ],
            10,
        ),
        q(
            2,
            "Design a function to find the longest palindromic substring in a given string. Explain your approach and analyze the time complexity.",
            Domain::Dsa,
            Difficulty::Hard,
            &[
                "Different approaches (brute force, expand around centers, dynamic programming)",
                "Time and space complexity analysis",
                "Implementation details",
                "Edge cases handling",
                "Optimization considerations",
            ],
            20,
        ),
        q(
            3,
            "How would you design a distributed cache system? Discuss the key components and challenges.",
            Domain::SystemDesign,
            Difficulty::Hard,
            &[
                "Cache strategies (LRU, LFU, etc.)",
                "Consistency models",
                "Partitioning strategies",
                "Failure handling",
                "Performance considerations",
            ],
            25,
        ),
        q(
            4,
            "Explain the bias-variance tradeoff in machine learning. How does it relate to overfitting and underfitting?",
            Domain::AiMl,
            Difficulty::Medium,
            &[
                "Definition of bias and variance",
                "Relationship to model complexity",
                "Overfitting vs underfitting",
                "Methods to balance the tradeoff",
                "Real-world examples",
            ],
            15,
        ),
    ]
}
