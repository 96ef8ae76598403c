// src/catalog/practice.rs - Practice question catalog and search filter

use serde::{Deserialize, Serialize};

use super::{Difficulty, Domain, Scope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeQuestion {
    pub id: u32,
    pub title: String,
    pub domain: Domain,
    pub difficulty: Difficulty,
    pub description: String,
    pub time_estimate: String,
    pub tags: Vec<String>,
}

impl PracticeQuestion {
    fn new(
        id: u32,
        title: &str,
        domain: Domain,
        difficulty: Difficulty,
        description: &str,
        time_estimate: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.into(),
            domain,
            difficulty,
            description: description.into(),
            time_estimate: time_estimate.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Case-insensitive substring match on title, description or any tag.
    /// `needle` must already be lowercased.
    fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// The built-in practice catalog, in display order.
pub fn practice_questions() -> Vec<PracticeQuestion> {
    use Difficulty::*;
    use Domain::*;

    vec![
        PracticeQuestion::new(
            1,
            "Implement a React Component with Hooks",
            WebDev,
            Medium,
            "Create a React component that manages state and side effects using modern hooks patterns.",
            "30 min",
            &["React", "Hooks", "State Management"],
        ),
        PracticeQuestion::new(
            2,
            "Binary Tree Traversal",
            Dsa,
            Easy,
            "Implement different tree traversal algorithms (inorder, preorder, postorder).",
            "20 min",
            &["Trees", "Recursion", "Algorithms"],
        ),
        PracticeQuestion::new(
            3,
            "Design a Chat System",
            SystemDesign,
            Hard,
            "Design a scalable real-time chat system with proper architecture and data flow.",
            "45 min",
            &["System Design", "Scalability", "Real-time"],
        ),
        PracticeQuestion::new(
            4,
            "Linear Regression Implementation",
            AiMl,
            Medium,
            "Implement linear regression from scratch and explain the mathematical concepts.",
            "35 min",
            &["Machine Learning", "Mathematics", "Python"],
        ),
        PracticeQuestion::new(
            5,
            "Database Query Optimization",
            Databases,
            Hard,
            "Optimize complex SQL queries and explain indexing strategies.",
            "40 min",
            &["SQL", "Performance", "Indexing"],
        ),
        PracticeQuestion::new(
            6,
            "Containerize a Web Application",
            Devops,
            Medium,
            "Create Docker containers for a web application with proper configuration.",
            "25 min",
            &["Docker", "Containers", "Deployment"],
        ),
        PracticeQuestion::new(
            7,
            "Fibonacci Sequence Optimization",
            Dsa,
            Easy,
            "Implement efficient solutions for calculating Fibonacci numbers.",
            "15 min",
            &["Dynamic Programming", "Optimization", "Recursion"],
        ),
        PracticeQuestion::new(
            8,
            "RESTful API Design",
            WebDev,
            Medium,
            "Design and implement a RESTful API following best practices.",
            "30 min",
            &["API", "REST", "Backend"],
        ),
    ]
}

/// Select the questions matching all three criteria, preserving catalog order.
///
/// An empty `search` matches everything; `Scope::All` disables that dimension.
pub fn filter(
    all: &[PracticeQuestion],
    search: &str,
    domain: Scope<Domain>,
    difficulty: Scope<Difficulty>,
) -> Vec<PracticeQuestion> {
    let needle = search.to_lowercase();
    all.iter()
        .filter(|q| q.matches_search(&needle))
        .filter(|q| domain.matches(&q.domain))
        .filter(|q| difficulty.matches(&q.difficulty))
        .cloned()
        .collect()
}
