// src/catalog/mod.rs - Interview domains, difficulties and static question data

pub mod mock;
pub mod practice;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::infra::errors::InterviewMateError;

pub use mock::{mock_questions, MockQuestion};
pub use practice::{filter, practice_questions, PracticeQuestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    WebDev,
    Dsa,
    AiMl,
    SystemDesign,
    Databases,
    Devops,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::WebDev,
        Domain::Dsa,
        Domain::AiMl,
        Domain::SystemDesign,
        Domain::Databases,
        Domain::Devops,
    ];

    /// Stable string form, as written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::WebDev => "web-dev",
            Domain::Dsa => "dsa",
            Domain::AiMl => "ai-ml",
            Domain::SystemDesign => "system-design",
            Domain::Databases => "databases",
            Domain::Devops => "devops",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Domain::WebDev => "Web Development",
            Domain::Dsa => "Data Structures & Algorithms",
            Domain::AiMl => "AI & Machine Learning",
            Domain::SystemDesign => "System Design",
            Domain::Databases => "Databases",
            Domain::Devops => "DevOps",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = InterviewMateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| InterviewMateError::UnknownDomain(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = InterviewMateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| InterviewMateError::UnknownDifficulty(s.to_string()))
    }
}

/// Domain + difficulty chosen on the dashboard for the next interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub domain: Domain,
    pub difficulty: Difficulty,
}

impl Selection {
    pub fn new(domain: Domain, difficulty: Difficulty) -> Self {
        Self { domain, difficulty }
    }
}

/// A filter dimension: either the "all" sentinel or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Scope<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Scope::All => true,
            Scope::Only(v) => v == value,
        }
    }
}

impl<T> Scope<T>
where
    T: FromStr<Err = InterviewMateError>,
{
    /// Parse `"all"` as the sentinel, anything else as a concrete value.
    pub fn parse(s: &str) -> Result<Self, InterviewMateError> {
        if s == "all" {
            Ok(Scope::All)
        } else {
            s.parse().map(Scope::Only)
        }
    }
}

impl<T> From<Option<T>> for Scope<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Scope::Only(v),
            None => Scope::All,
        }
    }
}
