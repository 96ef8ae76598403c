// src/cli/practice.rs - Practice question browser

use super::render::render_practice_question;
use crate::catalog::{self, Difficulty, Domain, PracticeQuestion, Scope};
use crate::routes::Route;

pub fn results_line(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} questions")
}

/// Parse the three filter arguments and apply them to the catalog.
pub fn filtered(
    all: &[PracticeQuestion],
    search: &str,
    domain: &str,
    difficulty: &str,
) -> anyhow::Result<Vec<PracticeQuestion>> {
    let domain: Scope<Domain> = Scope::parse(domain)?;
    let difficulty: Scope<Difficulty> = Scope::parse(difficulty)?;
    Ok(catalog::filter(all, search, domain, difficulty))
}

pub fn run_practice(search: &str, domain: &str, difficulty: &str) -> anyhow::Result<Option<Route>> {
    let all = catalog::practice_questions();
    let shown = filtered(&all, search, domain, difficulty)?;

    println!("Practice Questions");
    println!("Sharpen your skills with our curated collection of interview questions\n");
    println!("{}\n", results_line(shown.len(), all.len()));

    if shown.is_empty() {
        println!("No questions found");
        println!("Try adjusting your search terms or filters");
        println!("Clear filters: interviewmate practice");
        return Ok(None);
    }

    for q in &shown {
        println!("{}\n", render_practice_question(q));
    }
    Ok(None)
}
