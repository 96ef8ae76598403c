// src/cli/mock.rs - Timed mock interview: question, clock and answer box
//
// A tokio interval drives the countdown while stdin lines build the draft.
// Plain lines are appended to the answer; slash commands control the session.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant};

use super::render::{render_evaluation, render_expected_points, render_mock_question};
use crate::auth::SessionStore;
use crate::catalog::{mock_questions, MockQuestion};
use crate::infra::config::Config;
use crate::infra::errors::InterviewMateError;
use crate::mock::{format_clock, Evaluation, MockPhase, MockSession, OsRandom, RandomSource};
use crate::routes::Route;
use crate::storage::KeyValueStore;

/// What one line of input did to the mock session.
#[derive(Debug)]
pub enum MockOutcome {
    Quit,
    /// Text appended to the draft.
    Drafted,
    Submitted(Evaluation),
    NewQuestion(MockQuestion),
    /// Informational text to print.
    Info(String),
}

const HELP: &str = "Type your answer (each line is appended).\n  \
                    /submit  Submit for evaluation\n  \
                    /time    Time left and answer length\n  \
                    /new     Draw a new question\n  \
                    /quit    Leave";

const ALREADY_SUBMITTED: &str = "Answer submitted. /new for another question, /quit to leave.";

/// Append `line` to the draft, separating lines with a space.
fn append_draft(session: &mut MockSession, line: &str) -> Result<(), InterviewMateError> {
    let draft = if session.answer().is_empty() {
        line.to_string()
    } else {
        format!("{} {}", session.answer(), line)
    };
    session.set_answer(draft)
}

pub fn time_text(session: &MockSession) -> String {
    let (chars, words) = session.answer_stats();
    format!(
        "{} left · {} characters · {} words",
        format_clock(session.remaining_secs()),
        chars,
        words
    )
}

pub fn handle_line(
    session: &mut MockSession,
    input: &str,
    rng: &mut dyn RandomSource,
) -> Result<MockOutcome, InterviewMateError> {
    let trimmed = input.trim_end_matches(['\r', '\n']);
    let command = trimmed.trim();

    match command {
        "/quit" => return Ok(MockOutcome::Quit),
        "/help" => return Ok(MockOutcome::Info(HELP.to_string())),
        "/new" => return session.new_question(rng).cloned().map(MockOutcome::NewQuestion),
        "/time" => return Ok(MockOutcome::Info(time_text(session))),
        "/submit" if session.phase() == MockPhase::Running => {
            return session.submit().cloned().map(MockOutcome::Submitted)
        }
        "/submit" => return Ok(MockOutcome::Info(ALREADY_SUBMITTED.to_string())),
        _ => {}
    }

    if command.starts_with('/') {
        return Ok(MockOutcome::Info(format!(
            "Unknown command: {command}. Type /help for commands."
        )));
    }

    match session.phase() {
        MockPhase::Running => {
            if command.is_empty() {
                return Ok(MockOutcome::Drafted);
            }
            append_draft(session, trimmed)?;
            Ok(MockOutcome::Drafted)
        }
        _ => Ok(MockOutcome::Info(ALREADY_SUBMITTED.to_string())),
    }
}

fn print_question(q: &MockQuestion) {
    println!("\nMock Interview\n");
    println!("{}\n", render_mock_question(q));
    println!("Time limit: {}\n", format_clock(q.time_limit_secs()));
    eprintln!("{HELP}\n");
}

async fn print_evaluation(session: &MockSession, eval: &Evaluation, config: &Config) {
    let delay = config.mock.evaluation_delay();
    if !delay.is_zero() {
        eprintln!("Evaluating your answer...");
        tokio::time::sleep(delay).await;
    }
    println!("\nEvaluation Results\n");
    println!("{}", render_evaluation(eval));
    if let Some(q) = session.question() {
        println!("{}", render_expected_points(q));
    }
    println!("Try another: /new  ·  Leave: /quit");
}

pub async fn run_mock<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    config: &Config,
) -> anyhow::Result<Option<Route>> {
    let Some(selection) = store.selection()? else {
        eprintln!("{}", InterviewMateError::NoPreferences);
        return Ok(Some(Route::Dashboard));
    };

    let mut rng = OsRandom;
    let mut session = MockSession::new(selection, mock_questions());
    print_question(session.start(&mut rng)?);

    let period = config.mock.tick_interval();
    let threshold = config.mock.warning_threshold_secs;
    let mut ticker = interval_at(Instant::now() + period, period);
    let mut warned = false;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(eval) = session.tick().cloned() {
                    println!("\nTime's up! Your answer was submitted automatically.");
                    print_evaluation(&session, &eval, config).await;
                    continue;
                }
                if session.phase() != MockPhase::Running {
                    continue;
                }
                let remaining = session.remaining_secs();
                if !warned && session.is_low_on_time(threshold) {
                    warned = true;
                    eprintln!("\nWarning: Only {} remaining!", format_clock(remaining));
                } else if remaining % 60 == 0 {
                    eprintln!("  {} remaining", format_clock(remaining));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // EOF: score whatever was piped in
                    if session.phase() == MockPhase::Running {
                        let eval = session.submit()?.clone();
                        print_evaluation(&session, &eval, config).await;
                    }
                    break;
                };
                match handle_line(&mut session, &line, &mut rng)? {
                    MockOutcome::Quit => break,
                    MockOutcome::Drafted => {}
                    MockOutcome::Info(text) => eprintln!("{text}"),
                    MockOutcome::Submitted(eval) => {
                        print_evaluation(&session, &eval, config).await;
                    }
                    MockOutcome::NewQuestion(q) => {
                        warned = false;
                        ticker.reset();
                        print_question(&q);
                    }
                }
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, Domain, Selection};
    use crate::mock::SequenceRandom;

    fn running() -> (MockSession, SequenceRandom) {
        let mut rng = SequenceRandom::new([0]);
        let mut s = MockSession::new(
            Selection::new(Domain::WebDev, Difficulty::Medium),
            mock_questions(),
        );
        s.start(&mut rng).unwrap();
        (s, rng)
    }

    #[test]
    fn test_lines_build_the_draft() {
        let (mut s, mut rng) = running();
        handle_line(&mut s, "var is function scoped\n", &mut rng).unwrap();
        handle_line(&mut s, "", &mut rng).unwrap();
        handle_line(&mut s, "let is block scoped", &mut rng).unwrap();
        assert_eq!(s.answer(), "var is function scoped let is block scoped");
    }

    #[test]
    fn test_submit_then_text_is_rejected() {
        let (mut s, mut rng) = running();
        handle_line(&mut s, "scope", &mut rng).unwrap();
        match handle_line(&mut s, "/submit", &mut rng).unwrap() {
            MockOutcome::Submitted(e) => assert_eq!(e.score, 3),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            handle_line(&mut s, "late text", &mut rng).unwrap(),
            MockOutcome::Info(_)
        ));
        assert_eq!(s.answer(), "scope");
        assert!(matches!(
            handle_line(&mut s, "/submit", &mut rng).unwrap(),
            MockOutcome::Info(_)
        ));
        assert_eq!(s.evaluation().map(|e| e.score), Some(3));
    }

    #[test]
    fn test_submit_after_time_runs_out_keeps_the_page_open() {
        let (mut s, mut rng) = running();
        handle_line(&mut s, "scope", &mut rng).unwrap();
        while s.phase() == MockPhase::Running {
            s.tick();
        }
        assert!(s.was_auto_submitted());
        let before = s.evaluation().cloned();
        match handle_line(&mut s, "/submit", &mut rng).unwrap() {
            MockOutcome::Info(text) => assert_eq!(text, ALREADY_SUBMITTED),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.evaluation().cloned(), before);
        assert_eq!(s.phase(), MockPhase::Submitted);
    }

    #[test]
    fn test_new_question_after_submit() {
        let (mut s, mut rng) = running();
        handle_line(&mut s, "/submit", &mut rng).unwrap();
        match handle_line(&mut s, "/new", &mut rng).unwrap() {
            MockOutcome::NewQuestion(q) => assert_eq!(q.id, 1),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.phase(), MockPhase::Running);
        assert_eq!(s.answer(), "");
    }

    #[test]
    fn test_time_text() {
        let (mut s, mut rng) = running();
        handle_line(&mut s, "two words", &mut rng).unwrap();
        assert_eq!(time_text(&s), "10:00 left · 9 characters · 2 words");
    }

    #[test]
    fn test_unknown_command() {
        let (mut s, mut rng) = running();
        match handle_line(&mut s, "/skip", &mut rng).unwrap() {
            MockOutcome::Info(text) => assert!(text.starts_with("Unknown command: /skip")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
