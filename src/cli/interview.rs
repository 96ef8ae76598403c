// src/cli/interview.rs - Interactive AI interview REPL

use super::render::{progress_bar, render_message};
use crate::auth::SessionStore;
use crate::infra::config::Config;
use crate::infra::errors::InterviewMateError;
use crate::interview::{Message, ScriptedInterview};
use crate::routes::Route;
use crate::storage::KeyValueStore;

const TIPS: [&str; 4] = [
    "Think out loud while solving",
    "Ask clarifying questions",
    "Explain your reasoning",
    "Consider edge cases",
];

/// What one line of input did to the session.
#[derive(Debug)]
pub enum LineOutcome {
    Quit,
    /// Blank input; the engine never sees it.
    Empty,
    /// A slash command with text to print.
    Command(String),
    Reply(Message),
}

/// Handle one line of REPL input.
///
/// Only the line terminator is stripped from an answer; the rest of the
/// text is recorded as typed.
pub fn handle_line(
    interview: &mut ScriptedInterview,
    input: &str,
) -> Result<LineOutcome, InterviewMateError> {
    let line = input.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();

    if trimmed == "/quit" {
        return Ok(LineOutcome::Quit);
    }
    if trimmed.starts_with('/') {
        return Ok(LineOutcome::Command(slash_command(interview, trimmed)));
    }
    if trimmed.is_empty() {
        return Ok(LineOutcome::Empty);
    }
    interview.submit_answer(line).map(LineOutcome::Reply)
}

fn slash_command(interview: &ScriptedInterview, input: &str) -> String {
    let cmd = input.split_whitespace().next().unwrap_or("");
    match cmd {
        "/status" => status_text(interview, chrono::Utc::now()),
        "/transcript" => interview
            .transcript()
            .messages()
            .iter()
            .map(render_message)
            .collect::<Vec<_>>()
            .join("\n\n"),
        "/tips" => TIPS
            .iter()
            .map(|t| format!("  - {t}"))
            .collect::<Vec<_>>()
            .join("\n"),
        "/help" => "Commands:\n  \
                    /status      Question, progress and latest score\n  \
                    /transcript  Show the conversation so far\n  \
                    /tips        Interview tips\n  \
                    /quit        Leave the interview"
            .to_string(),
        other => format!("Unknown command: {other}. Type /help for commands."),
    }
}

pub fn status_text(interview: &ScriptedInterview, now: chrono::DateTime<chrono::Utc>) -> String {
    let selection = interview.selection();
    let mut out = format!(
        "{} · {}\nQuestion {}/{} · {} min\nInterview Progress {}",
        selection.domain.label(),
        selection.difficulty.label(),
        interview.question_display(),
        interview.total_questions(),
        interview.elapsed_minutes(now),
        progress_bar(interview.progress_percent(), 20),
    );
    let latest = interview
        .transcript()
        .messages()
        .iter()
        .rev()
        .find_map(|m| m.feedback.as_ref());
    if let Some(fb) = latest {
        out.push_str(&format!(
            "\nLatest Score {}",
            progress_bar(fb.rating as f64 * 10.0, 10)
        ));
    }
    out
}

fn read_input() -> Option<String> {
    use std::io::{self, BufRead, Write};

    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

pub async fn run_interview<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    config: &Config,
) -> anyhow::Result<Option<Route>> {
    let Some(selection) = store.selection()? else {
        eprintln!("{}", InterviewMateError::NoPreferences);
        return Ok(Some(Route::Dashboard));
    };

    let mut interview = ScriptedInterview::start(selection, config.interview.total_questions);
    eprintln!("AI Interview · type your answer, /help for commands\n");
    if let Some(welcome) = interview.transcript().first() {
        println!("{}\n", render_message(welcome));
    }

    while let Some(input) = read_input() {
        match handle_line(&mut interview, &input)? {
            LineOutcome::Quit => break,
            LineOutcome::Empty => continue,
            LineOutcome::Command(text) => eprintln!("{text}\n"),
            LineOutcome::Reply(reply) => {
                let delay = config.interview.response_delay();
                if !delay.is_zero() {
                    eprintln!("Interviewer is typing...");
                    tokio::time::sleep(delay).await;
                }
                println!("\n{}\n", render_message(&reply));
                if interview.is_finished() {
                    println!("Back to your dashboard: interviewmate dashboard");
                    break;
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
    use crate::interview::Speaker;

    fn interview() -> ScriptedInterview {
        ScriptedInterview::start(Selection::new(Domain::WebDev, Difficulty::Easy), 5)
    }

    #[test]
    fn test_blank_input_never_reaches_engine() {
        let mut iv = interview();
        assert!(matches!(handle_line(&mut iv, "   \n").unwrap(), LineOutcome::Empty));
        assert_eq!(iv.transcript().len(), 1);
        assert_eq!(iv.question_index(), 1);
    }

    #[test]
    fn test_answer_gets_reply() {
        let mut iv = interview();
        match handle_line(&mut iv, "  closures capture scope\r\n").unwrap() {
            LineOutcome::Reply(m) => {
                assert_eq!(m.speaker, Speaker::Ai);
                assert_eq!(m.feedback.map(|f| f.rating), Some(8));
            }
            other => panic!("unexpected {other:?}"),
        }
        // Only the line terminator is dropped
        assert_eq!(iv.transcript().messages()[1].text, "  closures capture scope");
    }

    #[test]
    fn test_slash_quit_leaves() {
        let mut iv = interview();
        for q in ["/quit", "  /quit\n"] {
            assert!(matches!(handle_line(&mut iv, q).unwrap(), LineOutcome::Quit));
        }
        assert_eq!(iv.transcript().len(), 1);
    }

    #[test]
    fn test_bare_quit_words_are_answers() {
        let mut iv = interview();
        for word in ["quit", "exit"] {
            assert!(matches!(
                handle_line(&mut iv, word).unwrap(),
                LineOutcome::Reply(_)
            ));
        }
        let texts: Vec<&str> = iv
            .transcript()
            .messages()
            .iter()
            .filter(|m| m.speaker == Speaker::User)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["quit", "exit"]);
    }

    #[test]
    fn test_unknown_command() {
        let mut iv = interview();
        match handle_line(&mut iv, "/dance").unwrap() {
            LineOutcome::Command(text) => assert!(text.starts_with("Unknown command: /dance")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_status_shows_latest_score() {
        let mut iv = interview();
        let now = chrono::Utc::now();
        assert!(!status_text(&iv, now).contains("Latest Score"));
        handle_line(&mut iv, "answer").unwrap();
        let status = status_text(&iv, now);
        assert!(status.contains("Question 2/5"));
        assert!(status.contains("Latest Score [########--]  80%"));
    }

    #[test]
    fn test_after_completion_input_fails() {
        let mut iv = interview();
        for _ in 0..6 {
            handle_line(&mut iv, "answer").unwrap();
        }
        assert!(iv.is_finished());
        assert!(matches!(
            handle_line(&mut iv, "more"),
            Err(InterviewMateError::InterviewFinished)
        ));
    }

    #[tokio::test]
    async fn test_no_selection_goes_to_dashboard() {
        use crate::storage::MemoryStore;
        let mut store = SessionStore::new(MemoryStore::new());
        let next = run_interview(&mut store, &Config::default()).await.unwrap();
        assert_eq!(next, Some(Route::Dashboard));
    }
}
