// src/cli/dashboard.rs - Dashboard: greeting, progress, and the domain/difficulty picker

use super::render::progress_bar;
use super::StartMode;
use crate::auth::SessionStore;
use crate::catalog::{Difficulty, Domain, Selection};
use crate::routes::Route;
use crate::storage::KeyValueStore;

const STATS: [(&str, &str); 4] = [
    ("Interviews Completed", "12"),
    ("Practice Questions", "45"),
    ("Success Rate", "85%"),
    ("Current Streak", "7"),
];

const PROGRESS: [(&str, f64); 3] = [
    ("Overall Completion", 68.0),
    ("Technical Skills", 75.0),
    ("Behavioral Questions", 60.0),
];

const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("Completed Web Dev Interview", "2 hours ago"),
    ("Practiced DSA Questions", "Yesterday"),
    ("Mock Interview - System Design", "2 days ago"),
];

pub fn greeting(name: &str) -> String {
    format!("Welcome back, {name}! 👋")
}

/// Merge flag values over the stored selection. A half-given selection
/// borrows the other half from the store.
pub fn resolve_selection(
    domain: Option<&str>,
    difficulty: Option<&str>,
    stored: Option<Selection>,
) -> anyhow::Result<(Option<Domain>, Option<Difficulty>)> {
    let domain = match domain {
        Some(d) => Some(d.parse::<Domain>()?),
        None => stored.map(|s| s.domain),
    };
    let difficulty = match difficulty {
        Some(d) => Some(d.parse::<Difficulty>()?),
        None => stored.map(|s| s.difficulty),
    };
    Ok((domain, difficulty))
}

fn prompt_domain() -> anyhow::Result<Domain> {
    let labels: Vec<&str> = Domain::ALL.iter().map(Domain::label).collect();
    let picked = inquire::Select::new("Domain:", labels.clone()).prompt()?;
    let idx = labels.iter().position(|l| *l == picked).unwrap_or(0);
    Ok(Domain::ALL[idx])
}

fn prompt_difficulty() -> anyhow::Result<Difficulty> {
    let labels: Vec<&str> = Difficulty::ALL.iter().map(Difficulty::label).collect();
    let picked = inquire::Select::new("Difficulty:", labels.clone()).prompt()?;
    let idx = labels.iter().position(|l| *l == picked).unwrap_or(0);
    Ok(Difficulty::ALL[idx])
}

fn prompt_next_action() -> anyhow::Result<Option<Route>> {
    let actions = vec![
        "Start AI Interview",
        "Start Mock Interview",
        "Practice Questions",
        "Done",
    ];
    let choice = inquire::Select::new("Quick Actions:", actions).prompt()?;
    Ok(match choice {
        "Start AI Interview" => Some(Route::Interview),
        "Start Mock Interview" => Some(Route::Mock),
        "Practice Questions" => Some(Route::Practice),
        _ => None,
    })
}

fn print_overview(name: &str) {
    println!("{}\n", greeting(name));
    for (title, value) in STATS {
        println!("  {value:>4}  {title}");
    }
    println!("\nYour Progress");
    for (label, percent) in PROGRESS {
        println!("  {:<22}{}", label, progress_bar(percent, 20));
    }
    println!("\nRecent Activity");
    for (title, when) in RECENT_ACTIVITY {
        println!("  - {title} ({when})");
    }
    println!();
}

pub fn run_dashboard<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    domain: Option<String>,
    difficulty: Option<String>,
    start: Option<StartMode>,
    interactive: bool,
) -> anyhow::Result<Option<Route>> {
    let name = store
        .current()?
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| "there".to_string());
    print_overview(&name);

    let flags_given = domain.is_some() || difficulty.is_some();
    let (mut picked_domain, mut picked_difficulty) =
        resolve_selection(domain.as_deref(), difficulty.as_deref(), store.selection()?)?;

    if interactive {
        if picked_domain.is_none() {
            picked_domain = Some(prompt_domain()?);
        }
        if picked_difficulty.is_none() {
            picked_difficulty = Some(prompt_difficulty()?);
        }
    }

    let (Some(d), Some(l)) = (picked_domain, picked_difficulty) else {
        println!("Start Your Interview Practice");
        println!("  Pick a domain and difficulty:");
        println!("  interviewmate dashboard --domain <DOMAIN> --difficulty <LEVEL>");
        return Ok(None);
    };
    let selection = Selection::new(d, l);

    if flags_given || interactive {
        store.save_selection(selection)?;
    }
    println!(
        "Selected: {} · {}",
        selection.domain.label(),
        selection.difficulty.label()
    );

    match start {
        Some(StartMode::Interview) => Ok(Some(Route::Interview)),
        Some(StartMode::Mock) => Ok(Some(Route::Mock)),
        None if interactive => prompt_next_action(),
        None => {
            println!("Start with: interviewmate interview  or  interviewmate mock");
            Ok(None)
        }
    }
}
