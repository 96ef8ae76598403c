// src/cli/home.rs - Landing page

use crate::auth::SessionStore;
use crate::routes::{self, Route};
use crate::storage::KeyValueStore;

const FEATURES: [(&str, &str); 3] = [
    (
        "AI-Powered Practice",
        "Get personalized questions and feedback tailored to your role and experience level.",
    ),
    (
        "Domain-Specific Training",
        "Practice with questions from Web Development, Data Structures, AI, and more technical domains.",
    ),
    (
        "Track Your Progress",
        "Monitor your improvement over time with detailed analytics and performance insights.",
    ),
];

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("10K+", "Practice Questions"),
    ("95%", "Success Rate"),
    ("5K+", "Happy Users"),
    ("24/7", "AI Support"),
];

/// Navigation bar: page links for a signed-in user, then the auth actions.
pub fn nav_line(authenticated: bool) -> String {
    let mut parts: Vec<String> = routes::nav_items(authenticated)
        .iter()
        .map(|r| format!("{} ({})", r.title(), command_for(*r)))
        .collect();
    for action in routes::auth_actions(authenticated) {
        let cmd = match *action {
            "Logout" => "interviewmate logout",
            "Login" => "interviewmate login",
            _ => "interviewmate signup",
        };
        parts.push(format!("{action} ({cmd})"));
    }
    parts.join("  |  ")
}

fn command_for(route: Route) -> String {
    format!("interviewmate {}", route.path().trim_start_matches('/'))
}

pub fn run_home<S: KeyValueStore>(store: &mut SessionStore<S>) -> anyhow::Result<Option<Route>> {
    let authenticated = store.is_authenticated()?;

    println!("InterviewMate\n{}\n", nav_line(authenticated));
    println!("Master Your Next Interview\n");
    println!(
        "Practice with AI-powered interviews, get real-time feedback, and land your dream job."
    );
    println!(
        "InterviewMate helps you prepare for technical and behavioral interviews with confidence.\n"
    );

    for (value, label) in HIGHLIGHTS {
        println!("  {value:>5}  {label}");
    }

    println!("\nWhy Choose InterviewMate?");
    for (title, description) in FEATURES {
        println!("  * {title}\n    {description}");
    }

    if authenticated {
        println!("\nContinue on your dashboard: interviewmate dashboard");
    } else {
        println!("\nGet started: interviewmate signup");
    }
    Ok(None)
}
