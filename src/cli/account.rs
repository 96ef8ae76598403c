// src/cli/account.rs - Login, signup and logout pages
//
// Missing fields are prompted for on a terminal. Without one they stay
// empty and the form validation reports them.

use crate::auth::{self, LoginForm, Role, SessionStore, SignupForm};
use crate::infra::config::Config;
use crate::routes::Route;
use crate::storage::KeyValueStore;

fn text_field(label: &str, value: Option<String>, interactive: bool) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None if interactive => Ok(inquire::Text::new(label).prompt()?),
        None => Ok(String::new()),
    }
}

fn password_field(label: &str, value: Option<String>, interactive: bool) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None if interactive => Ok(inquire::Password::new(label)
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?),
        None => Ok(String::new()),
    }
}

fn role_field(value: Option<String>, interactive: bool) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None if interactive => {
            let options: Vec<&str> = [Role::User, Role::Admin].iter().map(Role::as_str).collect();
            Ok(inquire::Select::new("Role:", options).prompt()?.to_string())
        }
        None => Ok(String::new()),
    }
}

pub async fn run_login<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    config: &Config,
    email: Option<String>,
    password: Option<String>,
    role: Option<String>,
    interactive: bool,
) -> anyhow::Result<Option<Route>> {
    let form = LoginForm {
        email: text_field("Email:", email, interactive)?,
        password: password_field("Password:", password, interactive)?,
        role: role_field(role, interactive)?,
    };

    eprintln!("Signing in...");
    auth::login(store, &form, config.auth.latency()).await?;

    println!("Login successful!\nWelcome back to InterviewMate");
    Ok(Some(Route::Dashboard))
}

pub async fn run_signup<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    config: &Config,
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
    role: Option<String>,
    interactive: bool,
) -> anyhow::Result<Option<Route>> {
    let email = text_field("Email:", email, interactive)?;
    let password = password_field("Password:", password, interactive)?;
    let confirm_password = password_field("Confirm password:", confirm_password, interactive)?;
    let form = SignupForm {
        email,
        password,
        confirm_password,
        role: role_field(role, interactive)?,
    };

    for (label, met) in form.requirements() {
        eprintln!("  [{}] {}", if met { "x" } else { " " }, label);
    }

    eprintln!("Creating account...");
    auth::signup(store, &form, config.auth.latency()).await?;

    println!(
        "Account created successfully!\n\
         Welcome to InterviewMate. Let's start your interview preparation journey."
    );
    Ok(Some(Route::Dashboard))
}

pub fn run_logout<S: KeyValueStore>(store: &mut SessionStore<S>) -> anyhow::Result<Option<Route>> {
    auth::logout(store)?;
    println!("Logged out.");
    Ok(Some(Route::Home))
}
