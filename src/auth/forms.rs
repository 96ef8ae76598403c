// src/auth/forms.rs - Login/signup form validation and the simulated auth calls

use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

use super::{Role, Session, SessionStore};
use crate::infra::errors::{FormError, Result};
use crate::storage::KeyValueStore;

pub const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: String,
}

impl LoginForm {
    /// First failing check wins: required fields, then email shape.
    pub fn validate(&self) -> Result<Role> {
        if self.email.is_empty() || self.password.is_empty() || self.role.is_empty() {
            return Err(FormError::MissingFields.into());
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail.into());
        }
        self.role.parse()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<Role> {
        if self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
            || self.role.is_empty()
        {
            return Err(FormError::MissingFields.into());
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail.into());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort.into());
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch.into());
        }
        self.role.parse()
    }

    /// Live checklist shown under the password fields: (label, met).
    pub fn requirements(&self) -> [(&'static str, bool); 2] {
        [
            (
                "At least 6 characters",
                self.password.chars().count() >= MIN_PASSWORD_LEN,
            ),
            (
                "Passwords match",
                self.password == self.confirm_password && !self.confirm_password.is_empty(),
            ),
        ]
    }
}

/// Validate, wait out the simulated round-trip, then record the session.
/// Any well-formed email/password pair is accepted.
pub async fn login<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    form: &LoginForm,
    latency: Duration,
) -> Result<Session> {
    let role = form.validate()?;
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    let session = Session::new(form.email.clone(), role);
    store.begin(&session)?;
    tracing::info!("Login successful");
    Ok(session)
}

pub async fn signup<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    form: &SignupForm,
    latency: Duration,
) -> Result<Session> {
    let role = form.validate()?;
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    let session = Session::new(form.email.clone(), role);
    store.begin(&session)?;
    tracing::info!("Account created");
    Ok(session)
}

pub fn logout<S: KeyValueStore>(store: &mut SessionStore<S>) -> Result<()> {
    store.clear()
}
