// src/auth/mod.rs - Local session state and the login/signup/logout flows
//
// There is no credential check anywhere: a session is whatever the storage
// says it is. The typed wrapper exists so callers never touch raw keys.

pub mod forms;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Difficulty, Domain, Selection};
use crate::infra::errors::{InterviewMateError, Result};
use crate::storage::{
    KeyValueStore, KEY_AUTHENTICATED, KEY_DIFFICULTY, KEY_DOMAIN, KEY_EMAIL, KEY_ROLE,
};

pub use forms::{login, logout, signup, LoginForm, SignupForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InterviewMateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(InterviewMateError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
}

impl Session {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }

    /// Local part of the email, used for the dashboard greeting.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Typed view over the raw key-value store.
pub struct SessionStore<S: KeyValueStore> {
    inner: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn raw(&self) -> &S {
        &self.inner
    }

    /// The flag alone gates access; role and email are not required.
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self
            .inner
            .get(KEY_AUTHENTICATED)?
            .is_some_and(|v| !v.is_empty()))
    }

    /// The full session, if the flag is set and both fields are readable.
    pub fn current(&self) -> Result<Option<Session>> {
        if !self.is_authenticated()? {
            return Ok(None);
        }
        let email = self.inner.get(KEY_EMAIL)?;
        let role = self.inner.get(KEY_ROLE)?;
        match (email, role) {
            (Some(email), Some(role)) => match role.parse::<Role>() {
                Ok(role) => Ok(Some(Session { email, role })),
                Err(e) => {
                    tracing::warn!("Ignoring stored session: {}", e);
                    Ok(None)
                }
            },
            _ => Ok(None),
        }
    }

    /// Write all three session keys together.
    pub fn begin(&mut self, session: &Session) -> Result<()> {
        self.inner.set(KEY_AUTHENTICATED, "true")?;
        self.inner.set(KEY_ROLE, session.role.as_str())?;
        self.inner.set(KEY_EMAIL, &session.email)?;
        tracing::info!("Session started for {} ({})", session.email, session.role);
        Ok(())
    }

    /// Drop the session. The last domain/difficulty selection is kept.
    pub fn clear(&mut self) -> Result<()> {
        self.inner.remove(KEY_AUTHENTICATED)?;
        self.inner.remove(KEY_ROLE)?;
        self.inner.remove(KEY_EMAIL)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    pub fn save_selection(&mut self, selection: Selection) -> Result<()> {
        self.inner.set(KEY_DOMAIN, selection.domain.as_str())?;
        self.inner
            .set(KEY_DIFFICULTY, selection.difficulty.as_str())?;
        tracing::debug!(
            "Selection saved: {} / {}",
            selection.domain,
            selection.difficulty
        );
        Ok(())
    }

    /// Last saved selection. Unparseable values count as not set.
    pub fn selection(&self) -> Result<Option<Selection>> {
        let domain = self.inner.get(KEY_DOMAIN)?;
        let difficulty = self.inner.get(KEY_DIFFICULTY)?;
        let (Some(domain), Some(difficulty)) = (domain, difficulty) else {
            return Ok(None);
        };
        match (domain.parse::<Domain>(), difficulty.parse::<Difficulty>()) {
            (Ok(domain), Ok(difficulty)) => Ok(Some(Selection { domain, difficulty })),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("Ignoring stored selection: {}", e);
                Ok(None)
            }
        }
    }
}
