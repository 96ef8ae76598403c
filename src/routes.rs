// src/routes.rs - Page routes, the navigation shell, and the access gate

use std::fmt;
use std::str::FromStr;

use crate::auth::SessionStore;
use crate::infra::errors::{InterviewMateError, Result};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    Dashboard,
    Practice,
    Interview,
    Mock,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Login,
        Route::Signup,
        Route::Dashboard,
        Route::Practice,
        Route::Interview,
        Route::Mock,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Practice => "/practice",
            Route::Interview => "/interview",
            Route::Mock => "/mock",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::Dashboard => "Dashboard",
            Route::Practice => "Practice",
            Route::Interview => "Interview",
            Route::Mock => "Mock Interview",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::Practice | Route::Interview | Route::Mock
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = InterviewMateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|r| r.path() == s)
            .ok_or_else(|| InterviewMateError::UnknownRoute(s.to_string()))
    }
}

/// Where a visit to `route` actually lands. Protected routes without a
/// session flag bounce to the login page.
pub fn guard<S: KeyValueStore>(route: Route, store: &SessionStore<S>) -> Result<Route> {
    if route.is_protected() && !store.is_authenticated()? {
        tracing::debug!("Redirecting {} -> {}", route, Route::Login);
        return Ok(Route::Login);
    }
    Ok(route)
}

/// Links shown in the navigation bar.
pub fn nav_items(authenticated: bool) -> &'static [Route] {
    if authenticated {
        &[Route::Dashboard, Route::Practice, Route::Interview]
    } else {
        &[]
    }
}

/// Buttons shown next to the links: Logout, or Login + Sign Up.
pub fn auth_actions(authenticated: bool) -> &'static [&'static str] {
    if authenticated {
        &["Logout"]
    } else {
        &["Login", "Sign Up"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Role, Session};
    use crate::storage::MemoryStore;

    #[test]
    fn test_paths_roundtrip() {
        for r in Route::ALL {
            assert_eq!(r.path().parse::<Route>().unwrap(), r);
        }
        assert!("/admin".parse::<Route>().is_err());
    }

    #[test]
    fn test_public_routes_pass_without_session() {
        let store = SessionStore::new(MemoryStore::new());
        for r in [Route::Home, Route::Login, Route::Signup] {
            assert_eq!(guard(r, &store).unwrap(), r);
        }
    }

    #[test]
    fn test_protected_routes_redirect_without_session() {
        let store = SessionStore::new(MemoryStore::new());
        for r in [Route::Dashboard, Route::Practice, Route::Interview, Route::Mock] {
            assert_eq!(guard(r, &store).unwrap(), Route::Login);
        }
    }

    #[test]
    fn test_protected_routes_pass_with_session() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.begin(&Session::new("a@b.co", Role::User)).unwrap();
        assert_eq!(guard(Route::Mock, &store).unwrap(), Route::Mock);
    }

    #[test]
    fn test_nav_items() {
        assert!(nav_items(false).is_empty());
        assert_eq!(
            nav_items(true),
            &[Route::Dashboard, Route::Practice, Route::Interview]
        );
        assert_eq!(auth_actions(false), &["Login", "Sign Up"]);
    }
}
