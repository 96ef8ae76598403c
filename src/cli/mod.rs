// src/cli/mod.rs - CLI definition (clap derive) and page navigation
//
// Each subcommand is a "page". A page may hand control to another page
// (login -> dashboard, dashboard -> interview), and every page visit goes
// through the access gate first.

pub mod account;
pub mod dashboard;
pub mod home;
pub mod interview;
pub mod mock;
pub mod practice;
pub mod render;

use clap::{Parser, Subcommand, ValueEnum};

use crate::auth::SessionStore;
use crate::infra::config::Config;
use crate::routes::{self, Route};
use crate::storage::KeyValueStore;

#[derive(Parser)]
#[command(name = "interviewmate", about = "Interview practice in your terminal", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Landing page
    Home,
    /// Sign in (any email/password is accepted)
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        /// user or admin
        #[arg(long)]
        role: Option<String>,
    },
    /// Create a local account
    Signup {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
        /// user or admin
        #[arg(long)]
        role: Option<String>,
    },
    /// End the current session
    Logout,
    /// Pick a domain and difficulty, see your stats
    Dashboard {
        /// web-dev, dsa, ai-ml, system-design, databases, devops
        #[arg(long)]
        domain: Option<String>,
        /// easy, medium, hard
        #[arg(long)]
        difficulty: Option<String>,
        /// Jump straight into an interview after saving the selection
        #[arg(long)]
        start: Option<StartMode>,
    },
    /// Browse practice questions
    Practice {
        /// Case-insensitive text matched against title, description and tags
        #[arg(short, long, default_value = "")]
        search: String,
        /// Domain or "all"
        #[arg(long, default_value = "all")]
        domain: String,
        /// Difficulty or "all"
        #[arg(long, default_value = "all")]
        difficulty: String,
    },
    /// Chat-style AI interview
    Interview,
    /// Timed free-text mock interview
    Mock,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartMode {
    Interview,
    Mock,
}

impl Commands {
    /// The route a command renders. Logout is an action on the home page.
    pub fn route(&self) -> Route {
        match self {
            Commands::Home | Commands::Logout => Route::Home,
            Commands::Login { .. } => Route::Login,
            Commands::Signup { .. } => Route::Signup,
            Commands::Dashboard { .. } => Route::Dashboard,
            Commands::Practice { .. } => Route::Practice,
            Commands::Interview => Route::Interview,
            Commands::Mock => Route::Mock,
        }
    }

    /// A plain visit to `route`, with no flags.
    pub fn visit(route: Route) -> Self {
        match route {
            Route::Home => Commands::Home,
            Route::Login => Commands::Login {
                email: None,
                password: None,
                role: None,
            },
            Route::Signup => Commands::Signup {
                email: None,
                password: None,
                confirm_password: None,
                role: None,
            },
            Route::Dashboard => Commands::Dashboard {
                domain: None,
                difficulty: None,
                start: None,
            },
            Route::Practice => Commands::Practice {
                search: String::new(),
                domain: "all".into(),
                difficulty: "all".into(),
            },
            Route::Interview => Commands::Interview,
            Route::Mock => Commands::Mock,
        }
    }
}

/// True when prompts can be shown.
pub fn is_interactive() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal()
}

/// Run `command`, then follow page-to-page navigation until a page stops.
/// `interactive` enables prompts for anything the flags left out.
pub async fn dispatch<S: KeyValueStore>(
    command: Commands,
    config: &Config,
    store: &mut SessionStore<S>,
    interactive: bool,
) -> anyhow::Result<()> {
    let mut page = command;
    loop {
        let requested = page.route();
        let landed = routes::guard(requested, store)?;
        if landed != requested {
            eprintln!("Please log in first: interviewmate login");
            page = Commands::visit(landed);
        }

        let next = match page {
            Commands::Home => home::run_home(store)?,
            Commands::Logout => account::run_logout(store)?,
            Commands::Login {
                email,
                password,
                role,
            } => account::run_login(store, config, email, password, role, interactive).await?,
            Commands::Signup {
                email,
                password,
                confirm_password,
                role,
            } => {
                account::run_signup(
                    store,
                    config,
                    email,
                    password,
                    confirm_password,
                    role,
                    interactive,
                )
                .await?
            }
            Commands::Dashboard {
                domain,
                difficulty,
                start,
            } => dashboard::run_dashboard(store, domain, difficulty, start, interactive)?,
            Commands::Practice {
                search,
                domain,
                difficulty,
            } => practice::run_practice(&search, &domain, &difficulty)?,
            Commands::Interview => interview::run_interview(store, config).await?,
            Commands::Mock => mock::run_mock(store, config).await?,
        };

        match next {
            Some(route) => page = Commands::visit(route),
            None => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_maps_back_to_route() {
        for r in Route::ALL {
            assert_eq!(Commands::visit(r).route(), r);
        }
    }

    #[test]
    fn test_logout_lands_on_home() {
        assert_eq!(Commands::Logout.route(), Route::Home);
    }

    #[test]
    fn test_parse_practice_defaults() {
        let cli = Cli::try_parse_from(["interviewmate", "practice"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Practice {
                search: String::new(),
                domain: "all".into(),
                difficulty: "all".into(),
            })
        );
    }

    #[test]
    fn test_parse_dashboard_start() {
        let cli = Cli::try_parse_from([
            "interviewmate",
            "dashboard",
            "--domain",
            "dsa",
            "--difficulty",
            "hard",
            "--start",
            "mock",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Dashboard { start, domain, .. }) => {
                assert_eq!(start, Some(StartMode::Mock));
                assert_eq!(domain.as_deref(), Some("dsa"));
            }
            _ => panic!("expected dashboard"),
        }
    }

    #[test]
    fn test_no_subcommand_is_none() {
        let cli = Cli::try_parse_from(["interviewmate"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[tokio::test]
    async fn test_protected_page_redirects_to_login() {
        use crate::storage::MemoryStore;
        // A login page with no flags and no prompts fails validation
        let mut store = SessionStore::new(MemoryStore::new());
        let config = Config::default();
        let err = dispatch(Commands::visit(Route::Practice), &config, &mut store, false)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[tokio::test]
    async fn test_login_flows_into_dashboard_and_mock_needs_selection() {
        use crate::storage::MemoryStore;
        let mut store = SessionStore::new(MemoryStore::new());
        let mut config = Config::default();
        config.auth.latency_ms = 0;
        let login = Commands::Login {
            email: Some("ada@example.com".into()),
            password: Some("secret".into()),
            role: Some("user".into()),
        };
        dispatch(login, &config, &mut store, false).await.unwrap();
        assert!(store.is_authenticated().unwrap());

        // Mock without a selection bounces to the dashboard, which stops
        dispatch(Commands::Mock, &config, &mut store, false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        use crate::auth::{Role, Session};
        use crate::storage::MemoryStore;
        let mut store = SessionStore::new(MemoryStore::new());
        store.begin(&Session::new("a@b.co", Role::User)).unwrap();
        dispatch(Commands::Logout, &Config::default(), &mut store, false)
            .await
            .unwrap();
        assert!(!store.is_authenticated().unwrap());
    }
}
