use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use findash::analysis::{AnalysisClient, AnalysisPanel, AnalysisType, TimeRange};
use findash::config::{Config, LogFormat};
use findash::render;
use findash::routes::{Resolution, Route, Router};
use findash::session::{FileSessionStore, SessionStore};

#[derive(Parser)]
#[command(name = "findash", version, about = "Personal finance dashboard client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a session token and user id
    Login {
        /// Bearer token issued by the backend
        #[arg(long)]
        token: String,
        /// User the token belongs to
        #[arg(long)]
        user_id: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the current session state
    Status,
    /// Resolve a navigation path through the route controller
    Open {
        /// Path to navigate to (e.g., /dashboard)
        path: String,
    },
    /// Fetch and render an AI financial analysis
    Analyze {
        /// Reporting window: week, month, quarter, year
        #[arg(long, default_value_t = TimeRange::Month)]
        time_range: TimeRange,
        /// Analysis kind: spending_pattern, savings_advice, budget_optimization
        #[arg(long, default_value_t = AnalysisType::SpendingPattern)]
        analysis_type: AnalysisType,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    let cli = Cli::parse();

    let store = FileSessionStore::open(&config.session.path)?;

    match cli.command {
        Command::Login { token, user_id } => {
            store.login(&token, &user_id)?;
            info!(user_id = %user_id, "logged in");
            println!("logged in as {}", user_id);
        }
        Command::Logout => {
            store.logout()?;
            println!("logged out");
        }
        Command::Status => match store.current() {
            Some(session) => println!("authenticated as {}", session.user_id),
            None => println!("not authenticated"),
        },
        Command::Open { path } => {
            let router = Router::new(store);
            match router.navigate(&path) {
                Resolution::View(route) => println!("render {}", route.path()),
                Resolution::RedirectToLogin { from } => {
                    println!("redirect to /login (requested {})", from.path());
                }
                Resolution::NotFound => println!("no such view: {}", path),
            }
        }
        Command::Analyze {
            time_range,
            analysis_type,
        } => {
            // The analysis page is a protected view; go through the router
            // so it is never reached without a session.
            let router = Router::new(store.clone());
            if let Resolution::RedirectToLogin { .. } = router.resolve(Route::AiAnalysis) {
                eprintln!("not logged in; run `findash login` first");
                std::process::exit(1);
            }
            let Some(session) = store.current() else {
                eprintln!("not logged in; run `findash login` first");
                std::process::exit(1);
            };

            let client = AnalysisClient::new(&config.service, config.request.clone())?;
            info!(base_url = %client.base_url(), "analysis client initialized");

            let panel = AnalysisPanel::new(client);
            let outcome = panel.refresh(&session, time_range, analysis_type).await;
            print!("{}", render::render_text(&outcome));
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
