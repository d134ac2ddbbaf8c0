//! # findash
//!
//! Client-side core of a personal-finance dashboard: the session and
//! authorization gate, route resolution, and the AI-analysis fetch/render
//! pipeline with deterministic fallback data.
//!
//! ## Features
//!
//! - **Session gate**: durable token + user id storage with an
//!   authenticated/unauthenticated derivation, no globals.
//! - **Route controller**: protected paths resolve to the login view while
//!   unauthenticated; the originally requested route is kept for a
//!   post-login return.
//! - **Analysis fetcher**: one HTTP call to the analysis service; every
//!   failure degrades to fixed sample data tagged with the cause.
//! - **Renderer**: pure transforms to chart series, ranked recommendations
//!   with impact colors, and a health-score band.
//!
//! ## Architecture
//!
//! ```text
//! UI shell / CLI → Router (auth gate) → AnalysisPanel → AnalysisClient (HTTP)
//!                       ↓                                      ↓
//!                 SessionStore (JSON file)          render (pure transforms)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use findash::analysis::{AnalysisClient, AnalysisPanel, AnalysisType, TimeRange};
//! use findash::routes::{Resolution, Router};
//! use findash::session::{FileSessionStore, SessionStore};
//! use findash::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let store = FileSessionStore::open(&config.session.path)?;
//!     let router = Router::new(store.clone());
//!
//!     if let Resolution::View(_) = router.navigate("/ai-analysis") {
//!         let session = store.current().unwrap();
//!         let client = AnalysisClient::new(&config.service, config.request.clone())?;
//!         let panel = AnalysisPanel::new(client);
//!         let outcome = panel.refresh(&session, TimeRange::Month, AnalysisType::SpendingPattern).await;
//!         print!("{}", findash::render::render_text(&outcome));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Analysis service client, fetch outcomes, and the panel state machine.
pub mod analysis;
/// Configuration management for the dashboard client.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Pure transforms from analysis results to renderable views.
pub mod render;
/// Route controller and the protected-path rules.
pub mod routes;
/// Session store and authentication gate.
pub mod session;

pub use config::Config;
pub use error::{AppError, AppResult};
