//! Route controller: maps navigation paths to views behind the auth gate.
//!
//! Two states drive every resolution: authenticated and unauthenticated,
//! sampled from the session store on each call. No protected view is ever
//! resolved while unauthenticated.

use tracing::debug;

use crate::session::SessionStore;

/// Navigable views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` — alias for the dashboard.
    Root,
    /// `/login`
    Login,
    /// `/dashboard`
    Dashboard,
    /// `/expenses`
    Expenses,
    /// `/income`
    Income,
    /// `/reports`
    Reports,
    /// `/ai-analysis`
    AiAnalysis,
}

impl Route {
    /// Parse a navigation path. Returns `None` for paths outside the surface.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Root),
            "/login" => Some(Route::Login),
            "/dashboard" => Some(Route::Dashboard),
            "/expenses" => Some(Route::Expenses),
            "/income" => Some(Route::Income),
            "/reports" => Some(Route::Reports),
            "/ai-analysis" => Some(Route::AiAnalysis),
            _ => None,
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Expenses => "/expenses",
            Route::Income => "/income",
            Route::Reports => "/reports",
            Route::AiAnalysis => "/ai-analysis",
        }
    }

    /// Everything except the login view and the root alias requires a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Root)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render this view.
    View(Route),
    /// Unauthenticated access to a protected view. `from` keeps the
    /// originally requested route so a login flow can return to it.
    RedirectToLogin {
        /// The route that was requested.
        from: Route,
    },
    /// Path outside the defined route surface.
    NotFound,
}

/// Resolves navigations against the current session state.
///
/// The auth gate is sampled on every call, never cached, so a login or
/// logout takes effect on the next navigation.
pub struct Router<S> {
    session: S,
}

impl<S: SessionStore> Router<S> {
    /// Create a router over the given session context.
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// The session context this router consults.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Resolve a raw navigation path.
    pub fn navigate(&self, path: &str) -> Resolution {
        match Route::parse(path) {
            Some(route) => self.resolve(route),
            None => Resolution::NotFound,
        }
    }

    /// Resolve a parsed route, following redirects to a final view.
    pub fn resolve(&self, route: Route) -> Resolution {
        let authenticated = self.session.is_authenticated();

        // Root always lands on the dashboard first; the protected-route
        // rule then applies to the dashboard itself.
        let target = match route {
            Route::Root => Route::Dashboard,
            other => other,
        };

        let resolution = match target {
            Route::Login if authenticated => Resolution::View(Route::Dashboard),
            Route::Login => Resolution::View(Route::Login),
            protected if !authenticated => Resolution::RedirectToLogin { from: protected },
            view => Resolution::View(view),
        };

        debug!(path = route.path(), authenticated, ?resolution, "navigation resolved");
        resolution
    }
}
