use std::fmt;

use anyhow::Result;
use log::{debug, warn};

use crate::session::Session;

/// Views of the directory, addressed by their paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Employee list, the public landing view
    List,
    NewEmployee,
    EditEmployee,
    Login,
    /// Logged-in employee's own profile
    Profile,
}

impl Route {
    pub const LANDING: Route = Route::List;

    pub fn path(self) -> &'static str {
        match self {
            Route::List => "/",
            Route::NewEmployee => "/new-employee",
            Route::EditEmployee => "/edit-employee",
            Route::Login => "/login",
            Route::Profile => "/employee-profile",
        }
    }

    pub fn is_protected(self) -> bool {
        matches!(self, Route::Profile)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up being shown.
    pub fn route(self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => route,
        }
    }
}

/// Admits protected routes only while the session holds a token.
///
/// Only local presence of the token is checked. A token the server no longer
/// accepts still passes; the server rejects the requests made afterwards.
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn check(&self, route: Route) -> Result<Navigation> {
        if !route.is_protected() {
            return Ok(Navigation::Render(route));
        }

        if self.session.is_authenticated()? {
            debug!("Session present, render {route}");
            return Ok(Navigation::Render(route));
        }

        warn!("Not logged in, redirect {route} to {}", Route::LANDING);
        Ok(Navigation::Redirect(Route::LANDING))
    }
}
