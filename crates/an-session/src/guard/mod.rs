pub(crate) mod route;

pub use route::{ROOT_ROUTE, Route};

use crate::SessionContainer;

use log::debug;

/// Outcome of gating a view behind the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    Render(V),
    Redirect(&'static str),
}

impl<V> Guarded<V> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    pub fn into_view(self) -> Option<V> {
        match self {
            Self::Render(view) => Some(view),
            Self::Redirect(_) => None,
        }
    }
}

/// Renders `view` for a signed-in session, otherwise redirects to the root route.
pub fn guard<V>(session: &SessionContainer, view: V) -> Guarded<V> {
    protect(session.is_authenticated(), view)
}

/// Pure form of [`guard`].
pub fn protect<V>(authenticated: bool, view: V) -> Guarded<V> {
    if authenticated {
        Guarded::Render(view)
    } else {
        Guarded::Redirect(ROOT_ROUTE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect { from: Route, to: &'static str },
    NotFound(String),
}

/// Resolves `path` and applies the guard to protected routes.
pub fn navigate(session: &SessionContainer, path: &str) -> Navigation {
    let Some(route) = Route::resolve(path) else {
        return Navigation::NotFound(path.to_string());
    };

    if !route.is_protected() {
        return Navigation::Render(route);
    }

    match guard(session, route.clone()) {
        Guarded::Render(route) => Navigation::Render(route),
        Guarded::Redirect(to) => {
            debug!("Redirecting unauthenticated visit of {route} to {to}");
            Navigation::Redirect { from: route, to }
        }
    }
}
