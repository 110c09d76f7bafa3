//! Client-side route table.

use std::cell::Cell;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::client::auth::{AuthGuard, CredentialProvider, Navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Workations,
    About,
    Login,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Workations => "/workations",
            Route::About => "/about",
            Route::Login => "/login",
        }
    }

    /// Maps a location to its route. The empty path lands on the listing.
    pub fn resolve(path: &str) -> Option<Route> {
        match path.trim_matches('/') {
            "" | "workations" => Some(Route::Workations),
            "about" => Some(Route::About),
            "login" => Some(Route::Login),
            _ => None,
        }
    }

    pub const fn requires_auth(self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route matches '{0}'")]
    UnknownPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Allowed(Route),
    /// The guard denied the target and sent the router elsewhere.
    Redirected(Route),
}

/// Tracks the current route and applies the guard to protected ones.
pub struct Router<C> {
    current: Cell<Route>,
    guard: AuthGuard<C>,
}

impl<C: CredentialProvider> Router<C> {
    pub fn new(guard: AuthGuard<C>) -> Self {
        Self {
            current: Cell::new(Route::Login),
            guard,
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn navigate_to(&self, path: &str) -> Result<NavigationOutcome, NavigationError> {
        let route =
            Route::resolve(path).ok_or_else(|| NavigationError::UnknownPath(path.to_string()))?;

        if route.requires_auth() && !self.guard.can_activate(self) {
            return Ok(NavigationOutcome::Redirected(self.current()));
        }

        self.current.set(route);
        Ok(NavigationOutcome::Allowed(route))
    }
}

impl<C> Navigator for Router<C> {
    fn navigate(&self, route: Route) {
        self.current.set(route);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Toggle(Cell<bool>);

    impl CredentialProvider for &Toggle {
        fn has_valid_credential(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn resolves_paths() {
        assert_eq!(Route::resolve(""), Some(Route::Workations));
        assert_eq!(Route::resolve("/"), Some(Route::Workations));
        assert_eq!(Route::resolve("/workations"), Some(Route::Workations));
        assert_eq!(Route::resolve("about/"), Some(Route::About));
        assert_eq!(Route::resolve("/login"), Some(Route::Login));
        assert_eq!(Route::resolve("/admin"), None);
        assert_eq!(Route::About.to_string(), "/about");
    }

    #[test]
    fn protected_routes_redirect_without_credential() {
        let signed_in = Toggle(Cell::new(false));
        let router = Router::new(AuthGuard::new(&signed_in));

        assert_eq!(
            router.navigate_to("/workations"),
            Ok(NavigationOutcome::Redirected(Route::Login))
        );
        assert_eq!(router.current(), Route::Login);

        signed_in.0.set(true);
        assert_eq!(
            router.navigate_to(""),
            Ok(NavigationOutcome::Allowed(Route::Workations))
        );
        assert_eq!(router.current(), Route::Workations);
    }

    #[test]
    fn login_is_reachable_without_credential() {
        let signed_in = Toggle(Cell::new(false));
        let router = Router::new(AuthGuard::new(&signed_in));

        assert_eq!(
            router.navigate_to("/login"),
            Ok(NavigationOutcome::Allowed(Route::Login))
        );
    }

    #[test]
    fn unknown_path_is_an_error() {
        let signed_in = Toggle(Cell::new(true));
        let router = Router::new(AuthGuard::new(&signed_in));

        assert_eq!(
            router.navigate_to("/nowhere"),
            Err(NavigationError::UnknownPath("/nowhere".to_string()))
        );
    }
}
