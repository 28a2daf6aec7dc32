//! Routing definitions and url resolution for menu navigation.
use thiserror::Error;
use yew_router::prelude::*;

/// Pages reachable from the shell.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Shell only, no page above it.
    #[at("/")]
    Home,
    /// Profile editor placeholder.
    #[at("/edit")]
    Edit,
    /// Profile placeholder.
    #[at("/profile")]
    Profile,
    /// Activity placeholder.
    #[at("/view")]
    View,
    /// Anything else.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes a menu entry may target.
    pub const NAVIGABLE: [Self; 4] = [Self::Home, Self::Edit, Self::Profile, Self::View];
}

/// Failure to map a menu url onto a known route.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The url is not an exact match for any route path.
    #[error("no route matches `{url}`")]
    UnknownRoute {
        /// Url supplied by the menu entry.
        url: String,
    },
}

/// Resolve a menu url by exact path match.
///
/// # Errors
/// Returns [`NavigationError::UnknownRoute`] when no navigable route has the path `url`.
pub fn resolve_route(url: &str) -> Result<Route, NavigationError> {
    Route::NAVIGABLE
        .into_iter()
        .find(|route| route.to_path() == url)
        .ok_or_else(|| NavigationError::UnknownRoute {
            url: url.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_exactly() {
        assert_eq!(resolve_route("/edit"), Ok(Route::Edit));
        assert_eq!(resolve_route("/profile"), Ok(Route::Profile));
        assert_eq!(resolve_route("/view"), Ok(Route::View));
        assert_eq!(resolve_route("/"), Ok(Route::Home));
    }

    #[test]
    fn near_misses_are_rejected() {
        for url in ["/edit/", "/Edit", "edit", "/settings", "/404", ""] {
            assert_eq!(
                resolve_route(url),
                Err(NavigationError::UnknownRoute {
                    url: url.to_string()
                })
            );
        }
    }

    #[test]
    fn error_names_the_url() {
        let err = resolve_route("/missing").unwrap_err();
        assert_eq!(err.to_string(), "no route matches `/missing`");
    }
}
