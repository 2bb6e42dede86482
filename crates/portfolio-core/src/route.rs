//! Page Routes

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Projects,
    Skills,
    Certifications,
    Contact,
}

impl Route {
    /// Navigation order
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Projects,
        Route::Skills,
        Route::Certifications,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Projects => "/projects",
            Route::Skills => "/skills",
            Route::Certifications => "/certifications",
            Route::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Projects => "Projects",
            Route::Skills => "Skills",
            Route::Certifications => "Certifications",
            Route::Contact => "Contact",
        }
    }

    /// Exact match after dropping one trailing slash. Unknown paths give `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Route::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/skills"), Some(Route::Skills));
        assert_eq!(Route::from_path("/certifications/"), Some(Route::Certifications));
        assert_eq!(Route::from_path("/blog"), None);
        assert_eq!(Route::from_path("/projects/1"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
