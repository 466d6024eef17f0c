use serde::Serialize;

/// The fixed page table. Anything else is a not-found view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    About,
}

impl Route {
    pub const fn ordered() -> [Self; 2] {
        [Self::Home, Self::About]
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "Biography",
        }
    }

    /// Matches the path component only; a trailing slash is tolerated.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ordered()
            .into_iter()
            .find(|route| route.path() == normalized)
    }

    /// Relative file used by the static export.
    pub const fn export_file(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::About => "about/index.html",
        }
    }
}
