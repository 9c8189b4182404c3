//! Route table and navigation history.

/// A page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    /// Fallback for paths that match no entry in [`ROUTE_TABLE`].
    NotFound,
}

/// Ordered (pattern, page) pairs. First exact match wins.
pub const ROUTE_TABLE: &[(&str, Route)] = &[
    ("/", Route::About),
    ("/skills", Route::Skills),
    ("/projects", Route::Projects),
    ("/experience", Route::Experience),
    ("/contact", Route::Contact),
];

impl Route {
    /// Selects the page for a path. Unknown paths resolve to [`Route::NotFound`].
    pub fn resolve(path: &str) -> Route {
        let path = normalize_path(path);
        ROUTE_TABLE
            .iter()
            .find(|(pattern, _)| *pattern == path)
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound)
    }

    /// Canonical path, or None for the fallback.
    pub fn path(&self) -> Option<&'static str> {
        ROUTE_TABLE
            .iter()
            .find(|(_, route)| route == self)
            .map(|(pattern, _)| *pattern)
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Route::About => "About",
            Route::Skills => "Skills",
            Route::Projects => "Projects",
            Route::Experience => "Experience",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }

    /// The routes shown in the navigation bar, in table order.
    pub fn nav_routes() -> impl Iterator<Item = Route> {
        ROUTE_TABLE.iter().map(|(_, route)| *route)
    }
}

/// Canonical form of a path before matching.
///
/// Drops the query and fragment, trims whitespace and one trailing slash
/// after a named segment, and maps the empty path to `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    // Empty segments are kept so paths like `//` stay unmatched.
    if normalized.len() > 1 && normalized.ends_with('/') && !normalized.ends_with("//") {
        normalized.pop();
    }
    normalized
}

/// Current path plus a back stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: String,
    history: Vec<String>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator {
    pub fn new(initial: &str) -> Self {
        Self {
            current: normalize_path(initial),
            history: Vec::new(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.current)
    }

    /// Moves to `path`. Returns false when already there.
    pub fn navigate(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        if path == self.current {
            return false;
        }
        tracing::debug!(from = %self.current, to = %path, "Navigating");
        let previous = std::mem::replace(&mut self.current, path);
        self.history.push(previous);
        true
    }

    /// Returns to the previous path, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!(from = %self.current, to = %previous, "Navigating back");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
