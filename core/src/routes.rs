//! Client-side navigation table.
//!
//! Patterns use `:name` for a single opaque path segment. Matching ignores
//! the query string and fragment and tolerates one trailing slash. There are
//! no redirects, guards, nested routes or catch-all entries: an unknown path
//! simply recognizes as `None`.

/// When the view behind a route is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    /// Bundled with the shell.
    Eager,
    /// Resolved on first navigation.
    Lazy,
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub name: &'static str,
    pub loading: Loading,
}

pub static ROUTES: [RouteEntry; 6] = [
    RouteEntry { pattern: "/", name: "home", loading: Loading::Eager },
    RouteEntry { pattern: "/articles", name: "articles", loading: Loading::Lazy },
    RouteEntry { pattern: "/articles/:id", name: "article-detail", loading: Loading::Lazy },
    RouteEntry { pattern: "/ai-news", name: "ai-news", loading: Loading::Lazy },
    RouteEntry { pattern: "/ai-news/:id", name: "ai-news-detail", loading: Loading::Lazy },
    RouteEntry { pattern: "/about", name: "about", loading: Loading::Lazy },
];

/// A recognized navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Articles,
    ArticleDetail { id: String },
    AiNews,
    AiNewsDetail { id: String },
    About,
}

impl Route {
    /// Match `path` against the route table.
    pub fn recognize(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments = split_segments(path)?;
        ROUTES.iter().find_map(|entry| {
            let params = match_pattern(entry.pattern, &segments)?;
            Self::from_entry(entry.name, params)
        })
    }

    /// Build the route named `name`; `None` for names with no variant or a
    /// detail route missing its `:id`.
    fn from_entry(name: &str, params: Vec<(&str, String)>) -> Option<Route> {
        let id = || {
            params
                .iter()
                .find(|(key, _)| *key == "id")
                .map(|(_, value)| value.clone())
        };
        match name {
            "home" => Some(Route::Home),
            "articles" => Some(Route::Articles),
            "article-detail" => id().map(|id| Route::ArticleDetail { id }),
            "ai-news" => Some(Route::AiNews),
            "ai-news-detail" => id().map(|id| Route::AiNewsDetail { id }),
            "about" => Some(Route::About),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Articles => "articles",
            Route::ArticleDetail { .. } => "article-detail",
            Route::AiNews => "ai-news",
            Route::AiNewsDetail { .. } => "ai-news-detail",
            Route::About => "about",
        }
    }

    /// The table row this route was built from.
    pub fn entry(&self) -> &'static RouteEntry {
        let name = self.name();
        ROUTES
            .iter()
            .find(|entry| entry.name == name)
            .unwrap_or(&ROUTES[0])
    }

    pub fn loading(&self) -> Loading {
        self.entry().loading
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Articles => "/articles".to_string(),
            Route::ArticleDetail { id } => format!("/articles/{id}"),
            Route::AiNews => "/ai-news".to_string(),
            Route::AiNewsDetail { id } => format!("/ai-news/{id}"),
            Route::About => "/about".to_string(),
        }
    }

    /// The `:id` parameter parsed as a content id, for detail routes.
    pub fn content_id(&self) -> Option<u64> {
        match self {
            Route::ArticleDetail { id } | Route::AiNewsDetail { id } => id.parse().ok(),
            _ => None,
        }
    }
}

/// Split an absolute path into segments; `None` for relative paths and for
/// paths with an empty segment such as `//`.
fn split_segments(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}

fn match_pattern<'p>(pattern: &'p str, segments: &[&str]) -> Option<Vec<(&'p str, String)>> {
    let expected = split_segments(pattern)?;
    if expected.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (want, got) in expected.into_iter().zip(segments) {
        if let Some(key) = want.strip_prefix(':') {
            if got.is_empty() {
                return None;
            }
            params.push((key, got.to_string()));
        } else if want != *got {
            return None;
        }
    }
    Some(params)
}
