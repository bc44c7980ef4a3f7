//! Page routing: location token <-> visible page.
//!
//! The mapping is a route table. [`resolve`] reads it one way (token to page)
//! and [`PageRouter::apply`] the other (page to visibility flags and canonical
//! token).

use survey_wizard_types::{Location, PageId, PageView};
use tracing::debug;

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// The page this row maps to.
    pub page: PageId,
    /// The canonical token written for the page.
    pub token: &'static str,
    /// Other tokens accepted for the page without being rewritten.
    pub aliases: &'static [&'static str],
}

impl Route {
    /// Check if `token` selects this route.
    pub fn matches(&self, token: &str) -> bool {
        self.token == token || self.aliases.contains(&token)
    }
}

/// The route table. Tokens not listed here resolve to the landing page.
pub const ROUTES: &[Route] = &[
    Route {
        page: PageId::Landing,
        token: "",
        aliases: &["#home"],
    },
    Route {
        page: PageId::Intro,
        token: "#intro",
        aliases: &[],
    },
    Route {
        page: PageId::SurveyForm,
        token: "#survey",
        aliases: &[],
    },
];

/// Map a location token to a page. Total: unknown tokens give `Landing`.
pub fn resolve(token: &str) -> PageId {
    ROUTES
        .iter()
        .find(|route| route.matches(token))
        .map(|route| route.page)
        .unwrap_or_default()
}

/// The canonical token for `page`.
pub fn canonical_token(page: PageId) -> &'static str {
    ROUTES
        .iter()
        .find(|route| route.page == page)
        .map_or("", |route| route.token)
}

fn route_matches(page: PageId, token: &str) -> bool {
    ROUTES
        .iter()
        .any(|route| route.page == page && route.matches(token))
}

/// Keeps the visible page and the location token in agreement.
#[derive(Debug, Clone, Default)]
pub struct PageRouter {
    current: PageId,
}

impl PageRouter {
    /// Create a router. Nothing is rendered until [`sync`](Self::sync).
    pub fn new() -> Self {
        Self::default()
    }

    /// The page shown by the last `apply`.
    pub fn current(&self) -> PageId {
        self.current
    }

    /// Show `page` and nothing else, and make the token canonical.
    ///
    /// The token is rewritten in place when it does not already select
    /// `page`, so no history entry is added.
    pub fn apply(&mut self, page: PageId, location: &mut impl Location, view: &mut impl PageView) {
        for candidate in PageId::ALL {
            view.set_page_visible(candidate, candidate == page);
        }
        view.set_landing_mode(page == PageId::Landing);

        if !route_matches(page, location.token()) {
            let token = canonical_token(page);
            debug!(from = location.token(), to = token, "rewriting location token");
            location.replace(token);
        }

        self.current = page;
        debug!(%page, "page applied");
    }

    /// Re-read the live token and apply the page it selects.
    ///
    /// Used on first load and for every external navigation event.
    pub fn sync(&mut self, location: &mut impl Location, view: &mut impl PageView) -> PageId {
        let page = resolve(location.token());
        self.apply(page, location, view);
        page
    }

    /// Explicit navigation: push the page's token and re-render.
    ///
    /// Returns `false` without rendering when the live token already selects
    /// `page` (no change notification would fire).
    pub fn navigate(
        &mut self,
        page: PageId,
        location: &mut impl Location,
        view: &mut impl PageView,
    ) -> bool {
        if route_matches(page, location.token()) {
            return false;
        }
        location.push(canonical_token(page));
        self.sync(location, view);
        true
    }
}
