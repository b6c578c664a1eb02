//! Route resolution and header menu state.
//!
//! DESIGN
//! ======
//! `Page` is the single source of truth for the site's four routes. Paths
//! from older hash-routed links (`#/profile`) resolve the same way as plain
//! paths, and anything unknown falls back to the home page.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Top-level views of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Profile,
    Services,
    Contact,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Profile, Self::Services, Self::Contact];

    /// Canonical path for this page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Profile => "/profile",
            Self::Services => "/services",
            Self::Contact => "/contact",
        }
    }

    /// Resolve a browser location to a page.
    ///
    /// Accepts `/profile`, `/profile/`, `#/profile`, `/#/profile`, and
    /// ignores any query string. Unknown paths resolve to [`Page::Home`].
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let route = legacy_hash_route(location).unwrap_or(location);
        let route = route.split(['?', '#']).next().unwrap_or_default();
        let route = route.trim_end_matches('/');
        match route {
            "/profile" => Self::Profile,
            "/services" => Self::Services,
            "/contact" => Self::Contact,
            _ => Self::Home,
        }
    }
}

/// Extract the route from a hash-routed location (`#/x` or `/#/x`).
#[must_use]
pub fn legacy_hash_route(location: &str) -> Option<&str> {
    let hash = location.strip_prefix('/').unwrap_or(location);
    hash.strip_prefix('#').filter(|rest| rest.starts_with('/'))
}

/// Header chrome state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Called when a mobile menu link is activated. Route changes alone do
    /// not close the menu.
    pub fn close(&mut self) {
        self.mobile_menu_open = false;
    }
}
