//! Terminal navigation.

use url::Url;

use marquee_core::{Navigator, Route};

use crate::output;

/// Prints the route a view navigates to, and the full link when a booking
/// site is configured.
#[derive(Debug, Clone, Default)]
pub struct TerminalNavigator {
    site: Option<Url>,
}

impl TerminalNavigator {
    pub fn new(site: Option<Url>) -> Self {
        Self { site }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &Route) {
        output::field("Route", &route.path());
        if let Some(site) = &self.site {
            output::field("Link", &route.url_on(site));
        }
    }
}
