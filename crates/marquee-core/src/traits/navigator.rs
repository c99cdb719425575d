//! Navigation collaborator trait.

use crate::types::Route;

/// Receives navigation requests from views.
///
/// Activating a movie card is the only side effect a card has, and it is
/// delegated here.
pub trait Navigator {
    fn navigate(&self, route: &Route);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: &Route) {
        (**self).navigate(route)
    }
}
