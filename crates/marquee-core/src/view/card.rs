//! A single movie card.

use tracing::debug;

use crate::movie::MovieRecord;
use crate::traits::Navigator;
use crate::types::{MovieId, Route};

/// Shown in place of a release date the record does not carry.
pub const RELEASE_DATE_TBA: &str = "Release date TBA";

/// Shown in place of an empty title.
pub const UNTITLED: &str = "Untitled";

/// Visual flavour of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    /// Long month names and a "Book Tickets" action.
    #[default]
    Standard,
    /// Abbreviated month names and a "Book Now" action.
    Compact,
}

impl CardStyle {
    fn date_format(self) -> &'static str {
        match self {
            CardStyle::Standard => "%B %-d, %Y",
            CardStyle::Compact => "%b %-d, %Y",
        }
    }

    /// Label of the booking action.
    pub fn action_label(self) -> &'static str {
        match self {
            CardStyle::Standard => "Book Tickets",
            CardStyle::Compact => "Book Now",
        }
    }
}

/// What the poster area of a card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    Image(String),
    /// No poster reference; a placeholder is drawn instead.
    Placeholder,
}

/// Presentation of one movie record plus its booking action.
///
/// Cards never fail: absent fields degrade to placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCardView {
    record: MovieRecord,
    style: CardStyle,
}

impl MovieCardView {
    pub fn new(record: MovieRecord, style: CardStyle) -> Self {
        Self { record, style }
    }

    pub fn id(&self) -> &MovieId {
        &self.record.id
    }

    pub fn style(&self) -> CardStyle {
        self.style
    }

    pub fn title(&self) -> &str {
        let title = self.record.title.trim();
        if title.is_empty() { UNTITLED } else { title }
    }

    /// Release date for display, e.g. "May 1, 2024".
    pub fn release_label(&self) -> String {
        match self.record.release_date {
            Some(date) => date.format(self.style.date_format()).to_string(),
            None => RELEASE_DATE_TBA.to_string(),
        }
    }

    pub fn poster(&self) -> Poster {
        match &self.record.poster_url {
            Some(url) => Poster::Image(url.clone()),
            None => Poster::Placeholder,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.record.description.as_deref()
    }

    pub fn action_label(&self) -> &'static str {
        self.style.action_label()
    }

    /// The booking flow route for this movie.
    pub fn booking_route(&self) -> Route {
        Route::Booking(self.record.id.clone())
    }

    /// Activate the booking action.
    pub fn activate(&self, navigator: &impl Navigator) -> Route {
        let route = self.booking_route();
        debug!(id = %self.record.id, %route, "Card activated");
        navigator.navigate(&route);
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::{RecordingNavigator, dated, movie};

    #[test]
    fn formats_release_date_long() {
        let card = MovieCardView::new(dated("a", "X", 2024, 5, 1), CardStyle::Standard);
        assert_eq!(card.title(), "X");
        assert_eq!(card.release_label(), "May 1, 2024");

        let card = MovieCardView::new(dated("b", "Y", 2023, 12, 25), CardStyle::Standard);
        assert_eq!(card.release_label(), "December 25, 2023");
    }

    #[test]
    fn formats_release_date_compact() {
        let card = MovieCardView::new(dated("b", "Y", 2023, 12, 25), CardStyle::Compact);
        assert_eq!(card.release_label(), "Dec 25, 2023");
        assert_eq!(card.action_label(), "Book Now");
    }

    #[test]
    fn missing_fields_degrade() {
        let card = MovieCardView::new(movie("a", "  "), CardStyle::default());
        assert_eq!(card.title(), UNTITLED);
        assert_eq!(card.release_label(), RELEASE_DATE_TBA);
        assert_eq!(card.poster(), Poster::Placeholder);
        assert!(card.description().is_none());
    }

    #[test]
    fn poster_uses_record_url() {
        let card = MovieCardView::new(movie("a", "X").with_poster_url("u1"), CardStyle::Standard);
        assert_eq!(card.poster(), Poster::Image("u1".to_string()));
    }

    #[test]
    fn activation_navigates_to_booking() {
        let navigator = RecordingNavigator::default();
        let card = MovieCardView::new(movie("abc", "X"), CardStyle::Standard);

        let route = card.activate(&navigator);

        assert_eq!(route.path(), "/booking/abc");
        assert_eq!(*navigator.visited.lock().unwrap(), vec![route]);
    }
}
