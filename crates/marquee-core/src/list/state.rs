//! Fetch progress and outcome for a collection display.

/// The state of one remote list.
///
/// Exactly one variant is active at a time. `Idle` only exists before the
/// first fetch; every fetch passes through `Loading` and ends in `Success`
/// or `Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState<T> {
    #[default]
    Idle,
    Loading,
    /// The fetched items, in the order the source returned them. An empty
    /// list is a valid success.
    Success(Vec<T>),
    /// A fixed, human-readable failure message.
    Failure(String),
}

impl<T> ListState<T> {
    /// Short name of the active variant, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ListState::Idle => "idle",
            ListState::Loading => "loading",
            ListState::Success(_) => "success",
            ListState::Failure(_) => "failure",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// Returns true once a fetch has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, ListState::Success(_) | ListState::Failure(_))
    }

    /// The fetched items, if the last fetch succeeded.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            ListState::Success(items) => Some(items),
            _ => None,
        }
    }

    /// The failure message, if the last fetch failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            ListState::Failure(message) => Some(message),
            _ => None,
        }
    }
}
