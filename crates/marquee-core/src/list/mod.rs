//! Remote list lifecycle: fetch a collection, then render it.

mod controller;
mod state;

pub use controller::RemoteListController;
pub use state::ListState;
