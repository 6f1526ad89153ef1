//! Search session: explicit state ownership, debounce and stale-response gating.

mod controller;
mod debounce;
mod state;

pub use controller::{SearchController, SearchEvent, SearchHandle};
pub use debounce::Debouncer;
pub use state::{FEATURED_PAGE, FeaturedShelf, SearchSession, SearchState, SearchTicket};
