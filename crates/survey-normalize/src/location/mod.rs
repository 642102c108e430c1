//! City/state text to coordinates.
//!
//! - **index**: read-only city reference table keyed by lowercase city name
//! - **state**: the loose state matching rule used during lookups
//! - **resolver**: the ordered parsing attempts for a location answer

mod index;
mod resolver;
mod state;

pub use index::CityIndex;
pub use resolver::{LocationResolver, ResolveStrategy, resolve_location, resolve_location_value};
pub use state::match_states;
