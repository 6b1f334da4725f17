//! Static compiled-in content: the starter deck and the feature list.
//!
//! Content is data consumed by frontends. It never appears in game state
//! and is not configurable at runtime.
pub mod deck;
pub mod features;

pub use deck::{STARTER_FACES, starter_deck};
pub use features::{FEATURES, Feature};
