//! Blackjack table engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod decision;
pub mod events;
pub mod hand;
pub mod queue;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod shoe;
pub mod state;

pub use cards::*;
pub use config::*;
pub use decision::*;
pub use events::*;
pub use hand::*;
pub use queue::*;
pub use rng::*;
pub use round::*;
pub use scoring::*;
pub use shoe::*;
pub use state::*;
