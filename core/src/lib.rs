//! Core domain logic for jackhouse.
//!
//! - [`order`]: the [`Orderer`] capability, its three implementations, and the
//!   [`orderer_for`] factory that maps a [`Policy`] to one of them.
//! - [`recital`]: cumulative line rendering over an ordered phrase list.
//! - [`performance`]: the entry points that resolve a policy token and render
//!   one verse of the rhyme.
//!
//! Everything here is synchronous and pure apart from the randomness drawn from
//! an injected [`Entropy`].

mod entropy;
pub mod errors;
pub mod order;
pub mod performance;
pub mod recital;

pub use entropy::Entropy;
pub use errors::HouseError;
pub use jackhouse_types::{PHRASE_COUNT, PHRASES, Policy, PolicyParseError};
pub use order::{DefaultOrder, MostlyRandomOrder, Orderer, RandomOrder, orderer_for};
pub use performance::{Performance, Verse, play_line, play_recital, showcase};
pub use recital::{Recital, RecitalError, line, recite};
