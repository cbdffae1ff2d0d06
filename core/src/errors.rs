//! Error type for the recital entry points.

use jackhouse_types::PolicyParseError;
use thiserror::Error;

use crate::recital::RecitalError;

/// Failure of a [`crate::play_line`] / [`crate::play_recital`] call.
///
/// Both variants signal caller misuse; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HouseError {
    #[error(transparent)]
    UnknownPolicy(#[from] PolicyParseError),
    #[error(transparent)]
    Recital(#[from] RecitalError),
}
