//! Cumulative line rendering.
//!
//! Line `n` of a recital is built from the last `n` phrases of the ordered list,
//! in list order:
//!
//! ```text
//! line 1:  This is the house that Jack built.
//! line 2:  This is the malt that lay in the house that Jack built.
//! ```

use jackhouse_types::{PHRASES, Policy};
use thiserror::Error;

use crate::entropy::Entropy;
use crate::order::Orderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecitalError {
    #[error("line {number} is out of range; expected 1..={len}")]
    LineOutOfRange { number: usize, len: usize },
}

/// Render line `number` of the cumulative rhyme over `phrases`.
///
/// `number` must be in `1..=phrases.len()`. Out-of-range numbers are an error,
/// never truncated or wrapped.
pub fn line<S: AsRef<str>>(phrases: &[S], number: usize) -> Result<String, RecitalError> {
    let len = phrases.len();
    if number == 0 || number > len {
        return Err(RecitalError::LineOutOfRange { number, len });
    }
    Ok(render(phrases, number))
}

/// Render every line from 1 to `phrases.len()`, joined by `"\n"`.
#[must_use]
pub fn recite<S: AsRef<str>>(phrases: &[S]) -> String {
    (1..=phrases.len())
        .map(|number| render(phrases, number))
        .collect::<Vec<_>>()
        .join("\n")
}

// Caller guarantees 1 <= number <= phrases.len().
fn render<S: AsRef<str>>(phrases: &[S], number: usize) -> String {
    let tail = &phrases[phrases.len() - number..];
    let joined = tail
        .iter()
        .map(|phrase| phrase.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    format!("This is {joined}.\n")
}

/// An ordered phrase list together with the policy that produced it.
///
/// Once built the order never changes; every line rendered from the same
/// `Recital` agrees with every other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recital<'a> {
    policy: Policy,
    pieces: Vec<&'a str>,
}

impl Recital<'static> {
    /// Order the canonical [`PHRASES`] with `orderer`.
    pub fn canonical(orderer: &dyn Orderer, entropy: &mut Entropy) -> Self {
        Self::new(orderer, PHRASES, entropy)
    }
}

impl<'a> Recital<'a> {
    pub fn new(orderer: &dyn Orderer, phrases: &[&'a str], entropy: &mut Entropy) -> Self {
        let pieces = orderer.order(phrases, entropy);
        tracing::debug!(policy = %orderer.policy(), pieces = pieces.len(), "phrases ordered");
        Self {
            policy: orderer.policy(),
            pieces,
        }
    }

    /// Wrap an already-ordered list.
    #[must_use]
    pub fn from_pieces(policy: Policy, pieces: Vec<&'a str>) -> Self {
        Self { policy, pieces }
    }

    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    #[must_use]
    pub fn pieces(&self) -> &[&'a str] {
        &self.pieces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn line(&self, number: usize) -> Result<String, RecitalError> {
        line(&self.pieces, number)
    }

    /// The longest line, containing every phrase.
    #[must_use]
    pub fn full_line(&self) -> String {
        if self.pieces.is_empty() {
            return String::new();
        }
        render(&self.pieces, self.pieces.len())
    }

    /// Every line, shortest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.pieces.len()).map(|number| render(&self.pieces, number))
    }

    #[must_use]
    pub fn recite(&self) -> String {
        recite(&self.pieces)
    }
}
