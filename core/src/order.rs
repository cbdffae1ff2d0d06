//! Phrase ordering policies.
//!
//! Each [`Policy`] has exactly one [`Orderer`] implementation. The mapping is
//! the `match` in [`orderer_for`]; adding a policy means adding a variant and an
//! arm there, and the compiler points at every other place that must change.

use std::fmt;

use jackhouse_types::Policy;

use crate::entropy::Entropy;

/// Produces a permutation of a phrase list.
///
/// Implementations never mutate their input; the result is always a new `Vec`
/// holding the same elements.
pub trait Orderer: fmt::Debug {
    /// The policy this orderer implements.
    fn policy(&self) -> Policy;

    fn order<'a>(&self, phrases: &[&'a str], entropy: &mut Entropy) -> Vec<&'a str>;
}

/// Identity ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOrder;

impl Orderer for DefaultOrder {
    fn policy(&self) -> Policy {
        Policy::Default
    }

    fn order<'a>(&self, phrases: &[&'a str], _entropy: &mut Entropy) -> Vec<&'a str> {
        phrases.to_vec()
    }
}

/// Uniform shuffle of the whole list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOrder;

impl Orderer for RandomOrder {
    fn policy(&self) -> Policy {
        Policy::Random
    }

    fn order<'a>(&self, phrases: &[&'a str], entropy: &mut Entropy) -> Vec<&'a str> {
        let mut ordered = phrases.to_vec();
        entropy.shuffle(&mut ordered);
        ordered
    }
}

/// Uniform shuffle of everything but the last phrase, which stays last.
///
/// An empty list has nothing to pin and is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostlyRandomOrder;

impl Orderer for MostlyRandomOrder {
    fn policy(&self) -> Policy {
        Policy::MostlyRandom
    }

    fn order<'a>(&self, phrases: &[&'a str], entropy: &mut Entropy) -> Vec<&'a str> {
        let mut ordered = phrases.to_vec();
        if let Some((_pinned, rest)) = ordered.split_last_mut() {
            entropy.shuffle(rest);
        }
        ordered
    }
}

/// Map a policy to its orderer.
#[must_use]
pub fn orderer_for(policy: Policy) -> Box<dyn Orderer> {
    tracing::debug!(%policy, "selecting orderer");
    match policy {
        Policy::Default => Box::new(DefaultOrder),
        Policy::Random => Box::new(RandomOrder),
        Policy::MostlyRandom => Box::new(MostlyRandomOrder),
    }
}
