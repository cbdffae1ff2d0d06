//! Entry points: resolve a policy token, order the phrases once, render a verse.

use std::fmt;

use jackhouse_types::Policy;

use crate::entropy::Entropy;
use crate::errors::HouseError;
use crate::order::orderer_for;
use crate::recital::{Recital, RecitalError};

/// Which part of a recital to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verse {
    /// The longest cumulative line (line 12 for the canonical list).
    #[default]
    Full,
    /// A single numbered line, 1-based.
    Line(usize),
    /// Every line, shortest first.
    Recital,
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verse::Full => f.write_str("full line"),
            Verse::Line(number) => write!(f, "line {number}"),
            Verse::Recital => f.write_str("recital"),
        }
    }
}

/// One ordering of the canonical phrases under a fixed policy.
///
/// The policy is chosen before construction and cannot change afterwards, so
/// every verse rendered from a `Performance` comes from the same ordering.
#[derive(Debug, Clone)]
pub struct Performance {
    recital: Recital<'static>,
    seed: u64,
}

impl Performance {
    pub fn new(policy: Policy, entropy: &mut Entropy) -> Self {
        let orderer = orderer_for(policy);
        let recital = Recital::canonical(orderer.as_ref(), entropy);
        tracing::info!(%policy, seed = entropy.seed(), "performance ordered");
        Self {
            recital,
            seed: entropy.seed(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> Policy {
        self.recital.policy()
    }

    /// Seed of the entropy the ordering was drawn from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn recital(&self) -> &Recital<'static> {
        &self.recital
    }

    pub fn render(&self, verse: Verse) -> Result<String, RecitalError> {
        match verse {
            Verse::Full => Ok(self.recital.full_line()),
            Verse::Line(number) => self.recital.line(number),
            Verse::Recital => Ok(self.recital.recite()),
        }
    }
}

/// Render the full-length line for the policy named by `token`.
///
/// An absent or blank token means [`Policy::Default`]; an unknown one is an
/// error.
pub fn play_line(token: Option<&str>, entropy: &mut Entropy) -> Result<String, HouseError> {
    let policy = Policy::resolve(token)?;
    Ok(Performance::new(policy, entropy).render(Verse::Full)?)
}

/// Render the whole recital for the policy named by `token`.
pub fn play_recital(token: Option<&str>, entropy: &mut Entropy) -> Result<String, HouseError> {
    let policy = Policy::resolve(token)?;
    Ok(Performance::new(policy, entropy).render(Verse::Recital)?)
}

/// Render `verse` once per policy, each under a `--policy--` header.
///
/// Sections are separated by a blank line.
pub fn showcase(verse: Verse, entropy: &mut Entropy) -> Result<String, HouseError> {
    let mut sections = Vec::with_capacity(Policy::all().len());
    for policy in Policy::all() {
        let text = Performance::new(*policy, entropy).render(verse)?;
        sections.push(format!("--{policy}--\n{text}"));
    }
    Ok(sections.join("\n"))
}
