//! Ordering policies and their token parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the phrase list is permuted before a recital.
///
/// The set is closed: tokens are mapped to variants by an explicit table, never
/// by name-based lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Policy {
    /// Canonical order.
    #[default]
    Default,
    /// Uniform shuffle of every phrase.
    Random,
    /// Uniform shuffle of every phrase except the last, which stays pinned.
    MostlyRandom,
}

const POLICY_PARSE_VALUES: &[&str] = &["default", "random", "mostly_random"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid policy '{raw}'; expected one of: {expected:?}")]
pub struct PolicyParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl PolicyParseError {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            expected: POLICY_PARSE_VALUES,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

impl Policy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Policy::Default => "default",
            Policy::Random => "random",
            Policy::MostlyRandom => "mostly_random",
        }
    }

    /// Whether ordering under this policy consumes randomness.
    #[must_use]
    pub const fn is_random(self) -> bool {
        !matches!(self, Policy::Default)
    }

    #[must_use]
    pub const fn all() -> &'static [Policy] {
        &[Policy::Default, Policy::Random, Policy::MostlyRandom]
    }

    /// Parse a policy token.
    ///
    /// Case-insensitive; surrounding whitespace is ignored, `-` is accepted for
    /// `_`, and a leading `:` is tolerated so `:mostly_random` reads the same as
    /// `mostly_random`. Empty input is an error here; use [`Policy::resolve`]
    /// when an absent token should mean [`Policy::Default`].
    pub fn parse(raw: &str) -> Result<Self, PolicyParseError> {
        let trimmed = raw.trim();
        let normalized = trimmed
            .strip_prefix(':')
            .unwrap_or(trimmed)
            .to_ascii_lowercase()
            .replace('-', "_");
        match normalized.as_str() {
            "default" => Ok(Policy::Default),
            "random" => Ok(Policy::Random),
            "mostly_random" => Ok(Policy::MostlyRandom),
            _ => Err(PolicyParseError::new(trimmed)),
        }
    }

    /// Resolve an optional token, applying the documented default.
    ///
    /// `None` and blank tokens resolve to [`Policy::Default`]. Anything else
    /// must name a known policy; unknown tokens are an error, not a fallback.
    pub fn resolve(token: Option<&str>) -> Result<Self, PolicyParseError> {
        match token {
            Some(raw) if !raw.trim().is_empty() => Self::parse(raw),
            _ => Ok(Policy::Default),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Policy {
    type Error = PolicyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Policy> for String {
    fn from(policy: Policy) -> Self {
        policy.as_str().to_string()
    }
}
