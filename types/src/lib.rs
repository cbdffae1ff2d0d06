//! Core domain types for jackhouse.
//!
//! This crate contains pure domain types with no IO, no randomness, and minimal
//! dependencies: the fixed phrase list of the rhyme and the closed set of
//! ordering policies that can be applied to it.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod phrases;
mod policy;

pub use phrases::{PHRASE_COUNT, PHRASES};
pub use policy::{Policy, PolicyParseError};
