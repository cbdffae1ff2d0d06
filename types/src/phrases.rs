//! The fixed phrase list of "The House That Jack Built".

/// Number of phrases in [`PHRASES`].
pub const PHRASE_COUNT: usize = 12;

/// Phrase fragments in canonical order.
///
/// The last entry is the innermost clause; a cumulative line of length `n` is
/// built from the last `n` entries. Orderers never mutate this array, they copy
/// out of it.
pub const PHRASES: &[&str; PHRASE_COUNT] = &[
    "the horse and the hound and the horn that belonged to",
    "the farmer sowing his corn that kept",
    "the rooster that crowed in the morn that woke",
    "the priest all shaven and shorn that married",
    "the man all tattered and torn that kissed",
    "the maiden all forlorn that milked",
    "the cow with the crumpled horn that tossed",
    "the dog that worried",
    "the cat that killed",
    "the rat that ate",
    "the malt that lay in",
    "the house that Jack built",
];
