//! Recital rendering tests

use jackhouse_core::{
    DefaultOrder, Entropy, HouseError, Performance, Recital, RecitalError, Verse, line,
    play_line, play_recital, recite,
};
use jackhouse_types::{PHRASE_COUNT, PHRASES, Policy};

use crate::common::REFERENCE_LINE;

#[test]
fn default_line_twelve_is_the_reference_sentence() {
    assert_eq!(line(PHRASES, 12).unwrap(), REFERENCE_LINE);
}

#[test]
fn line_len_joins_every_phrase() {
    let phrases = ["a b", "c", "d e f"];
    assert_eq!(line(&phrases, 3).unwrap(), "This is a b c d e f.\n");
}

#[test]
fn line_one_is_the_last_phrase() {
    let phrases = ["first", "middle", "last"];
    assert_eq!(line(&phrases, 1).unwrap(), "This is last.\n");
}

#[test]
fn line_bounds_are_enforced() {
    assert_eq!(
        line(PHRASES, 0),
        Err(RecitalError::LineOutOfRange {
            number: 0,
            len: PHRASE_COUNT
        })
    );
    assert_eq!(
        line(PHRASES, PHRASE_COUNT + 1),
        Err(RecitalError::LineOutOfRange {
            number: PHRASE_COUNT + 1,
            len: PHRASE_COUNT
        })
    );
}

#[test]
fn recite_has_twelve_lines_ending_with_the_reference() {
    let text = recite(PHRASES);
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), PHRASE_COUNT);
    assert_eq!(format!("{}\n", lines[PHRASE_COUNT - 1]), REFERENCE_LINE);
    assert!(text.ends_with(REFERENCE_LINE));
}

#[test]
fn recite_grows_one_phrase_per_line() {
    let recital = Recital::canonical(&DefaultOrder, &mut Entropy::from_seed(0));
    let lines: Vec<String> = recital.lines().collect();
    for (idx, pair) in lines.windows(2).enumerate() {
        assert!(
            pair[1].ends_with(pair[0].trim_start_matches("This is ")),
            "line {} should extend line {}",
            idx + 2,
            idx + 1
        );
    }
}

#[test]
fn play_line_default_is_reference() {
    let text = play_line(None, &mut Entropy::fresh()).unwrap();
    assert_eq!(text, REFERENCE_LINE);
}

#[test]
fn play_line_unknown_policy_is_an_error() {
    let err = play_line(Some("upside_down"), &mut Entropy::fresh()).unwrap_err();
    match err {
        HouseError::UnknownPolicy(parse) => {
            assert_eq!(parse.raw(), "upside_down");
            assert!(parse.expected().contains(&"mostly_random"));
        }
        other => panic!("expected UnknownPolicy, got {other:?}"),
    }
}

#[test]
fn play_recital_random_is_a_permuted_recital() {
    let text = play_recital(Some("random"), &mut Entropy::from_seed(19)).unwrap();
    assert_eq!(text.matches("This is ").count(), PHRASE_COUNT);
    for phrase in PHRASES {
        assert!(text.contains(phrase));
    }
}

#[test]
fn performance_renders_consistent_verses() {
    let performance = Performance::new(Policy::MostlyRandom, &mut Entropy::from_seed(88));
    let recital = performance.render(Verse::Recital).unwrap();
    let full = performance.render(Verse::Full).unwrap();
    let first = performance.render(Verse::Line(1)).unwrap();

    assert!(recital.starts_with(&first));
    assert!(recital.ends_with(&full));
    assert_eq!(first, "This is the house that Jack built.\n");
}
