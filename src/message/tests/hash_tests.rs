//! Unit tests for message fingerprints.

use crate::message::domain::{
    DraftMessage, HashOutcome, MessageIdentifier, SequenceNumber, compute_hash,
};
use rstest::rstest;

fn hash(identifier: &str, sequence: u64, body: &str) -> HashOutcome {
    compute_hash(
        &MessageIdentifier::new(identifier),
        SequenceNumber::new(sequence),
        body,
    )
}

#[rstest]
#[case("1234567890", 0, "Hi Mike, can you join us for dinner tonight", "12:0:HITONIGHT")]
#[case("9876543210", 1, "Hi Keegan, did you receive the payment?", "98:1:HIPAYMENT")]
#[case("1111111111", 2, "Hello", "11:2:HELLOHELLO")]
#[case("1111111111", 2, "Hello world", "11:2:HELLOWORLD")]
#[case("2222222222", 3, "Testing", "22:3:TESTINGTESTING")]
#[case("1234567890", 0, "Hi! How are you?", "12:0:HIYOU")]
#[case("1234567890", 1, "  Hello   world  ", "12:1:HELLOWORLD")]
fn known_fingerprints(
    #[case] identifier: &str,
    #[case] sequence: u64,
    #[case] body: &str,
    #[case] expected: &str,
) {
    assert_eq!(hash(identifier, sequence, body).as_str(), expected);
}

#[rstest]
fn tabs_and_newlines_split_words() {
    assert_eq!(
        hash("4455667788", 7, "\tgood\nmorning\r\n").as_str(),
        "44:7:GOODMORNING"
    );
}

#[rstest]
fn punctuation_only_word_contributes_nothing() {
    assert_eq!(hash("1234567890", 1, "Hello ...").as_str(), "12:1:HELLO");
    assert_eq!(hash("1234567890", 1, "?! world").as_str(), "12:1:WORLD");
}

#[rstest]
fn digits_are_stripped_from_words() {
    assert_eq!(hash("1234567890", 5, "R2D2 C3PO").as_str(), "12:5:RDCPO");
}

#[rstest]
fn non_ascii_letters_are_stripped() {
    assert_eq!(hash("1234567890", 1, "café olé").as_str(), "12:1:CAFOL");
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_body_yields_empty_words(#[case] body: &str) {
    assert_eq!(hash("1234567890", 3, body).as_str(), "12:3:");
}

#[rstest]
fn only_two_identifier_characters_are_used() {
    assert_eq!(hash("ab", 0, "Hi").as_str(), "ab:0:HIHI");
    assert_eq!(hash("éèxyz", 0, "Hi").as_str(), "éè:0:HIHI");
}

#[rstest]
#[case("")]
#[case("7")]
fn short_identifier_is_degenerate(#[case] identifier: &str) {
    let outcome = hash(identifier, 1, "Hello world");
    assert_eq!(outcome, HashOutcome::IdentifierTooShort);
    assert!(!outcome.is_computed());
    assert!(outcome.hash().is_none());
    assert_eq!(outcome.as_str(), "");
    assert_eq!(outcome.to_string(), "");
}

#[rstest]
fn hashing_is_idempotent() {
    let first = hash("9876543210", 4, "Same input, same output");
    let second = hash("9876543210", 4, "Same input, same output");
    assert_eq!(first, second);
}

#[rstest]
fn draft_hash_matches_free_function() {
    let draft = DraftMessage::new("9876543210", "+27718693002", "Hi Keegan, did you receive the payment?");
    assert_eq!(
        draft.hash_at(SequenceNumber::new(1)),
        hash("9876543210", 1, "Hi Keegan, did you receive the payment?")
    );
}
