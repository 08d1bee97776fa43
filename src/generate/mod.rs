//! Username generation module - styled candidate production
//!
//! Each style owns a small set of sub-strategies; every generated string
//! passes through the same platform normalization.

mod generator;
mod words;

pub use generator::UsernameGenerator;
pub use words::{COOL_PREFIXES, COOL_SUFFIXES, GAMING_PREFIXES, GAMING_SUFFIXES};

use rand::Rng;

/// Lowercase letters
pub const LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Digits
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Vowels, for pronounceable patterns
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Consonants, for pronounceable patterns
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q',
    'r', 's', 't', 'v', 'w', 'x', 'y', 'z',
];

/// Pick one character uniformly from a set
pub(crate) fn pick<R: Rng>(rng: &mut R, set: &[char]) -> char {
    set[rng.gen_range(0..set.len())]
}

/// Pick one word uniformly from a list
pub(crate) fn pick_word<'a, R: Rng>(rng: &mut R, list: &[&'a str]) -> &'a str {
    list[rng.gen_range(0..list.len())]
}
