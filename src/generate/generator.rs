//! Styled username candidate generator

use rand::Rng;

use super::words::{COOL_PREFIXES, COOL_SUFFIXES, GAMING_PREFIXES, GAMING_SUFFIXES};
use super::{pick, pick_word, CONSONANTS, DIGITS, LETTERS, VOWELS};
use crate::types::Style;

/// Minimum username length the platform accepts
pub const MIN_LENGTH: usize = 3;
/// Maximum username length the platform accepts
pub const MAX_LENGTH: usize = 20;

/// Pure candidate generator: style tag in, normalized username out.
///
/// Every style picks one of its sub-strategies uniformly at random per
/// call, then runs the result through the mandatory platform
/// normalization (strip, pad, truncate - in that order).
#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameGenerator;

impl UsernameGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate one candidate using the process entropy source
    pub fn generate(&self, style: Style) -> String {
        self.generate_with(style, &mut rand::thread_rng())
    }

    /// Generate one candidate from an explicit random source
    pub fn generate_with<R: Rng>(&self, style: Style, rng: &mut R) -> String {
        let raw = match style {
            Style::FiveChar => self.five_char(rng),
            Style::Random => self.random_length(rng),
            Style::Gaming => self.gaming(rng),
            Style::Cool => self.cool(rng),
            Style::Mixed => self.mixed(rng),
        };
        normalize(raw, rng)
    }

    /// Exactly 5 characters from letters and digits
    fn five_char<R: Rng>(&self, rng: &mut R) -> String {
        match rng.gen_range(0..4) {
            // Three letters then two digits
            0 => {
                let mut name = String::with_capacity(5);
                for _ in 0..3 {
                    name.push(pick(rng, LETTERS));
                }
                for _ in 0..2 {
                    name.push(pick(rng, DIGITS));
                }
                name
            }
            // Consonant-vowel-consonant-digit-digit, pronounceable
            1 => {
                let mut name = String::with_capacity(5);
                name.push(pick(rng, CONSONANTS));
                name.push(pick(rng, VOWELS));
                name.push(pick(rng, CONSONANTS));
                name.push(pick(rng, DIGITS));
                name.push(pick(rng, DIGITS));
                name
            }
            // Mixed case with digits
            2 => {
                let mut name = String::with_capacity(5);
                name.push(pick(rng, LETTERS).to_ascii_uppercase());
                name.push(pick(rng, LETTERS));
                name.push(pick(rng, LETTERS));
                name.push(pick(rng, DIGITS));
                name.push(pick(rng, DIGITS));
                name
            }
            // Weighted random mix favoring letters
            _ => {
                let mut name = String::with_capacity(5);
                for _ in 0..5 {
                    if rng.gen_bool(0.6) {
                        name.push(pick(rng, LETTERS));
                    } else {
                        name.push(pick(rng, DIGITS));
                    }
                }
                name
            }
        }
    }

    /// Length drawn uniformly from [3, 12]
    fn random_length<R: Rng>(&self, rng: &mut R) -> String {
        let length = rng.gen_range(3..=12);
        match rng.gen_range(0..3) {
            // Weighted letters and digits
            0 => {
                let mut name = String::with_capacity(length);
                for _ in 0..length {
                    if rng.gen_bool(0.8) {
                        name.push(pick(rng, LETTERS));
                    } else {
                        name.push(pick(rng, DIGITS));
                    }
                }
                name
            }
            // Alternating consonants and vowels
            1 => {
                let mut name = String::with_capacity(length);
                for i in 0..length {
                    if i % 2 == 0 {
                        name.push(pick(rng, CONSONANTS));
                    } else {
                        name.push(pick(rng, VOWELS));
                    }
                }
                name
            }
            // Sparse mixed case with rare digits
            _ => {
                let mut name = String::with_capacity(length);
                for _ in 0..length {
                    if rng.gen_bool(0.1) {
                        name.push(pick(rng, DIGITS));
                    } else {
                        let c = pick(rng, LETTERS);
                        if rng.gen_bool(0.3) {
                            name.push(c.to_ascii_uppercase());
                        } else {
                            name.push(c);
                        }
                    }
                }
                name
            }
        }
    }

    /// Gaming-themed word compositions
    fn gaming<R: Rng>(&self, rng: &mut R) -> String {
        match rng.gen_range(0..4) {
            // Prefix + 4-digit number
            0 => {
                let prefix = pick_word(rng, GAMING_PREFIXES);
                format!("{}{}", prefix, rng.gen_range(1000..=9999))
            }
            // Word + uppercase letter + 2-digit number
            1 => {
                let word = pick_word(rng, GAMING_PREFIXES);
                let letter = pick(rng, LETTERS).to_ascii_uppercase();
                format!("{}{}{}", word, letter, rng.gen_range(10..=99))
            }
            // Two words with an optional separator
            2 => {
                let word1 = pick_word(rng, GAMING_PREFIXES);
                let word2 = pick_word(rng, GAMING_SUFFIXES);
                let sep = ["X", "_", ""][rng.gen_range(0..3)];
                format!("{}{}{}", word1, sep, word2)
            }
            // Prefix + suffix + 3-digit number
            _ => {
                let prefix = pick_word(rng, GAMING_PREFIXES);
                let suffix = pick_word(rng, GAMING_SUFFIXES);
                format!("{}{}{}", prefix, suffix, rng.gen_range(100..=999))
            }
        }
    }

    /// Cool/aesthetic word compositions
    fn cool<R: Rng>(&self, rng: &mut R) -> String {
        match rng.gen_range(0..4) {
            // Prefix + suffix
            0 => {
                let prefix = pick_word(rng, COOL_PREFIXES);
                let suffix = pick_word(rng, COOL_SUFFIXES);
                format!("{}{}", prefix, suffix)
            }
            // Single word with a short number
            1 => {
                let word = pick_word(rng, COOL_PREFIXES);
                format!("{}{}", word, rng.gen_range(1..=999))
            }
            // Lowercase aesthetic
            2 => {
                let word1 = pick_word(rng, COOL_PREFIXES);
                let word2 = pick_word(rng, COOL_SUFFIXES);
                format!("{}{}", word1, word2).to_lowercase()
            }
            // Underscore-separated lowercase
            _ => {
                let word1 = pick_word(rng, COOL_PREFIXES);
                let word2 = pick_word(rng, COOL_SUFFIXES);
                format!("{}_{}", word1.to_lowercase(), word2.to_lowercase())
            }
        }
    }

    /// Letter-majority alphanumeric mix, length in [4, 10]
    fn mixed<R: Rng>(&self, rng: &mut R) -> String {
        let length: usize = rng.gen_range(4..=10);
        match rng.gen_range(0..3) {
            // Letters grouped first, then digits
            0 => {
                let letter_count = (length as f64 * 0.6).ceil() as usize;
                let mut name = String::with_capacity(length);
                for _ in 0..letter_count {
                    name.push(pick(rng, LETTERS));
                }
                for _ in letter_count..length {
                    name.push(pick(rng, DIGITS));
                }
                name
            }
            // Interleaved letters and digits
            1 => {
                let mut name = String::with_capacity(length);
                for i in 0..length {
                    if i % 2 == 0 {
                        name.push(pick(rng, LETTERS));
                    } else {
                        name.push(pick(rng, DIGITS));
                    }
                }
                name
            }
            // Weighted random mix favoring letters
            _ => {
                let mut name = String::with_capacity(length);
                for _ in 0..length {
                    if rng.gen_bool(0.65) {
                        name.push(pick(rng, LETTERS));
                    } else {
                        name.push(pick(rng, DIGITS));
                    }
                }
                name
            }
        }
    }
}

/// Platform naming constraint, applied to every generated string.
///
/// Order matters: strip disallowed characters first, then pad or
/// truncate to the [3, 20] bounds.
pub fn normalize<R: Rng>(raw: String, rng: &mut R) -> String {
    let mut name: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    while name.len() < MIN_LENGTH {
        name.push(pick(rng, LETTERS));
    }
    if name.len() > MAX_LENGTH {
        name.truncate(MAX_LENGTH);
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn is_valid(name: &str) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&name.len())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    #[test]
    fn test_all_styles_produce_valid_candidates() {
        let gen = UsernameGenerator::new();
        let mut rng = rng();
        for style in Style::all() {
            for _ in 0..500 {
                let name = gen.generate_with(*style, &mut rng);
                assert!(is_valid(&name), "invalid candidate for {}: {:?}", style, name);
            }
        }
    }

    #[test]
    fn test_five_char_style_is_exactly_five() {
        let gen = UsernameGenerator::new();
        let mut rng = rng();
        for _ in 0..500 {
            let name = gen.generate_with(Style::FiveChar, &mut rng);
            // 5 is within bounds, so normalization never shortens it
            assert_eq!(name.len(), 5, "got {:?}", name);
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_random_style_length_bounds() {
        let gen = UsernameGenerator::new();
        let mut rng = rng();
        for _ in 0..500 {
            let name = gen.generate_with(Style::Random, &mut rng);
            assert!((3..=12).contains(&name.len()), "got {:?}", name);
        }
    }

    #[test]
    fn test_mixed_style_length_bounds() {
        let gen = UsernameGenerator::new();
        let mut rng = rng();
        for _ in 0..500 {
            let name = gen.generate_with(Style::Mixed, &mut rng);
            assert!((4..=10).contains(&name.len()), "got {:?}", name);
        }
    }

    #[test]
    fn test_themed_styles_never_exceed_max() {
        let gen = UsernameGenerator::new();
        let mut rng = rng();
        for style in [Style::Gaming, Style::Cool] {
            for _ in 0..500 {
                let name = gen.generate_with(style, &mut rng);
                assert!(name.len() <= MAX_LENGTH, "got {:?}", name);
            }
        }
    }

    #[test]
    fn test_normalize_strips_then_pads() {
        let mut rng = rng();
        let name = normalize("a-b!".to_string(), &mut rng);
        assert_eq!(name.len(), 3);
        assert!(name.starts_with("ab"));
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_normalize_truncates() {
        let mut rng = rng();
        let name = normalize("a".repeat(30), &mut rng);
        assert_eq!(name.len(), MAX_LENGTH);
    }

    #[test]
    fn test_normalize_keeps_underscore() {
        let mut rng = rng();
        let name = normalize("cool_vibes".to_string(), &mut rng);
        assert_eq!(name, "cool_vibes");
    }

    #[test]
    fn test_normalize_pads_empty_input() {
        let mut rng = rng();
        let name = normalize("!!!".to_string(), &mut rng);
        assert_eq!(name.len(), MIN_LENGTH);
    }

    #[test]
    fn test_deterministic_with_seeded_rng() {
        let gen = UsernameGenerator::new();
        let a = gen.generate_with(Style::Gaming, &mut StdRng::seed_from_u64(42));
        let b = gen.generate_with(Style::Gaming, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
