//! Heuristic availability scoring, used when the remote authority
//! cannot be reached or answers ambiguously

use rand::Rng;
use regex::Regex;

/// Generic words that are usually long gone on any platform
const COMMON_WORDS: &[&str] = &[
    "test", "user", "player", "admin", "guest", "game", "pro", "cool", "epic", "best",
];

/// Score clamp bounds for the smart tier
const MIN_SCORE: f64 = 0.1;
const MAX_SCORE: f64 = 0.9;

/// Feature-weighted and bucket heuristics
pub struct Heuristics {
    simple_word: Regex,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristics {
    pub fn new() -> Self {
        Self {
            // Plain dictionary-word shape: all letters, 3-8 chars
            simple_word: Regex::new(r"^[A-Za-z]{3,8}$").expect("invalid simple-word pattern"),
        }
    }

    /// Smart tier: feature-weighted availability score, clamped to
    /// [0.1, 0.9] before the draw.
    pub fn smart_score(&self, username: &str) -> f64 {
        let mut score: f64 = 0.5;

        // Length analysis
        if username.len() >= 10 {
            score += 0.3;
        } else if username.len() <= 4 {
            score -= 0.4;
        } else if username.len() <= 6 {
            score -= 0.2;
        }

        // Pattern analysis
        let has_digits = username.chars().any(|c| c.is_ascii_digit());
        let has_mixed_case = username.chars().any(|c| c.is_ascii_lowercase())
            && username.chars().any(|c| c.is_ascii_uppercase());
        let has_separators = username.contains('_') || username.contains('-');

        if has_digits {
            score += 0.2;
        }
        if has_mixed_case {
            score += 0.15;
        }
        if has_separators {
            score += 0.1;
        }

        // Common word detection
        let lower = username.to_lowercase();
        if COMMON_WORDS.iter().any(|word| lower.contains(word)) {
            score -= 0.3;
        }

        // Plain dictionary words are almost always taken
        if self.simple_word.is_match(username) && !has_digits {
            score -= 0.4;
        }

        score.clamp(MIN_SCORE, MAX_SCORE)
    }

    /// Smart tier verdict
    pub fn smart<R: Rng>(&self, username: &str, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.smart_score(username)
    }

    /// Basic tier: coarse length/digit bucket probability. Terminal
    /// fallback, never fails.
    pub fn basic_probability(&self, username: &str) -> f64 {
        let has_digits = username.chars().any(|c| c.is_ascii_digit());
        let length = username.len();

        if length >= 8 && has_digits {
            0.8
        } else if length >= 6 && has_digits {
            0.6
        } else if length <= 4 {
            0.2
        } else {
            0.5
        }
    }

    /// Basic tier verdict
    pub fn basic<R: Rng>(&self, username: &str, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.basic_probability(username)
    }
}
