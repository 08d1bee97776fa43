//! Curated word lists for themed username styles

/// Gaming-themed prefix words
pub const GAMING_PREFIXES: &[&str] = &[
    "Pro", "Epic", "Shadow", "Dark", "Fire", "Ice", "Storm", "Thunder",
    "Dragon", "Wolf", "Fox", "Cyber", "Ninja", "Ghost", "Blade", "Steel",
    "Rapid", "Swift", "Mystic", "Neon", "Quantum", "Alpha", "Beta", "Omega",
];

/// Gaming-themed suffix words
pub const GAMING_SUFFIXES: &[&str] = &[
    "X", "Pro", "Gaming", "YT", "TTV", "God", "Lord", "King", "Master",
    "Slayer", "Hunter", "Warrior", "Legend", "Hero", "Champion", "Elite",
    "Prime", "Ultra", "Max", "Zone", "Core", "Edge", "Fury", "Rage",
];

/// Cool/aesthetic prefix words
pub const COOL_PREFIXES: &[&str] = &[
    "Aesthetic", "Vibe", "Moon", "Star", "Sky", "Ocean", "Dream", "Cosmic",
    "Aurora", "Crystal", "Pearl", "Gold", "Silver", "Rose", "Sage", "Mint",
    "Velvet", "Silk", "Marble", "Ivory", "Honey", "Sunset", "Dawn", "Twilight",
];

/// Cool/aesthetic suffix words
pub const COOL_SUFFIXES: &[&str] = &[
    "Vibes", "Dreams", "Glow", "Shine", "Flow", "Wave", "Mist", "Frost",
    "Bloom", "Bliss", "Grace", "Soul", "Heart", "Mind", "Spirit", "Aura",
    "Energy", "Magic", "Wonder", "Beauty", "Charm", "Style", "Mode", "Feel",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_lists_fit_username_bounds() {
        // Any prefix + suffix + 3-digit tail must survive truncation to 20
        // without losing the whole suffix, so keep individual words short.
        for list in [GAMING_PREFIXES, GAMING_SUFFIXES, COOL_PREFIXES, COOL_SUFFIXES] {
            for word in list {
                assert!(!word.is_empty());
                assert!(word.len() <= 9, "word too long: {}", word);
                assert!(word.chars().all(|c| c.is_ascii_alphanumeric()));
            }
        }
    }
}
