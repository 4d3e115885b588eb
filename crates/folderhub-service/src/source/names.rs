//! Codename-style folder names (`adjective-noun`).

use std::collections::HashSet;

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "amber", "brave", "calm", "daring", "eager", "fancy", "gentle", "happy", "icy", "jolly",
    "keen", "lucky", "mighty", "noble", "odd", "proud", "quick", "rapid", "silent", "tidy",
    "upbeat", "vivid", "witty", "young", "zesty", "bold", "crisp", "dusty", "fuzzy", "grand",
];

const NOUNS: &[&str] = &[
    "falcon", "badger", "comet", "dragon", "ember", "forge", "glacier", "harbor", "island",
    "jaguar", "kestrel", "lantern", "meteor", "nebula", "otter", "panther", "quartz", "raven",
    "sparrow", "tiger", "urchin", "viper", "walrus", "yeti", "zephyr", "beacon", "canyon",
    "delta", "heron", "geyser",
];

/// Attempts at a fresh random pair before falling back to a numeric suffix.
const MAX_ATTEMPTS: usize = 8;

/// Hands out names that are unique for the lifetime of the generator.
#[derive(Debug, Default)]
pub(crate) struct NameGenerator {
    used: HashSet<String>,
}

impl NameGenerator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next<R: Rng>(&mut self, rng: &mut R) -> String {
        for _ in 0..MAX_ATTEMPTS {
            let candidate = codename(rng);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }

        let base = codename(rng);
        let mut suffix = 2usize;
        loop {
            let candidate = format!("{base}-{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

fn codename<R: Rng>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{adjective}-{noun}")
}
