//! Local name synthesis and the Roman-alphabet name check.

use crate::core::rng::Rng;

/// Fragments combined into synthesized names.
pub const SYLLABLES: [&str; 10] = ["ka", "la", "mi", "no", "se", "ri", "ta", "zu", "xi", "vo"];

/// Build a short name: the capitalized initial of one random syllable
/// followed by a second random syllable, e.g. `"Kla"`.
pub fn generate_name(rng: &mut Rng) -> String {
    let mut name = String::with_capacity(3);
    if let Some(first) = rng.pick(&SYLLABLES) {
        name.extend(first.chars().take(1).flat_map(char::to_uppercase));
    }
    if let Some(second) = rng.pick(&SYLLABLES) {
        name.push_str(second);
    }
    name
}

/// True when `name` has at least one letter and only ASCII letters and spaces.
pub fn is_roman_name(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}
