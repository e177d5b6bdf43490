//! Language/dialect detection for in-progress keyboard text
//!
//! Pure classification, no state or I/O: safe to call from any thread.
//! Priority order: Telugu script beats romanized markers beats the English
//! default. Romanized Telugu ("nenu vachanu", "ela unnav") is recognized by
//! whole-word marker matching so that markers never fire inside larger
//! English words.

/// Classification of the dominant language/script of a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageMode {
    /// Plain English (also the default for blank input)
    English,
    /// Text containing Telugu script characters
    Telugu,
    /// Latin-script text with romanized Telugu markers
    RomanizedMix,
}

impl LanguageMode {
    /// All modes, in a fixed order
    pub const ALL: [LanguageMode; 3] = [
        LanguageMode::English,
        LanguageMode::Telugu,
        LanguageMode::RomanizedMix,
    ];

    /// Token sent to the suggestion service
    pub fn api_token(&self) -> &'static str {
        match self {
            LanguageMode::English => "english",
            LanguageMode::Telugu => "telugu",
            LanguageMode::RomanizedMix => "romanized",
        }
    }
}

/// Romanized Telugu words that are unambiguous on their own.
/// Any single whole-word match classifies the text as RomanizedMix.
const STRONG_MARKERS: [&str; 42] = [
    "nenu",
    "nuvvu",
    "meeru",
    "memu",
    "manam",
    "vaadu",
    "aame",
    "vallu",
    "vachanu",
    "vastunnanu",
    "veltunnanu",
    "velladu",
    "unnanu",
    "unnaru",
    "unnadu",
    "undi",
    "cheppu",
    "cheppandi",
    "chesanu",
    "chestunnanu",
    "cheyyi",
    "enti",
    "emiti",
    "enduku",
    "ekkada",
    "eppudu",
    "evaru",
    "elaga",
    "bagunnava",
    "bagunnanu",
    "bagundi",
    "telusu",
    "teliyadu",
    "kavali",
    "vaddu",
    "ledu",
    "leru",
    "avunu",
    "kaadu",
    "chala",
    "konchem",
    "malli",
];

/// Short, ambiguous romanized tokens ("le" and "ga" also occur in English
/// fragments). Two or more whole-word occurrences are required.
const WEAK_MARKERS: [&str; 6] = ["ela", "unnav", "em", "ra", "le", "ga"];

/// Minimum weak-marker occurrences that classify as RomanizedMix
const WEAK_MATCH_THRESHOLD: usize = 2;

fn is_telugu_char(c: char) -> bool {
    // Telugu Unicode block
    ('\u{0C00}'..='\u{0C7F}').contains(&c)
}

/// Classify a text span into a [`LanguageMode`].
///
/// First match wins:
/// 1. blank text is English
/// 2. any Telugu-script character makes it Telugu
/// 3. any strong romanized marker word makes it RomanizedMix
/// 4. two or more weak marker words make it RomanizedMix
/// 5. otherwise English
pub fn detect(text: &str) -> LanguageMode {
    if text.trim().is_empty() {
        return LanguageMode::English;
    }

    if text.chars().any(is_telugu_char) {
        return LanguageMode::Telugu;
    }

    // Whole-word matching: tokens are maximal alphanumeric runs, so a marker
    // never matches inside a larger word ("naku" does not match "unaku").
    let lower = text.to_lowercase();
    let mut weak_hits = 0;
    for token in lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        if STRONG_MARKERS.contains(&token) {
            return LanguageMode::RomanizedMix;
        }
        if WEAK_MARKERS.contains(&token) {
            weak_hits += 1;
            if weak_hits >= WEAK_MATCH_THRESHOLD {
                return LanguageMode::RomanizedMix;
            }
        }
    }

    LanguageMode::English
}

/// Classify from the keyboard's current input state.
///
/// Prefers the full text field when it has content, otherwise falls back to
/// the word being composed.
pub fn detect_from_current_input(current_word: &str, full_text: &str) -> LanguageMode {
    if !full_text.trim().is_empty() {
        detect(full_text)
    } else {
        detect(current_word)
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod language_tests;
