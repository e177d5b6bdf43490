//! Local fallback suggestion generator
//!
//! Deterministic canned/templated suggestions used whenever the remote
//! service is disabled, unreachable, or returns an error. The keyboard must
//! always have something to show, so every (mode, tone) combination maps to
//! exactly three strings.

use super::language::LanguageMode;
use super::types::Tone;

/// Placeholder rewrites shown when there is no text to rewrite
pub const EMPTY_REWRITE_PLACEHOLDERS: [&str; 3] = [
    "Type something to rewrite",
    "Enter text first",
    "No text to rewrite",
];

/// Canned replies for a (mode, tone) combination. Pure function, always
/// exactly three non-empty strings.
pub fn replies(mode: LanguageMode, tone: Tone) -> Vec<String> {
    let canned: [&str; 3] = match (mode, tone) {
        (LanguageMode::English, Tone::Casual) => ["Sounds good!", "Sure, why not", "Haha, yeah"],
        (LanguageMode::English, Tone::Friendly) => [
            "That sounds lovely!",
            "Absolutely, count me in!",
            "Thanks for letting me know!",
        ],
        (LanguageMode::English, Tone::Professional) => [
            "Noted, thank you.",
            "I will get back to you shortly.",
            "Understood, thanks for the update.",
        ],
        (LanguageMode::Telugu, Tone::Casual) => ["సరే!", "అలాగే", "తర్వాత మాట్లాడదాం"],
        (LanguageMode::Telugu, Tone::Friendly) => [
            "చాలా బాగుంది!",
            "తప్పకుండా వస్తాను!",
            "చెప్పినందుకు ధన్యవాదాలు!",
        ],
        (LanguageMode::Telugu, Tone::Professional) => [
            "అలాగే, ధన్యవాదాలు.",
            "త్వరలో మీకు తెలియజేస్తాను.",
            "అర్థమైంది, ధన్యవాదాలు.",
        ],
        (LanguageMode::RomanizedMix, Tone::Casual) => {
            ["Sare!", "Alage le", "Tarvata matladudam"]
        }
        (LanguageMode::RomanizedMix, Tone::Friendly) => [
            "Chala bagundi!",
            "Tappakunda vastanu!",
            "Cheppinanduku thanks!",
        ],
        (LanguageMode::RomanizedMix, Tone::Professional) => [
            "Alage, dhanyavadalu.",
            "Tvaralo meeku cheptanu.",
            "Artham ayindi, dhanyavadalu.",
        ],
    };
    canned.iter().map(|s| s.to_string()).collect()
}

/// Templated rewrites of `text`. Pure function of (text, mode, tone), always
/// exactly three strings; blank input yields the fixed placeholder triple.
pub fn rewrites(text: &str, _mode: LanguageMode, tone: Tone) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return EMPTY_REWRITE_PLACEHOLDERS
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    match tone {
        Tone::Casual => vec![
            format!("{trimmed}!"),
            format!("Hey, {trimmed}"),
            trimmed.to_string(),
        ],
        Tone::Friendly => vec![
            format!("Just wanted to say: {trimmed}"),
            format!("{trimmed}, hope that works!"),
            format!("{trimmed} :)"),
        ],
        Tone::Professional => vec![
            format!("I would like to note that {trimmed}."),
            format!("Please be informed: {trimmed}"),
            format!("{trimmed}."),
        ],
    }
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod fallback_tests;
