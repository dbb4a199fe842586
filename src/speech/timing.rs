//! Speech timing inputs produced by the text-to-speech pass.
//!
//! All times are milliseconds from the start of the utterance audio.

use serde::{Deserialize as _, Deserializer};
use serde_json::Value;

/// Kind of boundary event reported by the speech provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    /// A spoken word.
    #[default]
    Word,
    /// A punctuation mark reported as its own boundary.
    Punctuation,
}

impl WordKind {
    /// Lenient, case-insensitive read of a provider kind name.
    ///
    /// `punctuation` and `PunctuationBoundary` map to [`WordKind::Punctuation`];
    /// every other name (`Word`, `WordBoundary`, `SentenceBoundary`, ..) is a word.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "punctuation" | "punctuationboundary" | "punctuation_boundary" => Self::Punctuation,
            _ => Self::Word,
        }
    }
}

impl<'de> serde::Deserialize<'de> for WordKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(name) => Self::from_name(&name),
            _ => Self::Word,
        })
    }
}

/// One word (or punctuation) boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordBoundary {
    /// Start time in ms.
    pub start_ms: f64,
    /// End time in ms.
    pub end_ms: f64,
    /// Recognized text.
    #[serde(default)]
    pub text: String,
    /// Boundary kind.
    #[serde(default)]
    pub kind: WordKind,
}

impl WordBoundary {
    /// Convenience constructor for a spoken word.
    pub fn word(text: impl Into<String>, start_ms: f64, end_ms: f64) -> Self {
        Self {
            start_ms,
            end_ms,
            text: text.into(),
            kind: WordKind::Word,
        }
    }

    /// `true` when the text ends in `.`, `!` or `?` (ignoring trailing whitespace).
    pub fn ends_sentence(&self) -> bool {
        matches!(self.text.trim_end().chars().last(), Some('.' | '!' | '?'))
    }
}

/// A mouth-shape (viseme) onset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisemeEvent {
    /// Onset time in ms.
    pub start_ms: f64,
    /// Provider viseme id; `0` is silence.
    #[serde(deserialize_with = "lenient_viseme_id")]
    pub viseme_id: u32,
}

/// Provider ids arrive as JSON numbers of any flavour. Fractional ids round to
/// the nearest integer; negative, non-finite, non-numeric or out-of-range ids
/// read as silence.
fn lenient_viseme_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(raw
        .filter(|v| v.is_finite())
        .map(f64::round)
        .filter(|v| (0.0..=f64::from(u32::MAX)).contains(v))
        .map_or(0, |v| v as u32))
}

/// Speech span covered by the inputs: latest word end or viseme onset, `0` when both are empty.
///
/// Non-finite and negative times are ignored.
pub fn speech_duration_ms(words: &[WordBoundary], visemes: &[VisemeEvent]) -> f64 {
    words
        .iter()
        .map(|w| w.end_ms)
        .chain(visemes.iter().map(|v| v.start_ms))
        .filter(|t| t.is_finite())
        .fold(0.0, f64::max)
}

/// Word texts joined with single spaces.
pub fn spoken_text(words: &[WordBoundary]) -> String {
    words
        .iter()
        .map(|w| w.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/speech/timing.rs"]
mod tests;
