use crate::speech::timing::{WordBoundary, spoken_text};

/// Advisory steering signal derived from the spoken text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityHint {
    /// Explicit anger markers or shouting.
    Anger,
    /// Exclamations and enthusiasm.
    Excitement,
    /// Apologies and sorrow.
    Sadness,
    /// The utterance asks something.
    Question,
}

impl IntensityHint {
    /// Prompt-facing label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anger => "anger",
            Self::Excitement => "excitement",
            Self::Sadness => "sadness",
            Self::Question => "question",
        }
    }
}

const ANGER_WORDS: &[&str] = &[
    "angry", "furious", "hate", "damn", "mad", "annoyed", "livid", "stop", "enough", "shut",
];
const EXCITEMENT_WORDS: &[&str] = &[
    "wow", "amazing", "awesome", "yay", "great", "fantastic", "incredible",
];
const SADNESS_WORDS: &[&str] = &["sorry", "sad", "unfortunately", "miss", "lost", "cry"];

/// Detect lexical intensity hints in the concatenated word text.
///
/// Anger also triggers on fully upper-case words of three letters or more
/// and on repeated exclamation marks.
pub fn detect_hints(words: &[WordBoundary]) -> Vec<IntensityHint> {
    let text = spoken_text(words);
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .collect();
    let has_any = |list: &[&str]| tokens.iter().any(|t| list.contains(&t.as_str()));

    let shouting = text.split_whitespace().any(|w| {
        let letters: Vec<char> = w.chars().filter(|c| c.is_alphabetic()).collect();
        letters.len() >= 3 && letters.iter().all(|c| c.is_uppercase())
    });

    let mut hints = Vec::new();
    if has_any(ANGER_WORDS) || shouting || text.contains("!!") {
        hints.push(IntensityHint::Anger);
    }
    if has_any(EXCITEMENT_WORDS) || text.contains('!') {
        hints.push(IntensityHint::Excitement);
    }
    if has_any(SADNESS_WORDS) {
        hints.push(IntensityHint::Sadness);
    }
    if text.contains('?') {
        hints.push(IntensityHint::Question);
    }
    hints
}

#[cfg(test)]
#[path = "../../tests/unit/plan/hints.rs"]
mod tests;
