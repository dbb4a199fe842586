use std::fmt::Write as _;

use crate::{
    plan::hints::IntensityHint,
    plan::request::Strategy,
    speech::timing::{VisemeEvent, WordBoundary},
};

const SYSTEM_PROMPT: &str = "\
You animate a 2D character rig while it speaks. Reply with ONE JSON object and nothing else, \
in exactly one of these shapes:
{\"mode\":\"keyframes\",\"keyframes\":[{\"timeMs\":0,\"params\":{\"<id>\":<number>}}]}
{\"mode\":\"fixed_fps\",\"fixedFps\":{\"dtMs\":<integer>=8>,\"frames\":[{\"<id>\":<number>}]}}
Rules: use only parameter ids from the glossary; keep every value inside its [min, max]; \
toggle-like parameters take whole numbers; keep motion subtle and in sync with the speech timing.";

/// Prompt pair sent to the plan generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanPrompt {
    /// Fixed instructions and output contract.
    pub system: String,
    /// Glossary, timing and steering for this request.
    pub user: String,
}

/// Everything that goes into the user prompt.
pub struct PromptInputs<'a> {
    /// Rendered glossary (already truncated).
    pub glossary: &'a str,
    /// Word boundaries.
    pub words: &'a [WordBoundary],
    /// Viseme onsets.
    pub visemes: &'a [VisemeEvent],
    /// Frame rate hint.
    pub fps: f64,
    /// Preferred plan shape.
    pub strategy: Strategy,
    /// Intensity hints.
    pub hints: &'a [IntensityHint],
}

/// Build the prompt pair for one request.
pub fn build_prompt(inputs: &PromptInputs<'_>) -> PlanPrompt {
    let mut user = String::new();

    user.push_str("Parameter glossary:\n");
    user.push_str(inputs.glossary);

    let words = inputs
        .words
        .iter()
        .map(|w| format!("{}@{}-{}", w.text, w.start_ms.round(), w.end_ms.round()))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(user, "\nWords (text@startMs-endMs): {words}\n");

    let visemes = inputs
        .visemes
        .iter()
        .map(|v| format!("{}@{}", v.viseme_id, v.start_ms.round()))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(user, "Visemes (id@startMs): {visemes}");

    let _ = writeln!(user, "Target fps: {}", inputs.fps);
    match inputs.strategy {
        Strategy::Keyframes => user.push_str("Preferred mode: keyframes\n"),
        Strategy::FixedFps => user.push_str("Preferred mode: fixed_fps\n"),
        Strategy::Auto | Strategy::Heuristic => {}
    }
    if !inputs.hints.is_empty() {
        let hints = inputs
            .hints
            .iter()
            .map(|h| h.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(user, "Emotional intensity hints: {hints}");
    }

    PlanPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/prompt.rs"]
mod tests;
