use serde_json::Value;

use crate::{
    foundation::error::{RigError, RigResult},
    speech::timing::{VisemeEvent, WordBoundary},
};

/// Preferred plan shape passed to the collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Let the collaborator choose.
    #[default]
    Auto,
    /// Ask for sparse keyframes.
    Keyframes,
    /// Ask for dense fixed-rate frames.
    FixedFps,
    /// Skip the collaborator and synthesize directly.
    Heuristic,
}

impl Strategy {
    /// Lenient parse; unrecognized hints map to [`Strategy::Auto`].
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "keyframes" | "keyframe" => Self::Keyframes,
            "fixed_fps" | "fixed" | "frames" => Self::FixedFps,
            "heuristic" | "fallback" | "offline" => Self::Heuristic,
            _ => Self::Auto,
        }
    }
}

/// Per-call input bundle.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanRequest {
    /// Word boundaries from the speech pass.
    pub words: Vec<WordBoundary>,
    /// Viseme onsets from the speech pass.
    pub visemes: Vec<VisemeEvent>,
    /// Raw parameter catalog text.
    pub catalog: String,
    /// Frame rate hint; `None` uses the configured default.
    pub fps: Option<f64>,
    /// Preferred plan shape.
    pub strategy: Strategy,
}

impl PlanRequest {
    /// Request with no fps or strategy hint.
    pub fn new(
        words: Vec<WordBoundary>,
        visemes: Vec<VisemeEvent>,
        catalog: impl Into<String>,
    ) -> Self {
        Self {
            words,
            visemes,
            catalog: catalog.into(),
            fps: None,
            strategy: Strategy::Auto,
        }
    }

    /// Validate and read a JSON request body:
    /// `{ words: [..], visemes: [..], parameterCatalog: "..", fps?: n, strategy?: ".." }`.
    ///
    /// Missing or non-array `words` / `visemes` (or malformed entries) are
    /// [`RigError::Validation`] errors. A missing catalog is an empty catalog.
    pub fn from_json(body: &Value) -> RigResult<Self> {
        let obj = body
            .as_object()
            .ok_or_else(|| RigError::validation("request body must be a JSON object"))?;

        let words = read_array::<WordBoundary>(obj.get("words"), "words")?;
        let visemes = read_array::<VisemeEvent>(obj.get("visemes"), "visemes")?;

        let catalog = match obj.get("parameterCatalog") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(RigError::validation("`parameterCatalog` must be a string"));
            }
        };

        let fps = match obj.get("fps") {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                v.as_f64()
                    .ok_or_else(|| RigError::validation("`fps` must be a number"))?,
            ),
        };

        let strategy = obj
            .get("strategy")
            .and_then(Value::as_str)
            .map(Strategy::from_hint)
            .unwrap_or_default();

        Ok(Self {
            words,
            visemes,
            catalog,
            fps,
            strategy,
        })
    }
}

fn read_array<T: serde::de::DeserializeOwned>(
    value: Option<&Value>,
    field: &str,
) -> RigResult<Vec<T>> {
    let items = value
        .and_then(Value::as_array)
        .ok_or_else(|| RigError::validation(format!("`{field}` must be an array")))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            T::deserialize(item)
                .map_err(|e| RigError::validation(format!("`{field}[{i}]`: {e}")))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/plan/request.rs"]
mod tests;
