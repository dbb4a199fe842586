//! Permissive reader for plans proposed by the generative collaborator.
//!
//! The collaborator's output is untrusted text. [`parse_candidate`] either
//! recognizes one of the two timeline shapes or collapses everything else into
//! a single [`Candidate::Rejected`] case; it never panics and never errors.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::foundation::core::frame_step_ms;
use crate::timeline::model::Timeline;

/// Parameter values as proposed; values may be out of range or non-finite.
pub type RawParams = BTreeMap<String, f64>;

/// Shape-valid but unvalidated timeline.
#[derive(Clone, Debug, PartialEq)]
pub enum RawTimeline {
    /// Sparse snapshots; times may be negative, fractional or unordered.
    Keyframes(Vec<RawKeyframe>),
    /// Dense snapshots; `dt_ms` may be fractional or below the floor.
    FixedFps {
        /// Proposed frame step.
        dt_ms: f64,
        /// Proposed frames.
        frames: Vec<RawParams>,
    },
}

/// Unvalidated sparse snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct RawKeyframe {
    /// Proposed time.
    pub time_ms: f64,
    /// Proposed values.
    pub params: RawParams,
}

/// Outcome of reading collaborator output.
#[derive(Clone, Debug, PartialEq)]
pub enum Candidate {
    /// Recognized shape, ready for clamping.
    Plan(RawTimeline),
    /// Anything else.
    Rejected(Rejection),
}

/// Why a collaborator reply was not usable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// No JSON object could be located in the reply.
    #[error("reply contains no JSON object")]
    NoJsonObject,
    /// A JSON-looking object failed to parse.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
    /// `mode` missing or not one of the recognized tags.
    #[error("unrecognized mode {0:?}")]
    UnknownMode(Option<String>),
    /// Required container field missing or not an array.
    #[error("`{0}` is missing or not an array")]
    MissingContainer(&'static str),
}

impl From<&Timeline> for RawTimeline {
    fn from(timeline: &Timeline) -> Self {
        match timeline {
            Timeline::Keyframes { keyframes } => Self::Keyframes(
                keyframes
                    .iter()
                    .map(|k| RawKeyframe {
                        time_ms: k.time_ms as f64,
                        params: k.params.clone(),
                    })
                    .collect(),
            ),
            Timeline::FixedFps { fixed_fps } => Self::FixedFps {
                dt_ms: f64::from(fixed_fps.dt_ms),
                frames: fixed_fps.frames.clone(),
            },
        }
    }
}

/// Read a collaborator reply.
///
/// Surrounding prose and Markdown fences are tolerated. A missing or
/// non-numeric `dtMs` falls back to the step implied by `fps_hint`.
pub fn parse_candidate(reply: &str, fps_hint: f64) -> Candidate {
    match extract_object(reply) {
        Ok(obj) => match read_timeline(&obj, fps_hint) {
            Ok(raw) => Candidate::Plan(raw),
            Err(r) => Candidate::Rejected(r),
        },
        Err(r) => Candidate::Rejected(r),
    }
}

fn extract_object(reply: &str) -> Result<Map<String, Value>, Rejection> {
    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(reply.trim()) {
        return Ok(obj);
    }
    let Some(start) = reply.find('{') else {
        return Err(Rejection::NoJsonObject);
    };
    let tail = &reply[start..];
    if !tail.contains('}') {
        return Err(Rejection::NoJsonObject);
    }
    // Only the first complete value counts; trailing prose may hold stray braces.
    match serde_json::Deserializer::from_str(tail)
        .into_iter::<Value>()
        .next()
    {
        Some(Ok(Value::Object(obj))) => Ok(obj),
        Some(Ok(_)) | None => Err(Rejection::NoJsonObject),
        Some(Err(e)) => Err(Rejection::MalformedJson(e.to_string())),
    }
}

fn read_timeline(obj: &Map<String, Value>, fps_hint: f64) -> Result<RawTimeline, Rejection> {
    let mode = obj.get("mode").and_then(Value::as_str);
    match mode {
        Some("keyframes") => {
            let items = obj
                .get("keyframes")
                .and_then(Value::as_array)
                .ok_or(Rejection::MissingContainer("keyframes"))?;
            let keyframes = items
                .iter()
                .filter_map(Value::as_object)
                .map(|k| RawKeyframe {
                    time_ms: k.get("timeMs").and_then(as_number).unwrap_or(0.0),
                    params: k.get("params").map(read_params).unwrap_or_default(),
                })
                .collect();
            Ok(RawTimeline::Keyframes(keyframes))
        }
        Some("fixed_fps") => {
            let fixed = obj
                .get("fixedFps")
                .and_then(Value::as_object)
                .ok_or(Rejection::MissingContainer("fixedFps.frames"))?;
            let frames = fixed
                .get("frames")
                .and_then(Value::as_array)
                .ok_or(Rejection::MissingContainer("fixedFps.frames"))?;
            let dt_ms = fixed
                .get("dtMs")
                .and_then(as_number)
                .unwrap_or_else(|| f64::from(frame_step_ms(fps_hint)));
            Ok(RawTimeline::FixedFps {
                dt_ms,
                frames: frames.iter().map(read_params).collect(),
            })
        }
        other => Err(Rejection::UnknownMode(other.map(str::to_owned))),
    }
}

fn read_params(value: &Value) -> RawParams {
    let Some(obj) = value.as_object() else {
        return RawParams::new();
    };
    obj.iter()
        .filter_map(|(k, v)| as_number(v).map(|n| (k.clone(), n)))
        .collect()
}

/// JSON numbers, and strings holding a finite number, read as `f64`.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/candidate.rs"]
mod tests;
