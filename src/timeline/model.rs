use std::collections::{BTreeMap, BTreeSet};

/// Parameter values of one snapshot, keyed by parameter id.
pub type ParamSet = BTreeMap<String, f64>;

/// Validated animation plan handed to the renderer.
///
/// Wire shape:
/// - `{ "mode": "keyframes", "keyframes": [{ "timeMs": 0, "params": { .. } }] }`
/// - `{ "mode": "fixed_fps", "fixedFps": { "dtMs": 17, "frames": [{ .. }] } }`
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode")]
pub enum Timeline {
    /// Sparse time-stamped snapshots.
    #[serde(rename = "keyframes")]
    Keyframes {
        /// Snapshots, ascending by time once clamped.
        keyframes: Vec<Keyframe>,
    },
    /// Dense snapshots at a fixed step; frame `i` plays at `i * dt_ms`.
    #[serde(rename = "fixed_fps")]
    FixedFps {
        /// Frame step and frames.
        #[serde(rename = "fixedFps")]
        fixed_fps: FixedRateFrames,
    },
}

/// One sparse snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    /// Playback time in whole ms.
    pub time_ms: u64,
    /// Parameter values at `time_ms`.
    #[serde(default)]
    pub params: ParamSet,
}

/// Dense fixed-step frame sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedRateFrames {
    /// Frame step in whole ms (>= 8 once clamped).
    pub dt_ms: u32,
    /// Frames in playback order.
    pub frames: Vec<ParamSet>,
}

impl Timeline {
    /// Wire tag of the variant.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Keyframes { .. } => "keyframes",
            Self::FixedFps { .. } => "fixed_fps",
        }
    }

    /// Number of keyframes or frames.
    pub fn len(&self) -> usize {
        match self {
            Self::Keyframes { keyframes } => keyframes.len(),
            Self::FixedFps { fixed_fps } => fixed_fps.frames.len(),
        }
    }

    /// `true` when the container holds no snapshot.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time of the last snapshot.
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Keyframes { keyframes } => {
                keyframes.iter().map(|k| k.time_ms).max().unwrap_or(0)
            }
            Self::FixedFps { fixed_fps } => (fixed_fps.frames.len().saturating_sub(1) as u64)
                .saturating_mul(u64::from(fixed_fps.dt_ms)),
        }
    }

    /// Every parameter id referenced anywhere in the timeline.
    pub fn param_ids(&self) -> BTreeSet<&str> {
        self.snapshots()
            .flat_map(|p| p.keys().map(String::as_str))
            .collect()
    }

    /// Parameter sets in container order.
    pub fn snapshots(&self) -> Box<dyn Iterator<Item = &ParamSet> + '_> {
        match self {
            Self::Keyframes { keyframes } => Box::new(keyframes.iter().map(|k| &k.params)),
            Self::FixedFps { fixed_fps } => Box::new(fixed_fps.frames.iter()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
