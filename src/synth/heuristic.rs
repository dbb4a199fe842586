//! Rule-based timeline synthesis from speech timing alone.
//!
//! Used whenever the generative path is unavailable or unusable. Output is
//! deterministic for a given input and always holds at least one frame.

use std::f64::consts::TAU;

use crate::{
    catalog::definition::Catalog,
    foundation::core::frame_step_ms,
    speech::timing::{VisemeEvent, WordBoundary, speech_duration_ms},
    synth::profile::RigProfile,
    timeline::model::{FixedRateFrames, ParamSet, Timeline},
};

/// Breathing: `BREATH_CENTER + BREATH_AMP * sin(TAU * BREATH_HZ * t)`.
const BREATH_CENTER: f64 = 0.5;
const BREATH_AMP: f64 = 0.1;
const BREATH_HZ: f64 = 0.33;

const BLINK_CYCLE_MS: u64 = 3500;
const BLINK_SLOTS: u64 = 10;
const BLINK_SLOT: u64 = 9;
const EYE_CLOSED: f64 = 0.1;
const EYE_OPEN: f64 = 1.0;

const NOD_WINDOW_MS: f64 = 200.0;
const NOD_DEFLECTION: f64 = 3.0;

/// How long a viseme keeps the mouth shape after its onset.
const VISEME_HOLD_MS: f64 = 150.0;

/// Upper bound on synthesized span (10 minutes).
const MAX_SPAN_MS: f64 = 600_000.0;

/// Synthesize a low-amplitude idle / reactive timeline.
///
/// Frames run from `0` to the speech duration inclusive at
/// `round(1000 / max(1, fps))` ms (never below 8 ms). Only ids declared in
/// `catalog` are ever emitted; values are raw and still need clamping.
#[tracing::instrument(skip(words, visemes, catalog, profile), fields(words = words.len(), visemes = visemes.len()))]
pub fn synthesize(
    words: &[WordBoundary],
    visemes: &[VisemeEvent],
    catalog: &Catalog,
    fps: f64,
    profile: &RigProfile,
) -> Timeline {
    let dt_ms = frame_step_ms(fps);
    let span = speech_duration_ms(words, visemes).min(MAX_SPAN_MS);
    let frame_count = (span / f64::from(dt_ms)).floor() as u64 + 1;

    let channels = Channels::resolve(catalog, profile);
    let sentence_ends: Vec<f64> = words
        .iter()
        .filter(|w| w.ends_sentence() && w.start_ms.is_finite())
        .map(|w| w.start_ms)
        .collect();
    let mut onsets: Vec<&VisemeEvent> =
        visemes.iter().filter(|v| v.start_ms.is_finite()).collect();
    onsets.sort_by(|a, b| a.start_ms.total_cmp(&b.start_ms));

    let frames = (0..frame_count)
        .map(|i| {
            let t_ms = i * u64::from(dt_ms);
            channels.frame_at(t_ms, &sentence_ends, &onsets)
        })
        .collect::<Vec<_>>();

    tracing::debug!(dt_ms, frames = frames.len(), "synthesized fallback timeline");
    Timeline::FixedFps {
        fixed_fps: FixedRateFrames { dt_ms, frames },
    }
}

/// Profile ids that are actually present in the catalog.
struct Channels<'a> {
    breath: Option<&'a str>,
    eyes: Option<(&'a str, &'a str)>,
    head: Option<&'a str>,
    mouth: Option<&'a str>,
}

impl<'a> Channels<'a> {
    fn resolve(catalog: &Catalog, profile: &'a RigProfile) -> Self {
        let present = |id: &'a String| catalog.contains(id).then_some(id.as_str());
        Self {
            breath: present(&profile.breath),
            eyes: present(&profile.eye_left_open).zip(present(&profile.eye_right_open)),
            head: profile.head_nod.iter().find_map(present),
            mouth: present(&profile.mouth_open),
        }
    }

    fn frame_at(&self, t_ms: u64, sentence_ends: &[f64], onsets: &[&VisemeEvent]) -> ParamSet {
        let t = t_ms as f64;
        let mut params = ParamSet::new();

        if let Some(id) = self.breath {
            let v = BREATH_CENTER + BREATH_AMP * (TAU * BREATH_HZ * t / 1000.0).sin();
            params.insert(id.to_string(), v);
        }

        if let Some((left, right)) = self.eyes {
            let slot = (t_ms % BLINK_CYCLE_MS) / (BLINK_CYCLE_MS / BLINK_SLOTS);
            let v = if slot == BLINK_SLOT { EYE_CLOSED } else { EYE_OPEN };
            params.insert(left.to_string(), v);
            params.insert(right.to_string(), v);
        }

        if let Some(id) = self.head
            && sentence_ends.iter().any(|s| (s - t).abs() <= NOD_WINDOW_MS)
        {
            params.insert(id.to_string(), NOD_DEFLECTION);
        }

        if let Some(id) = self.mouth
            && !onsets.is_empty()
        {
            let idx = onsets.partition_point(|v| v.start_ms <= t);
            let open = idx
                .checked_sub(1)
                .map(|i| onsets[i])
                .filter(|v| t - v.start_ms <= VISEME_HOLD_MS)
                .map_or(0.0, |v| viseme_openness(v.viseme_id));
            params.insert(id.to_string(), open);
        }

        params
    }
}

/// Jaw openness for a viseme id (Microsoft / SAPI numbering, `0` = silence).
pub fn viseme_openness(viseme_id: u32) -> f64 {
    match viseme_id {
        0 | 21 => 0.0,
        2 | 11 => 1.0,
        1 | 9 | 10 | 13 => 0.8,
        3 | 4 | 5 | 8 => 0.6,
        6 | 7 => 0.4,
        12 | 14..=20 => 0.3,
        _ => 0.5,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/heuristic.rs"]
mod tests;
