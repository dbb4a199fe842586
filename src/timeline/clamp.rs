use crate::{
    catalog::definition::Catalog,
    foundation::core::{clamp_dt_ms, clamp_time_ms},
    timeline::candidate::{RawParams, RawTimeline},
    timeline::model::{FixedRateFrames, Keyframe, ParamSet, Timeline},
};

/// Constrain a timeline to the catalog.
///
/// Unknown ids are dropped, values are clamped into `[min, max]` and
/// categorical values snapped to integers. Keyframe times become
/// non-negative whole milliseconds in ascending order; frame steps are
/// rounded and floored at 8 ms. The input is left untouched.
pub fn clamp_timeline(timeline: &Timeline, catalog: &Catalog) -> Timeline {
    clamp_candidate(&RawTimeline::from(timeline), catalog)
}

/// Same as [`clamp_timeline`], for a collaborator proposal.
pub fn clamp_candidate(raw: &RawTimeline, catalog: &Catalog) -> Timeline {
    match raw {
        RawTimeline::Keyframes(keys) => {
            let mut keyframes: Vec<Keyframe> = keys
                .iter()
                .map(|k| Keyframe {
                    time_ms: clamp_time_ms(k.time_ms),
                    params: clamp_params(&k.params, catalog),
                })
                .collect();
            keyframes.sort_by_key(|k| k.time_ms);
            Timeline::Keyframes { keyframes }
        }
        RawTimeline::FixedFps { dt_ms, frames } => Timeline::FixedFps {
            fixed_fps: FixedRateFrames {
                dt_ms: clamp_dt_ms(*dt_ms),
                frames: frames.iter().map(|f| clamp_params(f, catalog)).collect(),
            },
        },
    }
}

fn clamp_params(params: &RawParams, catalog: &Catalog) -> ParamSet {
    params
        .iter()
        .filter_map(|(id, &value)| {
            let def = catalog.get(id)?;
            def.constrain(value).map(|v| (id.clone(), v))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/clamp.rs"]
mod tests;
