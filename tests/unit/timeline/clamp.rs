use super::*;
use crate::catalog::definition::ParameterDefinition;
use crate::timeline::candidate::RawKeyframe;

fn catalog() -> Catalog {
    Catalog::new(vec![
        ParameterDefinition::new("ParamX", 0.0, 1.0, 0.0),
        ParameterDefinition::new("ParamAngleY", -10.0, 10.0, 0.0),
        ParameterDefinition::new("ParamToggle", 0.0, 2.0, 0.0).categorical(),
    ])
}

fn raw(pairs: &[(&str, f64)]) -> RawParams {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn messy_timelines() -> Vec<Timeline> {
    vec![
        Timeline::Keyframes {
            keyframes: vec![
                Keyframe {
                    time_ms: 300,
                    params: raw(&[("ParamX", 3.0), ("Ghost", 1.0), ("ParamToggle", 1.4)]),
                },
                Keyframe {
                    time_ms: 100,
                    params: raw(&[("ParamAngleY", -99.0)]),
                },
            ],
        },
        Timeline::FixedFps {
            fixed_fps: FixedRateFrames {
                dt_ms: 2,
                frames: vec![
                    raw(&[("ParamToggle", 1.6), ("ParamX", -1.0)]),
                    raw(&[("Ghost", 0.0), ("ParamX", f64::NAN)]),
                ],
            },
        },
    ]
}

#[test]
fn keyframe_time_and_values_are_clamped() {
    let candidate = RawTimeline::Keyframes(vec![RawKeyframe {
        time_ms: -5.0,
        params: raw(&[("ParamX", 999.0)]),
    }]);
    let out = clamp_candidate(&candidate, &catalog());
    assert_eq!(
        out,
        Timeline::Keyframes {
            keyframes: vec![Keyframe {
                time_ms: 0,
                params: raw(&[("ParamX", 1.0)]),
            }]
        }
    );
}

#[test]
fn fractional_times_round_and_sort() {
    let candidate = RawTimeline::Keyframes(vec![
        RawKeyframe {
            time_ms: 250.6,
            params: RawParams::new(),
        },
        RawKeyframe {
            time_ms: 10.4,
            params: RawParams::new(),
        },
    ]);
    let Timeline::Keyframes { keyframes } = clamp_candidate(&candidate, &catalog()) else {
        panic!("expected keyframes");
    };
    let times: Vec<u64> = keyframes.iter().map(|k| k.time_ms).collect();
    assert_eq!(times, [10, 251]);
}

#[test]
fn dt_is_floored_and_rounded() {
    let candidate = RawTimeline::FixedFps {
        dt_ms: 3.2,
        frames: vec![RawParams::new()],
    };
    let Timeline::FixedFps { fixed_fps } = clamp_candidate(&candidate, &catalog()) else {
        panic!("expected fixed_fps");
    };
    assert_eq!(fixed_fps.dt_ms, 8);

    let candidate = RawTimeline::FixedFps {
        dt_ms: 16.7,
        frames: vec![],
    };
    let Timeline::FixedFps { fixed_fps } = clamp_candidate(&candidate, &catalog()) else {
        panic!("expected fixed_fps");
    };
    assert_eq!(fixed_fps.dt_ms, 17);
}

#[test]
fn non_finite_values_are_treated_as_absent() {
    let candidate = RawTimeline::FixedFps {
        dt_ms: 20.0,
        frames: vec![raw(&[("ParamX", f64::INFINITY), ("ParamAngleY", 2.0)])],
    };
    let Timeline::FixedFps { fixed_fps } = clamp_candidate(&candidate, &catalog()) else {
        panic!("expected fixed_fps");
    };
    assert_eq!(fixed_fps.frames[0], raw(&[("ParamAngleY", 2.0)]));
}

#[test]
fn clamp_is_idempotent() {
    let cat = catalog();
    for t in messy_timelines() {
        let once = clamp_timeline(&t, &cat);
        let twice = clamp_timeline(&once, &cat);
        assert_eq!(once, twice);
    }
}

#[test]
fn output_respects_bounds_and_drops_unknown_ids() {
    let cat = catalog();
    for t in messy_timelines() {
        let out = clamp_timeline(&t, &cat);
        assert!(!out.param_ids().contains("Ghost"));
        for snapshot in out.snapshots() {
            for (id, v) in snapshot {
                let def = cat.get(id).unwrap();
                assert!(def.min <= *v && *v <= def.max, "{id}={v}");
                if def.is_categorical {
                    assert_eq!(v.fract(), 0.0);
                }
            }
        }
    }
}

#[test]
fn empty_catalog_drops_everything_but_keeps_structure() {
    let out = clamp_timeline(&messy_timelines()[1], &Catalog::default());
    assert_eq!(out.len(), 2);
    assert!(out.param_ids().is_empty());
}

#[test]
fn input_timeline_is_not_mutated() {
    let t = messy_timelines().remove(0);
    let before = t.clone();
    let _ = clamp_timeline(&t, &catalog());
    assert_eq!(t, before);
}
