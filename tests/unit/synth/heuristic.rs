use super::*;
use crate::catalog::definition::ParameterDefinition;
use crate::catalog::parse::parse_catalog;

fn fixed(t: Timeline) -> FixedRateFrames {
    match t {
        Timeline::FixedFps { fixed_fps } => fixed_fps,
        Timeline::Keyframes { .. } => panic!("fallback must be fixed_fps"),
    }
}

fn full_catalog() -> Catalog {
    Catalog::new(vec![
        ParameterDefinition::new("ParamBreath", 0.0, 1.0, 0.5),
        ParameterDefinition::new("ParamEyeLOpen", 0.0, 1.0, 1.0),
        ParameterDefinition::new("ParamEyeROpen", 0.0, 1.0, 1.0),
        ParameterDefinition::new("ParamAngleY", -10.0, 10.0, 0.0),
        ParameterDefinition::new("ParamMouthOpenY", 0.0, 1.0, 0.0),
    ])
}

#[test]
fn empty_everything_yields_one_empty_frame() {
    let out = fixed(synthesize(
        &[],
        &[],
        &Catalog::default(),
        60.0,
        &RigProfile::default(),
    ));
    assert_eq!(out.frames.len(), 1);
    assert!(out.frames[0].is_empty());
    assert!(out.dt_ms >= 8);
}

#[test]
fn breath_only_catalog_at_60fps() {
    let cat = Catalog::new(parse_catalog("- ParamBreath — [0, 1] (default 0.5)").definitions);
    let out = fixed(synthesize(&[], &[], &cat, 60.0, &RigProfile::default()));
    assert_eq!(out.dt_ms, 17);
    assert_eq!(out.frames.len(), 1);
    assert!((out.frames[0]["ParamBreath"] - 0.5).abs() < 1e-9);
}

#[test]
fn frames_cover_duration_inclusive() {
    let words = vec![WordBoundary::word("hello", 0.0, 100.0)];
    let out = fixed(synthesize(
        &words,
        &[],
        &full_catalog(),
        50.0,
        &RigProfile::default(),
    ));
    assert_eq!(out.dt_ms, 20);
    assert_eq!(out.frames.len(), 6);
}

#[test]
fn breath_follows_slow_sine() {
    let words = vec![WordBoundary::word("long", 0.0, 3000.0)];
    let out = fixed(synthesize(
        &words,
        &[],
        &full_catalog(),
        10.0,
        &RigProfile::default(),
    ));
    for (i, frame) in out.frames.iter().enumerate() {
        let t = (i as f64) * f64::from(out.dt_ms) / 1000.0;
        let expected = 0.5 + 0.1 * (std::f64::consts::TAU * 0.33 * t).sin();
        assert!((frame["ParamBreath"] - expected).abs() < 1e-9);
        assert!((0.4..=0.6).contains(&frame["ParamBreath"]));
    }
}

#[test]
fn blink_closes_eyes_in_last_tenth_of_cycle() {
    let words = vec![WordBoundary::word("blink", 0.0, 7000.0)];
    let out = fixed(synthesize(
        &words,
        &[],
        &full_catalog(),
        20.0,
        &RigProfile::default(),
    ));
    assert_eq!(out.dt_ms, 50);
    let eye_at = |ms: u64| out.frames[(ms / 50) as usize]["ParamEyeLOpen"];
    assert_eq!(eye_at(0), 1.0);
    assert_eq!(eye_at(3100), 1.0);
    assert_eq!(eye_at(3150), 0.1);
    assert_eq!(eye_at(3450), 0.1);
    assert_eq!(eye_at(3500), 1.0);
    assert_eq!(eye_at(6650), 0.1);
    for frame in &out.frames {
        assert_eq!(frame["ParamEyeLOpen"], frame["ParamEyeROpen"]);
    }
}

#[test]
fn blink_needs_both_eyes() {
    let cat = Catalog::new(vec![ParameterDefinition::new(
        "ParamEyeLOpen",
        0.0,
        1.0,
        1.0,
    )]);
    let out = fixed(synthesize(&[], &[], &cat, 60.0, &RigProfile::default()));
    assert!(out.frames[0].is_empty());
}

#[test]
fn sentence_end_nods_near_word_start() {
    let words = vec![
        WordBoundary::word("Please", 0.0, 900.0),
        WordBoundary::word("Stop.", 1000.0, 1400.0),
    ];
    let out = fixed(synthesize(
        &words,
        &[],
        &full_catalog(),
        60.0,
        &RigProfile::default(),
    ));
    let closest = (1000.0_f64 / 17.0).round() as usize;
    assert_eq!(out.frames[closest].get("ParamAngleY"), Some(&3.0));
    assert!(!out.frames[0].contains_key("ParamAngleY"));
    assert!(!out.frames[out.frames.len() - 1].contains_key("ParamAngleY"));
}

#[test]
fn mid_sentence_words_do_not_nod() {
    let words = vec![WordBoundary::word("well,", 0.0, 500.0)];
    let out = fixed(synthesize(
        &words,
        &[],
        &full_catalog(),
        60.0,
        &RigProfile::default(),
    ));
    assert!(out.frames.iter().all(|f| !f.contains_key("ParamAngleY")));
}

#[test]
fn visemes_drive_mouth_with_hold() {
    let visemes = vec![
        VisemeEvent {
            start_ms: 0.0,
            viseme_id: 0,
        },
        VisemeEvent {
            start_ms: 100.0,
            viseme_id: 2,
        },
        VisemeEvent {
            start_ms: 600.0,
            viseme_id: 21,
        },
    ];
    let out = fixed(synthesize(
        &[],
        &visemes,
        &full_catalog(),
        20.0,
        &RigProfile::default(),
    ));
    let mouth_at = |ms: u64| out.frames[(ms / 50) as usize]["ParamMouthOpenY"];
    assert_eq!(mouth_at(50), 0.0);
    assert_eq!(mouth_at(100), 1.0);
    assert_eq!(mouth_at(250), 1.0);
    assert_eq!(mouth_at(300), 0.0);
    assert_eq!(mouth_at(600), 0.0);
}

#[test]
fn only_catalog_ids_are_emitted() {
    let cat = Catalog::new(vec![ParameterDefinition::new("ParamOther", 0.0, 1.0, 0.0)]);
    let words = vec![WordBoundary::word("Done!", 0.0, 500.0)];
    let out = synthesize(&words, &[], &cat, 30.0, &RigProfile::default());
    assert!(out.param_ids().is_empty());
}

#[test]
fn custom_profile_ids_are_respected() {
    let profile = RigProfile {
        breath: "Breathing".to_string(),
        ..RigProfile::default()
    };
    let cat = Catalog::new(vec![ParameterDefinition::new("Breathing", 0.0, 1.0, 0.5)]);
    let out = synthesize(&[], &[], &cat, 30.0, &profile);
    assert!(out.param_ids().contains("Breathing"));
}

#[test]
fn viseme_openness_table_spot_checks() {
    assert_eq!(viseme_openness(0), 0.0);
    assert_eq!(viseme_openness(21), 0.0);
    assert_eq!(viseme_openness(2), 1.0);
    assert_eq!(viseme_openness(99), 0.5);
}
