use super::*;
use serde_json::json;

#[test]
fn reads_full_body() {
    let body = json!({
        "words": [{ "startMs": 0, "endMs": 300, "text": "Hi." }],
        "visemes": [{ "startMs": 20, "visemeId": 2 }],
        "parameterCatalog": "- ParamBreath — [0, 1]",
        "fps": 30,
        "strategy": "keyframes"
    });
    let req = PlanRequest::from_json(&body).unwrap();
    assert_eq!(req.words.len(), 1);
    assert_eq!(req.visemes[0].viseme_id, 2);
    assert_eq!(req.fps, Some(30.0));
    assert_eq!(req.strategy, Strategy::Keyframes);
    assert!(req.catalog.starts_with("- ParamBreath"));
}

#[test]
fn optional_fields_default() {
    let req = PlanRequest::from_json(&json!({ "words": [], "visemes": [] })).unwrap();
    assert_eq!(req.fps, None);
    assert_eq!(req.strategy, Strategy::Auto);
    assert!(req.catalog.is_empty());
}

#[test]
fn missing_or_non_array_inputs_are_client_errors() {
    for body in [
        json!({ "visemes": [] }),
        json!({ "words": [] }),
        json!({ "words": "hello", "visemes": [] }),
        json!({ "words": [], "visemes": {} }),
        json!([]),
    ] {
        let err = PlanRequest::from_json(&body).unwrap_err();
        assert!(err.is_client_error(), "{body}");
    }
}

#[test]
fn malformed_entries_name_their_index() {
    let body = json!({ "words": [{ "startMs": 0, "endMs": 1 }, { "text": "x" }], "visemes": [] });
    let err = PlanRequest::from_json(&body).unwrap_err();
    assert!(err.to_string().contains("words[1]"));
}

#[test]
fn unexpected_kinds_and_fractional_viseme_ids_are_accepted() {
    for kind in ["Word", "Punctuation", "SentenceBoundary"] {
        let body = json!({
            "words": [{ "startMs": 0, "endMs": 300, "text": "Hi.", "kind": kind }],
            "visemes": [{ "startMs": 10, "visemeId": 2.0 }],
            "parameterCatalog": ""
        });
        let req = PlanRequest::from_json(&body).unwrap();
        assert_eq!(req.words.len(), 1, "{kind}");
        assert_eq!(req.visemes[0].viseme_id, 2);
    }
}

#[test]
fn non_numeric_fps_is_rejected() {
    let body = json!({ "words": [], "visemes": [], "fps": "fast" });
    assert!(PlanRequest::from_json(&body).unwrap_err().is_client_error());
}

#[test]
fn strategy_hints_are_lenient() {
    assert_eq!(Strategy::from_hint("Fixed-FPS"), Strategy::FixedFps);
    assert_eq!(Strategy::from_hint(" fallback "), Strategy::Heuristic);
    assert_eq!(Strategy::from_hint("expressive"), Strategy::Auto);
}
