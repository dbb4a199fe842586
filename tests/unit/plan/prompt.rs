use super::*;

fn inputs<'a>(
    glossary: &'a str,
    words: &'a [WordBoundary],
    hints: &'a [IntensityHint],
    strategy: Strategy,
) -> PromptInputs<'a> {
    PromptInputs {
        glossary,
        words,
        visemes: &[],
        fps: 30.0,
        strategy,
        hints,
    }
}

#[test]
fn user_prompt_carries_glossary_timing_and_hints() {
    let words = vec![WordBoundary::word("Stop.", 1000.0, 1400.4)];
    let prompt = build_prompt(&inputs(
        "- ParamAngleY [-10, 10]\n",
        &words,
        &[IntensityHint::Anger],
        Strategy::Keyframes,
    ));
    assert!(prompt.user.contains("- ParamAngleY [-10, 10]"));
    assert!(prompt.user.contains("Stop.@1000-1400"));
    assert!(prompt.user.contains("Target fps: 30"));
    assert!(prompt.user.contains("Preferred mode: keyframes"));
    assert!(prompt.user.contains("Emotional intensity hints: anger"));
    assert!(prompt.system.contains("\"mode\":\"fixed_fps\""));
}

#[test]
fn auto_strategy_and_no_hints_add_nothing() {
    let prompt = build_prompt(&inputs("", &[], &[], Strategy::Auto));
    assert!(!prompt.user.contains("Preferred mode"));
    assert!(!prompt.user.contains("intensity"));
}
