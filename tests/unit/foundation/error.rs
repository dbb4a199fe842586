use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RigError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RigError::catalog("x").to_string().contains("catalog error:"));
    assert!(
        RigError::collaborator("x")
            .to_string()
            .contains("collaborator error:")
    );
    assert!(
        RigError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RigError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_validation_is_a_client_error() {
    assert!(RigError::validation("words").is_client_error());
    assert!(!RigError::collaborator("timeout").is_client_error());
    assert!(!RigError::serde("eof").is_client_error());
}

#[test]
fn serde_json_errors_convert() {
    let err: RigError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, RigError::Serde(_)));
}
