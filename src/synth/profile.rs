/// Parameter ids the fallback synthesizer drives.
///
/// Defaults follow the Cubism standard parameter names.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RigProfile {
    /// Breathing oscillation.
    pub breath: String,
    /// Left eye openness.
    pub eye_left_open: String,
    /// Right eye openness.
    pub eye_right_open: String,
    /// Head parameters usable for the sentence-end nod, in preference order.
    pub head_nod: Vec<String>,
    /// Jaw / mouth openness driven from visemes.
    pub mouth_open: String,
}

impl Default for RigProfile {
    fn default() -> Self {
        Self {
            breath: "ParamBreath".to_string(),
            eye_left_open: "ParamEyeLOpen".to_string(),
            eye_right_open: "ParamEyeROpen".to_string(),
            head_nod: vec!["ParamAngleY".to_string(), "ParamAngleX".to_string()],
            mouth_open: "ParamMouthOpenY".to_string(),
        }
    }
}
