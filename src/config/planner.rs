//! Process-level configuration, built once at startup and passed by reference.
//!
//! Core components never read the environment; only [`PlannerConfig::from_env`]
//! and [`PlannerConfig::from_json_file`] do IO.

use std::path::Path;

use crate::{
    foundation::core::DEFAULT_FPS,
    foundation::error::{RigError, RigResult},
    synth::profile::RigProfile,
};

/// Default cap on catalog entries forwarded to the generator and clamp.
pub const DEFAULT_MAX_PARAMS: usize = 280;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Planner settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Catalog definitions beyond this count are ignored for a request.
    pub max_params: usize,
    /// Frame rate used when a request carries no hint.
    pub default_fps: f64,
    /// Ids driven by the fallback synthesizer.
    pub profile: RigProfile,
    /// Generative collaborator; `None` always uses the fallback.
    pub generator: Option<GeneratorConfig>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_params: DEFAULT_MAX_PARAMS,
            default_fps: DEFAULT_FPS,
            profile: RigProfile::default(),
            generator: None,
        }
    }
}

/// Chat-completions collaborator settings.
#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Chat-completions URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer token.
    pub api_key: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    0.2
}

impl PlannerConfig {
    /// Read settings from environment variables.
    ///
    /// `RIGPLAN_MAX_PARAMS`, `RIGPLAN_DEFAULT_FPS`, `RIGPLAN_ENDPOINT`,
    /// `RIGPLAN_MODEL`, `OPENAI_API_KEY`. The generator is configured only
    /// when an API key is present.
    pub fn from_env() -> RigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RigResult<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("RIGPLAN_MAX_PARAMS") {
            config.max_params = v
                .trim()
                .parse()
                .map_err(|_| RigError::validation(format!("RIGPLAN_MAX_PARAMS: bad value {v:?}")))?;
        }
        if let Some(v) = lookup("RIGPLAN_DEFAULT_FPS") {
            config.default_fps = v
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|fps| fps.is_finite() && *fps > 0.0)
                .ok_or_else(|| {
                    RigError::validation(format!("RIGPLAN_DEFAULT_FPS: bad value {v:?}"))
                })?;
        }

        config.generator = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .map(|api_key| GeneratorConfig {
                endpoint: lookup("RIGPLAN_ENDPOINT").unwrap_or_else(default_endpoint),
                model: lookup("RIGPLAN_MODEL").unwrap_or_else(default_model),
                api_key,
                temperature: default_temperature(),
            });

        Ok(config)
    }

    /// Load settings from a JSON file; omitted fields keep their defaults.
    pub fn from_json_file(path: &Path) -> RigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            RigError::Other(anyhow::Error::new(e).context(format!("read config '{}'", path.display())))
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/planner.rs"]
mod tests;
