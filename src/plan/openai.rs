use anyhow::{Context as _, anyhow};
use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    config::planner::GeneratorConfig,
    plan::generator::PlanGenerator,
    plan::prompt::PlanPrompt,
};

/// Chat-completions client asking for a JSON-object reply.
#[derive(Clone)]
pub struct OpenAiPlanGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl OpenAiPlanGenerator {
    /// Client for `config`. The request timeout, if any, is the caller's concern.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request_body(&self, prompt: &PlanPrompt) -> serde_json::Value {
        serde_json::json!({
            "model": &self.config.model,
            "messages": [
                {"role": "system", "content": &prompt.system},
                {"role": "user", "content": &prompt.user}
            ],
            "temperature": self.config.temperature,
            "response_format": {"type": "json_object"}
        })
    }
}

impl std::fmt::Debug for OpenAiPlanGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiPlanGenerator")
            .field("endpoint", &self.config.endpoint)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PlanGenerator for OpenAiPlanGenerator {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.config.model))]
    async fn propose(&self, prompt: &PlanPrompt) -> anyhow::Result<String> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .context("send chat completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("chat completion error {status}: {body}"));
        }

        #[derive(Deserialize)]
        struct Message {
            content: Option<String>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Message,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            choices: Vec<Choice>,
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .context("decode chat completion response")?;
        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow!("chat completion returned no content"))
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/openai.rs"]
mod tests;
