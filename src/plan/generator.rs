//! Seam to the generative collaborator that proposes candidate plans.

use async_trait::async_trait;

use crate::{foundation::error::RigError, plan::prompt::PlanPrompt};

/// Source of candidate timelines.
///
/// Replies are untrusted text; the orchestrator validates everything.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Propose a plan for `prompt`. Exactly one attempt per call.
    async fn propose(&self, prompt: &PlanPrompt) -> anyhow::Result<String>;

    /// Name used in logs and provenance.
    fn name(&self) -> &str;
}

/// Generator that always fails, forcing the fallback path.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl PlanGenerator for DisabledGenerator {
    async fn propose(&self, _prompt: &PlanPrompt) -> anyhow::Result<String> {
        Err(RigError::collaborator("plan generation is disabled").into())
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

/// Generator replaying a fixed reply (offline runs, recorded replies, tests).
#[derive(Clone, Debug)]
pub struct StaticGenerator {
    reply: String,
}

impl StaticGenerator {
    /// Replay `reply` for every prompt.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl PlanGenerator for StaticGenerator {
    async fn propose(&self, _prompt: &PlanPrompt) -> anyhow::Result<String> {
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
