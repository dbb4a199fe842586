//! Entry point: catalog → candidate plan → validation → fallback.
//!
//! Every exit passes through the same clamp, so generated and synthesized
//! timelines share one output contract.

use std::fmt;
use std::sync::Arc;

use crate::{
    catalog::definition::Catalog,
    catalog::glossary::render_glossary,
    catalog::parse::parse_catalog,
    config::planner::PlannerConfig,
    foundation::error::RigResult,
    plan::generator::{DisabledGenerator, PlanGenerator},
    plan::hints::detect_hints,
    plan::openai::OpenAiPlanGenerator,
    plan::prompt::{PromptInputs, build_prompt},
    plan::request::{PlanRequest, Strategy},
    synth::heuristic::synthesize,
    synth::profile::RigProfile,
    timeline::candidate::{Candidate, Rejection, parse_candidate},
    timeline::clamp::{clamp_candidate, clamp_timeline},
    timeline::model::Timeline,
};

/// Where the returned timeline came from.
#[derive(Clone, Debug, PartialEq)]
pub enum Provenance {
    /// Proposed by the named generator and clamped.
    Generated {
        /// Generator name.
        generator: String,
    },
    /// Synthesized by the heuristic fallback.
    Fallback(FallbackReason),
}

/// Why the generative path was not used.
#[derive(Clone, Debug, PartialEq)]
pub enum FallbackReason {
    /// The catalog declared no parameters.
    EmptyCatalog,
    /// The request asked for heuristic synthesis.
    Requested,
    /// The generator call failed.
    GeneratorFailed(String),
    /// The reply did not have a recognized timeline shape.
    Rejected(Rejection),
    /// The reply held no keyframes or frames after clamping.
    EmptyAfterClamp,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => f.write_str("catalog declares no parameters"),
            Self::Requested => f.write_str("heuristic strategy requested"),
            Self::GeneratorFailed(e) => write!(f, "generator failed: {e}"),
            Self::Rejected(r) => write!(f, "reply rejected: {r}"),
            Self::EmptyAfterClamp => f.write_str("plan empty after clamping"),
        }
    }
}

/// Validated timeline plus its provenance.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanOutcome {
    /// Clamped, non-empty timeline.
    pub timeline: Timeline,
    /// Which path produced it.
    pub provenance: Provenance,
}

/// Coordinates catalog parsing, plan generation, clamping and fallback.
pub struct PlanOrchestrator {
    max_params: usize,
    default_fps: f64,
    profile: RigProfile,
    generator: Arc<dyn PlanGenerator>,
}

impl PlanOrchestrator {
    /// Orchestrator using `generator` as collaborator.
    pub fn new(config: &PlannerConfig, generator: Arc<dyn PlanGenerator>) -> Self {
        Self {
            max_params: config.max_params,
            default_fps: config.default_fps,
            profile: config.profile.clone(),
            generator,
        }
    }

    /// Orchestrator with the collaborator described by `config.generator`,
    /// or a disabled one when none is configured.
    pub fn from_config(config: &PlannerConfig) -> Self {
        let generator: Arc<dyn PlanGenerator> = match &config.generator {
            Some(g) => Arc::new(OpenAiPlanGenerator::new(g.clone())),
            None => Arc::new(DisabledGenerator),
        };
        Self::new(config, generator)
    }

    /// Validate a JSON request body and plan it.
    ///
    /// The only error is [`crate::RigError::Validation`] for malformed input.
    pub async fn plan_json(&self, body: &serde_json::Value) -> RigResult<PlanOutcome> {
        let request = PlanRequest::from_json(body)?;
        Ok(self.plan_with_outcome(&request).await)
    }

    /// Plan a request; always returns a clamped, non-empty timeline.
    pub async fn plan(&self, request: &PlanRequest) -> Timeline {
        self.plan_with_outcome(request).await.timeline
    }

    /// Same as [`Self::plan`], reporting which path produced the timeline.
    #[tracing::instrument(
        skip(self, request),
        fields(
            words = request.words.len(),
            visemes = request.visemes.len(),
            strategy = ?request.strategy,
        )
    )]
    pub async fn plan_with_outcome(&self, request: &PlanRequest) -> PlanOutcome {
        let fps = request.fps.unwrap_or(self.default_fps);

        let report = parse_catalog(&request.catalog);
        if report.definitions.is_empty() {
            return self.fallback(request, &Catalog::default(), fps, FallbackReason::EmptyCatalog);
        }
        if report.definitions.len() > self.max_params {
            tracing::debug!(
                declared = report.definitions.len(),
                kept = self.max_params,
                "truncating catalog"
            );
        }
        let catalog = Catalog::new(report.definitions).truncated(self.max_params);

        if request.strategy == Strategy::Heuristic {
            return self.fallback(request, &catalog, fps, FallbackReason::Requested);
        }

        let glossary = render_glossary(catalog.definitions());
        let hints = detect_hints(&request.words);
        let prompt = build_prompt(&PromptInputs {
            glossary: &glossary,
            words: &request.words,
            visemes: &request.visemes,
            fps,
            strategy: request.strategy,
            hints: &hints,
        });

        let reply = match self.generator.propose(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                return self.fallback(
                    request,
                    &catalog,
                    fps,
                    FallbackReason::GeneratorFailed(format!("{e:#}")),
                );
            }
        };

        let raw = match parse_candidate(&reply, fps) {
            Candidate::Plan(raw) => raw,
            Candidate::Rejected(r) => {
                return self.fallback(request, &catalog, fps, FallbackReason::Rejected(r));
            }
        };

        let timeline = clamp_candidate(&raw, &catalog);
        if timeline.is_empty() {
            return self.fallback(request, &catalog, fps, FallbackReason::EmptyAfterClamp);
        }

        tracing::info!(
            generator = self.generator.name(),
            mode = timeline.mode(),
            len = timeline.len(),
            "using generated plan"
        );
        PlanOutcome {
            timeline,
            provenance: Provenance::Generated {
                generator: self.generator.name().to_string(),
            },
        }
    }

    fn fallback(
        &self,
        request: &PlanRequest,
        catalog: &Catalog,
        fps: f64,
        reason: FallbackReason,
    ) -> PlanOutcome {
        match &reason {
            FallbackReason::EmptyCatalog | FallbackReason::Requested => {
                tracing::info!(%reason, "using heuristic timeline");
            }
            _ => tracing::warn!(%reason, "discarding generated plan, using heuristic timeline"),
        }
        let synthesized = synthesize(
            &request.words,
            &request.visemes,
            catalog,
            fps,
            &self.profile,
        );
        PlanOutcome {
            timeline: clamp_timeline(&synthesized, catalog),
            provenance: Provenance::Fallback(reason),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/orchestrator.rs"]
mod tests;
