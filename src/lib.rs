//! rigplan turns speech timing into parameter timelines for a 2D character rig.
//!
//! A text-to-speech pass yields word boundaries and viseme onsets; a free-text
//! catalog declares the rig's parameters. rigplan produces a [`Timeline`] that
//! is guaranteed to respect the catalog, whatever the generative collaborator
//! returns.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: catalog text -> [`ParameterDefinition`]s ([`parse_catalog`])
//! 2. **Propose**: glossary + timing -> untrusted reply ([`PlanGenerator`])
//! 3. **Read**: reply -> [`Candidate`] (recognized shape or rejection)
//! 4. **Clamp**: candidate -> bounded [`Timeline`] ([`clamp_candidate`])
//! 5. **Fallback**: on any failure, [`synthesize`] from timing alone
//!
//! [`PlanOrchestrator`] runs the whole pipeline and never fails except on
//! malformed request input.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod config;
mod foundation;
mod plan;
mod speech;
mod synth;
mod timeline;

pub use catalog::definition::{Catalog, ParameterDefinition};
pub use catalog::glossary::render_glossary;
pub use catalog::parse::{ParseReport, parse_catalog, parse_catalog_file, parse_line};
pub use config::planner::{DEFAULT_MAX_PARAMS, GeneratorConfig, PlannerConfig};
pub use foundation::core::{
    DEFAULT_FPS, MIN_DT_MS, clamp_dt_ms, clamp_time_ms, frame_step_ms,
};
pub use foundation::error::{RigError, RigResult};
pub use plan::generator::{DisabledGenerator, PlanGenerator, StaticGenerator};
pub use plan::hints::{IntensityHint, detect_hints};
pub use plan::openai::OpenAiPlanGenerator;
pub use plan::orchestrator::{FallbackReason, PlanOrchestrator, PlanOutcome, Provenance};
pub use plan::prompt::{PlanPrompt, PromptInputs, build_prompt};
pub use plan::request::{PlanRequest, Strategy};
pub use speech::timing::{VisemeEvent, WordBoundary, WordKind, speech_duration_ms, spoken_text};
pub use synth::heuristic::{synthesize, viseme_openness};
pub use synth::profile::RigProfile;
pub use timeline::candidate::{
    Candidate, RawKeyframe, RawParams, RawTimeline, Rejection, parse_candidate,
};
pub use timeline::clamp::{clamp_candidate, clamp_timeline};
pub use timeline::model::{FixedRateFrames, Keyframe, ParamSet, Timeline};
