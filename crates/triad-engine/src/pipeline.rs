//! `artifacts → Evidence → Claims → Analysis → Evaluation → DisplayContext`.

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info_span;
use triad_analysis::{Evaluator, analyse_bucket, group_claims};
use triad_claims::{ClaimGenerator, ClaimSet};
use triad_config::TriadConfig;
use triad_core::entities::{AnalysisObject, ClaimRejection, Evidence};
use triad_core::enums::ArtifactSource;
use triad_display::{DisplayContext, Projector};
use triad_extract::extract_artifact;
use triad_semantic::SemanticService;

use crate::error::{PipelineError, Stage, StageExt};

/// One input document with its detected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactSource,
    /// Name used in evidence provenance, usually the path as given.
    pub source_file: String,
    pub content: String,
}

impl Artifact {
    #[must_use]
    pub fn new(kind: ArtifactSource, source_file: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            source_file: source_file.into(),
            content: content.into(),
        }
    }
}

/// Per-run switches that are not part of the persistent configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Extract artifacts and analyse buckets on the rayon pool.
    pub parallel: bool,
}

/// Counts for each stage of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProcessingStats {
    pub artifacts: usize,
    pub evidence: usize,
    pub claims: usize,
    pub rejections: usize,
    pub buckets: usize,
    pub behavioral_units: usize,
}

/// Output of the claims-only run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimReport {
    pub evidence: Vec<Evidence>,
    #[serde(flatten)]
    pub claims: ClaimSet,
}

/// Output of a full run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProcessResult {
    pub display: DisplayContext,
    pub stats: ProcessingStats,
    /// Audit trail of evidence that produced no claim.
    pub rejections: Vec<ClaimRejection>,
}

/// The pipeline bound to one configuration and one semantic collaborator.
pub struct Pipeline<'a> {
    config: &'a TriadConfig,
    service: &'a dyn SemanticService,
    options: PipelineOptions,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(config: &'a TriadConfig, service: &'a dyn SemanticService) -> Self {
        Self {
            config,
            service,
            options: PipelineOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Extract evidence from every artifact, in artifact order.
    #[must_use]
    pub fn extract(&self, artifacts: &[Artifact]) -> Vec<Evidence> {
        let _span = info_span!("stage", name = %Stage::Extraction).entered();
        let extract_one = |artifact: &Artifact| {
            extract_artifact(
                artifact.kind,
                &artifact.source_file,
                &artifact.content,
                self.service,
                &self.config.extraction,
            )
        };

        let per_artifact: Vec<Vec<Evidence>> = if self.options.parallel {
            artifacts.par_iter().map(extract_one).collect()
        } else {
            artifacts.iter().map(extract_one).collect()
        };
        let evidence: Vec<Evidence> = per_artifact.into_iter().flatten().collect();
        tracing::info!(
            artifacts = artifacts.len(),
            evidence = evidence.len(),
            "extraction complete"
        );
        evidence
    }

    /// Run extraction and claim generation only.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] tagged [`Stage::ClaimGeneration`] if a claim
    /// cannot be materialized.
    pub fn claims(&self, artifacts: &[Artifact]) -> Result<ClaimReport, PipelineError> {
        let evidence = self.extract(artifacts);
        let claims = self.generate(&evidence)?;
        Ok(ClaimReport { evidence, claims })
    }

    fn generate(&self, evidence: &[Evidence]) -> Result<ClaimSet, PipelineError> {
        let _span = info_span!("stage", name = %Stage::ClaimGeneration).entered();
        let set = ClaimGenerator::new(self.config.claims.clone())
            .generate(evidence)
            .at(Stage::ClaimGeneration)?;
        tracing::info!(
            claims = set.claims.len(),
            rejections = set.rejections.len(),
            "claim generation complete"
        );
        Ok(set)
    }

    fn analyse(&self, set: &ClaimSet) -> Result<Vec<AnalysisObject>, PipelineError> {
        let _span = info_span!("stage", name = %Stage::Analysis).entered();
        let buckets = group_claims(set.claims.clone());
        let analyses: Result<Vec<_>, _> = if self.options.parallel {
            buckets.into_par_iter().map(analyse_bucket).collect()
        } else {
            buckets.into_iter().map(analyse_bucket).collect()
        };
        let analyses = analyses.at(Stage::Analysis)?;
        tracing::info!(buckets = analyses.len(), "analysis complete");
        Ok(analyses)
    }

    /// Run every stage.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure; no partial [`DisplayContext`] is
    /// produced.
    pub fn run(&self, artifacts: &[Artifact]) -> Result<ProcessResult, PipelineError> {
        let evidence = self.extract(artifacts);
        let set = self.generate(&evidence)?;
        let analyses = self.analyse(&set)?;

        let evaluations = {
            let _span = info_span!("stage", name = %Stage::Evaluation).entered();
            let evaluations = Evaluator::new(self.config.scoring.clone())
                .evaluate_all(&analyses)
                .at(Stage::Evaluation)?;
            tracing::info!(evaluations = evaluations.len(), "evaluation complete");
            evaluations
        };

        let display = {
            let _span = info_span!("stage", name = %Stage::Projection).entered();
            let projector = if self.config.semantic.narrate {
                Projector::new().with_narrator(self.service)
            } else {
                Projector::new()
            };
            let display = projector.project(&analyses, &evaluations);
            let units = display.total_behaviors();
            tracing::info!(units, "projection complete");
            display
        };

        let stats = ProcessingStats {
            artifacts: artifacts.len(),
            evidence: evidence.len(),
            claims: set.claims.len(),
            rejections: set.rejections.len(),
            buckets: analyses.len(),
            behavioral_units: display.total_behaviors(),
        };
        Ok(ProcessResult {
            display,
            stats,
            rejections: set.rejections,
        })
    }
}

impl std::fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", self.config)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
