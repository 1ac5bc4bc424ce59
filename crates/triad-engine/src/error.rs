use std::fmt;

use triad_core::CoreError;

/// Pipeline stage names, used to tag failures and tracing spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extraction,
    ClaimGeneration,
    Analysis,
    Evaluation,
    Projection,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extraction => "extraction",
            Self::ClaimGeneration => "claim_generation",
            Self::Analysis => "analysis",
            Self::Evaluation => "evaluation",
            Self::Projection => "projection",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage failure. The run is aborted and no partial output is returned.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: CoreError,
    },
}

impl PipelineError {
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Stage { stage, .. } => *stage,
        }
    }
}

/// Tag a [`CoreError`] with the stage that raised it.
pub(crate) trait StageExt<T> {
    fn at(self, stage: Stage) -> Result<T, PipelineError>;
}

impl<T> StageExt<T> for Result<T, CoreError> {
    fn at(self, stage: Stage) -> Result<T, PipelineError> {
        self.map_err(|source| PipelineError::Stage { stage, source })
    }
}
