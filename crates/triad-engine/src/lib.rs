//! # triad-engine
//!
//! Drives the stages in order and owns nothing but the wiring:
//!
//! ```text
//! Artifact ─extract─► Evidence ─generate─► Claim ─analyse─► AnalysisObject
//!                                                  ─evaluate─► EvaluationObject
//!                                                  ─project──► DisplayContext
//! ```
//!
//! Every stage is a pure function of its inputs except the two semantic
//! touchpoints (README extraction, narration), which degrade instead of
//! failing. Any other stage failure aborts the run with a [`PipelineError`]
//! naming the stage.

mod error;
mod pipeline;

pub use error::{PipelineError, Stage};
pub use pipeline::{Artifact, ClaimReport, Pipeline, PipelineOptions, ProcessResult, ProcessingStats};

#[cfg(test)]
mod tests {
    use super::*;
    use triad_config::TriadConfig;
    use triad_core::enums::ArtifactSource;
    use triad_semantic::OfflineService;

    #[test]
    fn nothing_in_empty_context_out() {
        let config = TriadConfig::default();
        let result = Pipeline::new(&config, &OfflineService)
            .run(&[])
            .expect("empty run");
        assert_eq!(result.stats, ProcessingStats::default());
        assert_eq!(result.display.total_behaviors(), 0);
    }

    #[test]
    fn invalid_confidence_fails_claim_generation() {
        let mut config = TriadConfig::default();
        config.claims.structured_confidence = 2.0;
        let artifacts = [Artifact::new(
            ArtifactSource::Test,
            "test_health.py",
            "def test_health():\n    r = client.get(\"/health\")\n    assert r.status_code == 200\n",
        )];
        let err = Pipeline::new(&config, &OfflineService)
            .run(&artifacts)
            .unwrap_err();
        assert_eq!(err.stage(), Stage::ClaimGeneration);
        assert!(err.to_string().starts_with("claim_generation stage failed"));
    }
}
