//! # triad-extract
//!
//! Evidence extraction for the three artifact kinds:
//! - **README**: API section detection, semantic extraction behind a
//!   provenance guard, deterministic fallback
//! - **API contract**: OpenAPI v2/v3 traversal with de-duplication
//! - **Test source**: request/assertion state machine with proximity and
//!   leakage guards
//!
//! Every extractor is a pure function of the artifact text (plus, for
//! README sections only, the injected [`SemanticService`]).

pub mod artifact;
pub mod paths;
pub mod readme;
pub mod spec;
pub mod test_source;

mod error;

pub use artifact::detect_kind;
pub use error::ExtractError;
pub use paths::normalize_path;
pub use readme::extract_readme;
pub use spec::extract_spec;
pub use test_source::extract_tests;

use triad_config::ExtractionConfig;
use triad_core::entities::Evidence;
use triad_core::enums::ArtifactSource;
use triad_semantic::SemanticService;

/// Route one artifact to its extractor.
///
/// Blank artifacts yield no evidence. [`ArtifactSource::Code`] has no
/// extractor and is skipped with a debug event.
#[must_use]
pub fn extract_artifact(
    kind: ArtifactSource,
    source_file: &str,
    content: &str,
    service: &dyn SemanticService,
    config: &ExtractionConfig,
) -> Vec<Evidence> {
    if content.trim().is_empty() {
        tracing::debug!(file = source_file, "skipping empty artifact");
        return Vec::new();
    }
    match kind {
        ArtifactSource::Readme => extract_readme(source_file, content, service, config),
        ArtifactSource::ApiSpec => extract_spec(source_file, content),
        ArtifactSource::Test => extract_tests(source_file, content, config),
        ArtifactSource::Code => {
            let e = ExtractError::UnsupportedArtifact(format!("{source_file} ({kind})"));
            tracing::debug!(%e, "no extractor for artifact");
            Vec::new()
        }
    }
}
