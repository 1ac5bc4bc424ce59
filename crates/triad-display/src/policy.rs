//! Recommendations keyed on finding kinds.

use triad_core::entities::Finding;
use triad_core::enums::FindingKind;

const fn suggestions(kind: FindingKind) -> &'static [&'static str] {
    match kind {
        FindingKind::Contradiction => &[
            "Resolve assertion conflicts between artifacts",
            "Ensure consistent API behavior specification",
        ],
        FindingKind::MissingTests => &[
            "Add automated tests to verify this behavior",
            "Ensure test coverage for this endpoint",
        ],
        FindingKind::MissingSpec => &[
            "Add specification in OpenAPI/Swagger documentation",
            "Define expected responses in API contract",
        ],
        FindingKind::MissingReadme => &[
            "Document this behavior in user-facing documentation",
            "Add usage examples to README",
        ],
        FindingKind::ImplementationOnly => &[
            "Document this behavior in API specification",
            "Add user documentation explaining this behavior",
        ],
        FindingKind::DocumentationOnly => &[
            "Add tests to verify documented behavior",
            "Ensure implementation matches documentation",
        ],
        FindingKind::Unverified
        | FindingKind::MultipleSuccessVariants
        | FindingKind::ConfidenceSpread => &[],
    }
}

/// De-duplicated, sorted suggestions for a unit's findings.
#[must_use]
pub fn recommendations(findings: &[Finding]) -> Vec<String> {
    let mut out: Vec<String> = findings
        .iter()
        .flat_map(|f| suggestions(f.kind))
        .map(|s| (*s).to_string())
        .collect();
    out.sort();
    out.dedup();
    out
}
