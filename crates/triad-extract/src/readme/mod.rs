//! README evidence extraction.
//!
//! Sections that look like API documentation are handed to the semantic
//! collaborator. Its answers pass the provenance guard (the snippet must
//! occur verbatim in the section) before becoming evidence. When the call
//! fails, the section goes through the deterministic fallback instead.

mod fallback;
mod sections;

pub use fallback::extract_fallback;
pub use sections::{ApiSection, HeaderKind, api_signal, find_api_sections};

use triad_config::ExtractionConfig;
use triad_core::entities::Evidence;
use triad_core::enums::EvidenceType;
use triad_semantic::{SectionObservation, SemanticService};

/// Extract README evidence from a whole document.
#[must_use]
pub fn extract_readme(
    source_file: &str,
    content: &str,
    service: &dyn SemanticService,
    config: &ExtractionConfig,
) -> Vec<Evidence> {
    let sections = find_api_sections(content, config.signal_threshold);
    tracing::debug!(
        file = source_file,
        sections = sections.len(),
        "found API-like README sections"
    );

    let mut evidence = Vec::new();
    for section in &sections {
        match service.extract_section(&section.text) {
            Ok(observations) => {
                evidence.extend(guard_provenance(section, source_file, observations));
            }
            Err(e) => {
                tracing::warn!(
                    file = source_file,
                    lines = %section.location(),
                    %e,
                    "semantic extraction failed, using fallback extractor"
                );
                evidence.extend(extract_fallback(
                    section,
                    source_file,
                    config.endpoint_search_radius,
                ));
            }
        }
    }
    evidence
}

/// Keep only observations whose `raw_snippet` occurs verbatim in the section.
fn guard_provenance(
    section: &ApiSection,
    source_file: &str,
    observations: Vec<SectionObservation>,
) -> Vec<Evidence> {
    let location = section.location();
    observations
        .into_iter()
        .filter(|obs| {
            let verbatim = !obs.raw_snippet.is_empty() && section.text.contains(&obs.raw_snippet);
            if !verbatim {
                tracing::debug!(
                    file = source_file,
                    snippet = %obs.raw_snippet,
                    "dropping observation without verbatim snippet"
                );
            }
            verbatim
        })
        .map(|obs| Evidence {
            kind: EvidenceType::ReadmeStatement,
            endpoint: obs.endpoint,
            observation: obs.observation,
            source_file: source_file.to_string(),
            source_location: location.clone(),
            raw_snippet: Some(obs.raw_snippet),
        })
        .collect()
}
