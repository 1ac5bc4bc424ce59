//! Phase 1 branching policy: which categories an evidence type spawns.

use triad_core::enums::{ClaimCategory, EvidenceType};

use ClaimCategory::{ErrorSemantics, InputPrecondition, OutputGuarantee};

/// Categories spawned for each evidence type, in spawn order.
#[must_use]
pub const fn categories_for(kind: EvidenceType) -> &'static [ClaimCategory] {
    match kind {
        EvidenceType::SpecResponse | EvidenceType::TestAssertion => {
            &[OutputGuarantee, ErrorSemantics]
        }
        EvidenceType::ReadmeStatement => &[OutputGuarantee, ErrorSemantics, InputPrecondition],
        EvidenceType::SpecSchemaRef => &[OutputGuarantee],
        EvidenceType::SpecParameter | EvidenceType::SpecRequestBody | EvidenceType::SpecSecurity => {
            &[InputPrecondition]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bearing_evidence_branches_into_output_and_error() {
        for kind in [EvidenceType::SpecResponse, EvidenceType::TestAssertion] {
            assert_eq!(categories_for(kind), &[OutputGuarantee, ErrorSemantics]);
        }
    }

    #[test]
    fn readme_statements_branch_three_ways() {
        assert_eq!(categories_for(EvidenceType::ReadmeStatement).len(), 3);
    }

    #[test]
    fn no_policy_spawns_existence_or_idempotency() {
        let all = [
            EvidenceType::TestAssertion,
            EvidenceType::SpecResponse,
            EvidenceType::SpecParameter,
            EvidenceType::SpecSchemaRef,
            EvidenceType::SpecRequestBody,
            EvidenceType::SpecSecurity,
            EvidenceType::ReadmeStatement,
        ];
        for kind in all {
            assert!(!categories_for(kind).contains(&ClaimCategory::EndpointExists));
            assert!(!categories_for(kind).contains(&ClaimCategory::Idempotency));
        }
    }
}
