//! Bucketing by comparison key.

use std::collections::HashMap;

use triad_core::entities::{Claim, ComparisonKey};

/// Group claims by [`Claim::comparison_key`].
///
/// Buckets come back in the order their first claim was seen, and claims keep
/// their input order inside a bucket. Every returned bucket is non-empty.
#[must_use]
pub fn group_claims(claims: Vec<Claim>) -> Vec<Vec<Claim>> {
    let mut index: HashMap<ComparisonKey, usize> = HashMap::new();
    let mut buckets: Vec<Vec<Claim>> = Vec::new();

    for claim in claims {
        let key = claim.comparison_key();
        if let Some(&slot) = index.get(&key) {
            buckets[slot].push(claim);
        } else {
            index.insert(key, buckets.len());
            buckets.push(vec![claim]);
        }
    }
    buckets
}
