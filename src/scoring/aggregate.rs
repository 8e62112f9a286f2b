use std::cmp::Ordering;

use anyhow::Result;
use serde::Serialize;

use crate::hierarchy::{Hierarchy, NodeId};
use crate::judgment::{collect_judgments, GroupContext, InputSource};

/// One alternative's accumulated score across every leaf criterion.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeScore {
    pub name: String,
    pub score: f64,
}

/// Score every alternative against the full leaf-criteria set.
///
/// For each leaf, in discovery order, a fresh judgment matrix over the
/// alternatives is collected and validated; the resulting priorities are
/// scaled by the leaf's global weight and added to the running totals.
/// The totals are not normalized afterwards; when each sibling group's
/// weights sum to 1 they already sum to 1 by construction.
pub fn score_alternatives(
    hierarchy: &Hierarchy,
    leaves: &[NodeId],
    alternatives: &[String],
    source: &mut dyn InputSource,
    threshold: f64,
) -> Result<Vec<AlternativeScore>> {
    let mut totals = vec![0.0; alternatives.len()];

    for &leaf in leaves {
        let leaf_node = hierarchy.node(leaf);
        let accepted = collect_judgments(
            source,
            GroupContext::Alternatives {
                leaf: leaf_node.name(),
            },
            alternatives,
            threshold,
        )?;

        for (total, priority) in totals.iter_mut().zip(&accepted.priorities) {
            *total += priority * leaf_node.global_weight();
        }
    }

    Ok(alternatives
        .iter()
        .zip(totals)
        .map(|(name, score)| AlternativeScore {
            name: name.clone(),
            score,
        })
        .collect())
}

/// Order scores best-first. The sort is stable, so alternatives with equal
/// scores keep the order they were entered in.
pub fn rank(mut scores: Vec<AlternativeScore>) -> Vec<AlternativeScore> {
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scores
}
