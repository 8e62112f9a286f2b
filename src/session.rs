use std::fmt;

use anyhow::Result;

use crate::config::Config;
use crate::hierarchy::{propagate_weights, Hierarchy, HierarchyBuilder, NodeId};
use crate::judgment::{InputSource, LabelRequest};
use crate::scoring::{rank, score_alternatives, AlternativeScore};

/// Everything a finished decision session produces: the weighted criteria
/// tree and the ranked alternatives. Plain data for the caller to print.
#[derive(Debug)]
pub struct SessionResult {
    pub hierarchy: Hierarchy,
    pub leaves: Vec<NodeId>,
    pub ranking: Vec<AlternativeScore>,
}

/// The top-level count checks are the only unrecoverable user mistakes;
/// everything below them retries in place.
#[derive(Debug)]
pub enum SessionError {
    BadAlternativeCount { got: usize, min: usize, max: usize },
    BadCriteriaCount { got: usize, min: usize, max: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::BadAlternativeCount { got, min, max } => write!(
                f,
                "You have to enter at least {} alternatives or up to {}, got {}",
                min, max, got
            ),
            SessionError::BadCriteriaCount { got, min, max } => write!(
                f,
                "You have to enter at least {} criteria or up to {}, got {}",
                min, max, got
            ),
        }
    }
}

impl std::error::Error for SessionError {}

/// Drive one full decision session against `source`.
///
/// Collects alternatives and top-level criteria (aborting on a bad count),
/// grows and judges the criteria tree, propagates weights, then scores the
/// alternatives against every leaf criterion.
pub fn run(config: &Config, source: &mut dyn InputSource) -> Result<SessionResult> {
    let (min_group, max_group) = config.group_bounds();

    let alternatives = source.request_labels(LabelRequest::Alternatives)?;
    if alternatives.len() < min_group || alternatives.len() > max_group {
        return Err(SessionError::BadAlternativeCount {
            got: alternatives.len(),
            min: min_group,
            max: max_group,
        }
        .into());
    }

    let criteria = source.request_labels(LabelRequest::TopCriteria)?;
    if criteria.len() < min_group || criteria.len() > max_group {
        return Err(SessionError::BadCriteriaCount {
            got: criteria.len(),
            min: min_group,
            max: max_group,
        }
        .into());
    }

    let mut hierarchy = Hierarchy::new("Goal");
    let builder = HierarchyBuilder::from_config(config);

    let root = hierarchy.root();
    let top_level = builder.attach_group(&mut hierarchy, root, &criteria, source)?;
    // Top-level criteria sit at level 2, right under the goal.
    let leaves = builder.build(&mut hierarchy, &top_level, 2, source)?;

    propagate_weights(&mut hierarchy);

    let scores = score_alternatives(
        &hierarchy,
        &leaves,
        &alternatives,
        source,
        config.consistency_threshold(),
    )?;

    Ok(SessionResult {
        hierarchy,
        leaves,
        ranking: rank(scores),
    })
}
