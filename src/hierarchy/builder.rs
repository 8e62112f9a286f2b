use anyhow::Result;

use crate::config::Config;
use crate::judgment::{
    collect_judgments, GroupContext, InputSource, LabelRequest, RejectReason,
};

use super::node::{Hierarchy, NodeId};

/// Grows the criteria tree one sibling group at a time, collecting and
/// validating a judgment matrix for every group it creates.
pub struct HierarchyBuilder {
    max_depth: usize,
    min_group: usize,
    max_group: usize,
    consistency_threshold: f64,
}

impl HierarchyBuilder {
    pub fn from_config(config: &Config) -> Self {
        let (min_group, max_group) = config.group_bounds();
        HierarchyBuilder {
            max_depth: config.max_depth(),
            min_group,
            max_group,
            consistency_threshold: config.consistency_threshold(),
        }
    }

    /// Create `labels` as children of `parent` in label order, collect the
    /// new group's judgments, and set each child's local weight from the
    /// accepted priority vector.
    pub fn attach_group(
        &self,
        hierarchy: &mut Hierarchy,
        parent: NodeId,
        labels: &[String],
        source: &mut dyn InputSource,
    ) -> Result<Vec<NodeId>> {
        let parent_name = hierarchy.node(parent).name().to_string();
        let children: Vec<NodeId> = labels
            .iter()
            .map(|label| hierarchy.add_child(parent, label.clone()))
            .collect();

        let accepted = collect_judgments(
            source,
            GroupContext::Criteria {
                parent: &parent_name,
            },
            labels,
            self.consistency_threshold,
        )?;

        for (child, priority) in children.iter().zip(&accepted.priorities) {
            hierarchy.set_local_weight(*child, *priority);
        }
        Ok(children)
    }

    /// Recursively refine every member of `group` into sub-criteria, down to
    /// the depth limit. Returns the leaf criteria in discovery order.
    ///
    /// `level` is the depth of the group members themselves, counting the
    /// goal root as level 1; members sitting at the depth limit become
    /// leaves without being asked for sub-criteria.
    pub fn build(
        &self,
        hierarchy: &mut Hierarchy,
        group: &[NodeId],
        level: usize,
        source: &mut dyn InputSource,
    ) -> Result<Vec<NodeId>> {
        let mut leaves = Vec::new();
        self.build_level(hierarchy, group, level, source, &mut leaves)?;
        Ok(leaves)
    }

    fn build_level(
        &self,
        hierarchy: &mut Hierarchy,
        group: &[NodeId],
        level: usize,
        source: &mut dyn InputSource,
        leaves: &mut Vec<NodeId>,
    ) -> Result<()> {
        if level >= self.max_depth {
            leaves.extend_from_slice(group);
            return Ok(());
        }

        for &node in group {
            let name = hierarchy.node(node).name().to_string();
            loop {
                let labels =
                    source.request_labels(LabelRequest::SubCriteria { parent: &name })?;
                if labels.is_empty() {
                    leaves.push(node);
                    break;
                }
                if labels.len() < self.min_group || labels.len() > self.max_group {
                    // Node untouched; the same question is asked again.
                    source.report_rejection(RejectReason::InvalidGroupSize);
                    continue;
                }

                let children = self.attach_group(hierarchy, node, &labels, source)?;
                self.build_level(hierarchy, &children, level + 1, source, leaves)?;
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judgment::source::testing::ScriptedSource;

    fn builder() -> HierarchyBuilder {
        HierarchyBuilder::from_config(&Config::default())
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_attach_group_sets_local_weights_in_label_order() {
        let mut hierarchy = Hierarchy::new("Goal");
        let root = hierarchy.root();
        let mut source = ScriptedSource::new();
        source.push_row(&[1.0, 3.0]);
        source.push_row(&[1.0 / 3.0, 1.0]);

        let children = builder()
            .attach_group(&mut hierarchy, root, &labels(&["Price", "Quality"]), &mut source)
            .unwrap();

        assert_eq!(children.len(), 2);
        assert_eq!(hierarchy.node(children[0]).name(), "Price");
        assert!((hierarchy.node(children[0]).local_weight() - 0.75).abs() < 1e-9);
        assert!((hierarchy.node(children[1]).local_weight() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_reply_makes_a_leaf() {
        let mut hierarchy = Hierarchy::new("Goal");
        let root = hierarchy.root();
        let a = hierarchy.add_child(root, "A");
        let b = hierarchy.add_child(root, "B");

        let mut source = ScriptedSource::new();
        source.push_labels(&[]); // A stays a leaf
        source.push_labels(&[]); // B stays a leaf

        let leaves = builder()
            .build(&mut hierarchy, &[a, b], 2, &mut source)
            .unwrap();

        assert_eq!(leaves, vec![a, b]);
        assert!(source.rejections.is_empty());
    }

    #[test]
    fn test_undersized_group_is_asked_again() {
        let mut hierarchy = Hierarchy::new("Goal");
        let root = hierarchy.root();
        let a = hierarchy.add_child(root, "A");

        let mut source = ScriptedSource::new();
        source.push_labels(&["only-one"]); // rejected, node untouched
        source.push_labels(&["A1", "A2"]); // accepted
        source.push_uniform_matrix(2);
        source.push_labels(&[]); // A1 leaf
        source.push_labels(&[]); // A2 leaf

        let leaves = builder()
            .build(&mut hierarchy, &[a], 2, &mut source)
            .unwrap();

        assert_eq!(source.rejections, vec![RejectReason::InvalidGroupSize]);
        assert_eq!(hierarchy.node(a).children().len(), 2);
        assert_eq!(leaves.len(), 2);
    }

    #[test]
    fn test_oversized_group_is_asked_again() {
        let mut hierarchy = Hierarchy::new("Goal");
        let root = hierarchy.root();
        let a = hierarchy.add_child(root, "A");

        let mut source = ScriptedSource::new();
        source.push_labels(&["w", "x", "y", "z"]); // four is over the limit
        source.push_labels(&[]); // then left as a leaf

        let leaves = builder()
            .build(&mut hierarchy, &[a], 2, &mut source)
            .unwrap();

        assert_eq!(source.rejections, vec![RejectReason::InvalidGroupSize]);
        assert!(hierarchy.node(a).is_leaf());
        assert_eq!(leaves, vec![a]);
    }

    #[test]
    fn test_depth_limit_turns_members_into_leaves() {
        let mut hierarchy = Hierarchy::new("Goal");
        let root = hierarchy.root();
        let a = hierarchy.add_child(root, "A");

        let mut source = ScriptedSource::new();
        // Level 2 -> 3
        source.push_labels(&["A1", "A2"]);
        source.push_uniform_matrix(2);
        // Level 3 -> 4
        source.push_labels(&["A1a", "A1b"]);
        source.push_uniform_matrix(2);
        source.push_labels(&[]); // A2 leaf
        // Nothing queued for level 4: those nodes must not be asked.

        let leaves = builder()
            .build(&mut hierarchy, &[a], 2, &mut source)
            .unwrap();

        let names: Vec<_> = leaves
            .iter()
            .map(|id| hierarchy.node(*id).name().to_string())
            .collect();
        assert_eq!(names, vec!["A1a", "A1b", "A2"]);
    }

    #[test]
    fn test_leaves_collected_in_discovery_order() {
        let mut hierarchy = Hierarchy::new("Goal");
        let root = hierarchy.root();
        let a = hierarchy.add_child(root, "A");
        let b = hierarchy.add_child(root, "B");

        let mut source = ScriptedSource::new();
        source.push_labels(&["A1", "A2"]);
        source.push_uniform_matrix(2);
        source.push_labels(&[]); // A1
        source.push_labels(&[]); // A2
        source.push_labels(&[]); // B

        let leaves = builder()
            .build(&mut hierarchy, &[a, b], 2, &mut source)
            .unwrap();

        let names: Vec<_> = leaves
            .iter()
            .map(|id| hierarchy.node(*id).name().to_string())
            .collect();
        assert_eq!(names, vec!["A1", "A2", "B"]);
    }
}
