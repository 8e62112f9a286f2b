use std::collections::VecDeque;

use super::node::Hierarchy;

/// Turn local sibling priorities into tree-wide weights.
///
/// Breadth-first from the root, so a parent's global weight is always set
/// before any of its children read it. The root is pinned at 1; every other
/// node gets `local_weight * parent.global_weight`.
pub fn propagate_weights(hierarchy: &mut Hierarchy) {
    let root = hierarchy.root();
    hierarchy.set_global_weight(root, 1.0);

    let mut queue = VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        let parent_weight = hierarchy.node(id).global_weight();
        let children: Vec<_> = hierarchy.node(id).children().to_vec();
        for child in children {
            let weight = hierarchy.node(child).local_weight() * parent_weight;
            hierarchy.set_global_weight(child, weight);
            queue.push_back(child);
        }
    }
}
