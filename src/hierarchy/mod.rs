pub mod builder;
pub mod node;
pub mod propagate;

pub use builder::HierarchyBuilder;
pub use node::{Hierarchy, Node, NodeId};
pub use propagate::propagate_weights;
