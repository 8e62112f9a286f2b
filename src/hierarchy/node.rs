/// Handle into a [`Hierarchy`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One vertex of the criteria tree: a criterion, sub-criterion, or the
/// synthetic goal root.
#[derive(Debug)]
pub struct Node {
    name: String,
    local_weight: f64,
    global_weight: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Priority within this node's own sibling group.
    pub fn local_weight(&self) -> f64 {
        self.local_weight
    }

    /// Local weight scaled by every ancestor's weight; comparable across
    /// the whole tree. Meaningful only after propagation has run.
    pub fn global_weight(&self) -> f64 {
        self.global_weight
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order. The order matters: row/column `i` of the
    /// group's judgment matrix refers to the i-th child.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed criteria tree. Parent links are plain handles, so there is
/// a single ownership path and no cycles to manage.
#[derive(Debug)]
pub struct Hierarchy {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Hierarchy {
    /// Create a tree holding only the goal root, weight 1.
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = Node {
            name: root_name.into(),
            local_weight: 1.0,
            global_weight: 1.0,
            parent: None,
            children: Vec::new(),
        };
        Hierarchy {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child under `parent` and wire up the back-reference.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            local_weight: 1.0,
            global_weight: 1.0,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Record a node's priority within its sibling group. Does not touch
    /// the children; global weights come from a separate propagation pass.
    pub fn set_local_weight(&mut self, id: NodeId, value: f64) {
        self.nodes[id.0].local_weight = value;
    }

    pub(crate) fn set_global_weight(&mut self, id: NodeId, value: f64) {
        self.nodes[id.0].global_weight = value;
    }
}
