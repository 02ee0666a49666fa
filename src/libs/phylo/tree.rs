use super::node::{Node, NodeId};

/// A rooted tree stored in an arena of nodes.
#[derive(Debug, Default, Clone)]
pub struct Tree {
    /// Arena storage for all nodes
    nodes: Vec<Node>,

    /// Optional root ID (a tree might be empty or in construction)
    root: Option<NodeId>,
}

impl Tree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new node to the tree. Returns the new node's ID.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id));
        id
    }

    /// Get number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get root ID
    pub fn get_root(&self) -> Option<NodeId> {
        self.root
    }

    /// Get a reference to a node by ID.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Set a node as the root of the tree.
    pub fn set_root(&mut self, id: NodeId) {
        if self.get_node(id).is_some() {
            self.root = Some(id);
        }
    }

    /// Attach `child_id` under `parent_id`. A previous parent link is
    /// replaced.
    pub fn add_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<(), String> {
        if parent_id >= self.nodes.len() {
            return Err(format!("Parent node {} not found", parent_id));
        }
        if child_id >= self.nodes.len() {
            return Err(format!("Child node {} not found", child_id));
        }
        if parent_id == child_id {
            return Err("Node cannot be its own parent".to_string());
        }

        self.nodes[parent_id].children.push(child_id);
        self.nodes[child_id].parent = Some(parent_id);
        Ok(())
    }

    /// Get node IDs in preorder traversal (Root -> Children)
    pub fn preorder(&self, start_node: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start_node];

        while let Some(id) = stack.pop() {
            if let Some(node) = self.get_node(id) {
                result.push(id);
                // Push children in reverse order so they are processed in order
                for &child in node.children.iter().rev() {
                    stack.push(child);
                }
            }
        }

        result
    }

    /// Leaf IDs under `start_node`, in preorder.
    pub fn leaves(&self, start_node: NodeId) -> Vec<NodeId> {
        self.preorder(start_node)
            .into_iter()
            .filter(|&id| self.nodes[id].is_leaf())
            .collect()
    }

    /// Serialize tree to Newick string using node names as labels.
    pub fn to_newick(&self) -> String {
        self.to_newick_with(|node| node.name.clone())
    }

    /// Serialize tree to Newick string with a caller-supplied labeler.
    ///
    /// The labeler decides what (if anything) to print for each node, which
    /// covers cases like suppressing internal labels or printing only part
    /// of a compound label.
    pub fn to_newick_with<F>(&self, label: F) -> String
    where
        F: Fn(&Node) -> Option<String>,
    {
        if let Some(root) = self.root {
            let mut s = self.to_newick_recursive(root, &label);
            s.push(';');
            s
        } else {
            ";".to_string()
        }
    }

    fn to_newick_recursive<F>(&self, node_id: NodeId, label: &F) -> String
    where
        F: Fn(&Node) -> Option<String>,
    {
        let node = &self.nodes[node_id];
        let node_info = label(node).map(|l| quote_label(&l)).unwrap_or_default();

        if node.children.is_empty() {
            node_info
        } else {
            let children_strs: Vec<String> = node
                .children
                .iter()
                .map(|&child| self.to_newick_recursive(child, label))
                .collect();
            format!("({}){}", children_strs.join(","), node_info)
        }
    }
}

fn quote_label(label: &str) -> String {
    let needs_quote = label.chars().any(|c| "(),:;[] \t\n".contains(c));
    if needs_quote {
        format!("'{}'", label)
    } else {
        label.to_string()
    }
}
