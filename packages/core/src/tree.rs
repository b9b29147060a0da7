use serde::{Deserialize, Serialize};

/// Node variant: files are leaves, folders own an ordered child list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// A single named node in the forest
///
/// `id` is opaque and stable for the node's lifetime. `comment` is an
/// optional annotation; the empty string means "no comment" (and that is
/// how snapshots written by earlier revisions encode it). Child order is
/// semantically meaningful: it determines render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(id: String, name: String, kind: NodeKind) -> Self {
        Self {
            id,
            name,
            kind,
            comment: String::new(),
            children: Vec::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Find a node by id within this subtree (including self)
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Number of nodes in this subtree, counting self
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::subtree_size)
            .sum::<usize>()
    }
}

/// Where a detached node used to live, so it can be put back verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct DetachSite {
    /// Owning folder id, or `None` for the root list
    pub parent_id: Option<String>,
    /// Index within the owning sibling list
    pub index: usize,
}

/// Ordered sequence of root-level nodes
///
/// Serializes transparently as the array of root nodes, which is the
/// snapshot format: `[{ id, name, kind, comment, children: [...] }, ...]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    pub roots: Vec<TreeNode>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find a node by id anywhere in the forest
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut TreeNode> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Total number of nodes in the forest
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(TreeNode::subtree_size).sum()
    }

    /// Is `ancestor_id` a strict ancestor of `node_id`?
    ///
    /// Strict: a node is never its own ancestor. Correct at arbitrary
    /// depth; the drag/drop resolver relies on this to reject moves of a
    /// folder into its own subtree.
    pub fn is_ancestor(&self, ancestor_id: &str, node_id: &str) -> bool {
        if ancestor_id == node_id {
            return false;
        }
        match self.find(ancestor_id) {
            Some(node) => node.children.iter().any(|child| child.find(node_id).is_some()),
            None => false,
        }
    }

    /// The parent folder id of `id`
    ///
    /// `Some(None)` means the node sits in the root list; `None` means the
    /// id does not exist in the forest at all.
    pub fn parent_of(&self, id: &str) -> Option<Option<&str>> {
        if self.roots.iter().any(|root| root.id == id) {
            return Some(None);
        }
        for root in &self.roots {
            if let Some(parent) = parent_in(root, id) {
                return Some(Some(parent));
            }
        }
        None
    }

    /// The sibling list owned by `parent_id`, or the root list for `None`
    ///
    /// Returns `None` when the parent id does not exist. Callers that
    /// insert into the list are responsible for checking the parent's kind.
    pub fn sibling_list(&self, parent_id: Option<&str>) -> Option<&Vec<TreeNode>> {
        match parent_id {
            None => Some(&self.roots),
            Some(id) => self.find(id).map(|node| &node.children),
        }
    }

    pub fn sibling_list_mut(&mut self, parent_id: Option<&str>) -> Option<&mut Vec<TreeNode>> {
        match parent_id {
            None => Some(&mut self.roots),
            Some(id) => self.find_mut(id).map(|node| &mut node.children),
        }
    }

    /// Remove the node with the given id (and its subtree) from wherever
    /// it resides, returning it together with its original site.
    ///
    /// The site lets a caller that fails a later reinsertion step undo the
    /// detach with [`Forest::restore`], so an operation never leaves the
    /// forest partially mutated. The recursion captures the node exactly
    /// once: sibling lists own their members exclusively and ids are
    /// unique by invariant.
    pub fn detach(&mut self, id: &str) -> Option<(TreeNode, DetachSite)> {
        if let Some(index) = self.roots.iter().position(|node| node.id == id) {
            let node = self.roots.remove(index);
            return Some((
                node,
                DetachSite {
                    parent_id: None,
                    index,
                },
            ));
        }
        for root in &mut self.roots {
            if let Some(found) = detach_from(root, id) {
                return Some(found);
            }
        }
        None
    }

    /// Reinsert a previously detached node at its original site
    ///
    /// If the site's parent no longer exists the node is handed back to
    /// the caller unchanged in the `Err` variant; nothing is dropped.
    pub fn restore(&mut self, node: TreeNode, site: &DetachSite) -> Result<(), TreeNode> {
        match self.sibling_list_mut(site.parent_id.as_deref()) {
            Some(list) => {
                let index = site.index.min(list.len());
                list.insert(index, node);
                Ok(())
            }
            None => Err(node),
        }
    }
}

fn parent_in<'a>(node: &'a TreeNode, id: &str) -> Option<&'a str> {
    if node.children.iter().any(|child| child.id == id) {
        return Some(&node.id);
    }
    node.children.iter().find_map(|child| parent_in(child, id))
}

fn detach_from(node: &mut TreeNode, id: &str) -> Option<(TreeNode, DetachSite)> {
    if let Some(index) = node.children.iter().position(|child| child.id == id) {
        let child = node.children.remove(index);
        return Some((
            child,
            DetachSite {
                parent_id: Some(node.id.clone()),
                index,
            },
        ));
    }
    for child in &mut node.children {
        if let Some(found) = detach_from(child, id) {
            return Some(found);
        }
    }
    None
}
