use crc32fast::Hasher;

use crate::tree::Forest;
use crate::visitor::{walk_forest, Visitor};
use crate::TreeNode;

/// Generate a document id from a label (snapshot path, board name, ...)
/// using CRC32
pub fn get_document_id(label: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for nodes within a document
///
/// Ids have the shape `<seed>-<n>` where the seed identifies the document
/// and `n` increases monotonically. Ids are never reused within a
/// document's lifetime: when a snapshot is loaded, [`IdGenerator::resume`]
/// advances the counter past every id already present in the forest.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(label: &str) -> Self {
        Self {
            seed: get_document_id(label),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Advance the counter past every id already present in `forest`
    ///
    /// Only ids carrying this generator's seed participate; foreign ids
    /// (hand-written snapshots, other documents) can never collide with
    /// freshly generated ones because the seed prefix differs.
    pub fn resume(&mut self, forest: &Forest) {
        let mut scan = MaxSuffix {
            prefix: format!("{}-", self.seed),
            max: self.count,
        };
        walk_forest(&mut scan, forest);
        self.count = scan.max;
    }
}

struct MaxSuffix {
    prefix: String,
    max: u32,
}

impl Visitor for MaxSuffix {
    fn visit_node(&mut self, node: &TreeNode) {
        if let Some(suffix) = node.id.strip_prefix(&self.prefix) {
            if let Ok(n) = suffix.parse::<u32>() {
                self.max = self.max.max(n);
            }
        }
        crate::visitor::walk_node(self, node);
    }
}
