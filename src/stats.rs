//! Statistics and introspection for the splay tree.
//!
//! A splay tree's shape drifts with its access pattern, so structural
//! counters are the main window into how a workload is treating it: a
//! `max_height` near `num_nodes` means the tree has degenerated into a
//! spine (which subsequent splays will fold back up).

use crate::keys::KeyTrait;
use crate::node::Node;
use crate::tree::SplayTree;

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

/// Structural counters gathered by a full walk of the tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub num_nodes: usize,
    pub num_leaves: usize,
    pub max_height: usize,
}

impl<K: KeyTrait> TreeStatsTrait for SplayTree<K> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        if let Some(root) = self.root_node() {
            get_tree_stats_recurse(root, &mut stats, 1);
        }
        stats
    }
}

fn get_tree_stats_recurse<K: KeyTrait>(node: &Node<K>, stats: &mut TreeStats, height: usize) {
    stats.num_nodes += 1;
    if height > stats.max_height {
        stats.max_height = height;
    }
    if node.left.is_none() && node.right.is_none() {
        stats.num_leaves += 1;
    }
    for child in [node.left.as_deref(), node.right.as_deref()]
        .into_iter()
        .flatten()
    {
        get_tree_stats_recurse(child, stats, height + 1);
    }
}
