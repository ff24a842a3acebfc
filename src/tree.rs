//! Splay tree implementation.
//!
//! This module contains the main [`SplayTree`] implementation: the splay
//! restructuring primitive and the insert/search/delete operations built
//! on top of it.

use std::cmp::Ordering;

use crate::errors::SplayTreeError;
use crate::iter::{Iter, TraversalOrder};
use crate::keys::KeyTrait;
use crate::node::{Link, Node};

/// A splay tree -- a self-adjusting binary search tree over ordered keys.
///
/// Every access moves the touched node (or, on a miss, the last node the
/// search visited) to the root through paired zig-zig / zig-zag rotations,
/// so recently used keys are cheap to reach again. A single operation may
/// cost O(n), but any sequence of m operations on an n-node tree costs
/// O(m log n) amortized.
///
/// Searching is deliberately a mutating operation: the restructuring side
/// effect is the whole point of the data structure. Callers that must not
/// disturb the shape can use [`SplayTree::contains`] instead.
///
/// The tree performs no internal locking; concurrent use requires external
/// mutual exclusion around every operation, including `search`.
///
/// ## Examples
///
/// ```rust
/// use splaytree::{SplayTree, TraversalOrder};
///
/// let mut tree = SplayTree::new();
/// for key in [5, 3, 8, 1, 4] {
///     tree.insert(key).unwrap();
/// }
///
/// // The most recently inserted key sits at the root.
/// assert_eq!(tree.root_key(), Some(4));
///
/// // Searching splays the found key to the root.
/// assert!(tree.search(1));
/// assert_eq!(tree.root_key(), Some(1));
///
/// assert_eq!(tree.traverse(TraversalOrder::InOrder), vec![1, 3, 4, 5, 8]);
/// ```
pub struct SplayTree<K: KeyTrait> {
    root: Link<K>,
    len: usize,
}

impl<K: KeyTrait> Default for SplayTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyTrait> SplayTree<K> {
    /// Create a new empty splay tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Check if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The key at the root, if any.
    ///
    /// After a successful `insert(k)`, and after a `search(k)` that
    /// returned true, this is `k`.
    pub fn root_key(&self) -> Option<K> {
        self.root.as_deref().map(|node| node.key)
    }

    /// Insert a key, then splay it to the root.
    ///
    /// # Errors
    ///
    /// [`SplayTreeError::DuplicateKey`] if the key is already present. The
    /// descent stops at the first equality, before any node is created or
    /// moved, so a failed insert leaves the tree byte-for-byte as it was.
    pub fn insert(&mut self, key: K) -> Result<(), SplayTreeError<K>> {
        Self::insert_recurse(&mut self.root, key)?;
        self.root = Self::splay(self.root.take(), key);
        self.len += 1;
        Ok(())
    }

    /// Search for a key, splaying the tree around it.
    ///
    /// The splay happens whether or not the key is present: a hit brings
    /// the node itself to the root, a miss brings up the last node the
    /// descent visited. Never fails; an empty tree reports false.
    pub fn search(&mut self, key: K) -> bool {
        self.root = Self::splay(self.root.take(), key);
        matches!(&self.root, Some(node) if node.key == key)
    }

    /// Read-only membership probe.
    ///
    /// Unlike [`SplayTree::search`] this does not splay. It exists for
    /// callers (and tests) that need membership without the shape side
    /// effect, and forfeits the amortized self-adjustment in exchange.
    pub fn contains(&self, key: K) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Delete a key.
    ///
    /// Splays around the key first; if the key turns out to be absent the
    /// call keeps that reshaping but removes nothing. When the root holds
    /// the key it is detached and the two orphaned subtrees are joined by
    /// splaying the left subtree around the deleted key: every key there
    /// is smaller, so its maximum surfaces with no right child, and the
    /// old right subtree hangs off that vacant slot.
    ///
    /// # Errors
    ///
    /// [`SplayTreeError::EmptyTree`] if the tree has no nodes.
    pub fn delete(&mut self, key: K) -> Result<(), SplayTreeError<K>> {
        if self.is_empty() {
            return Err(SplayTreeError::EmptyTree);
        }

        // Splaying a non-empty tree always yields a root.
        let mut root = Self::splay(self.root.take(), key).expect("splay of a non-empty tree");
        if root.key != key {
            self.root = Some(root);
            return Ok(());
        }

        self.root = match root.left.take() {
            None => root.right.take(),
            Some(left) => {
                let mut joined =
                    Self::splay(Some(left), key).expect("splay of a non-empty subtree");
                // The left subtree holds only keys below the deleted one,
                // so its splayed maximum cannot have a right child.
                debug_assert!(joined.right.is_none());
                joined.right = root.right.take();
                Some(joined)
            }
        };
        self.len -= 1;
        Ok(())
    }

    /// Collect the keys in the given traversal order.
    ///
    /// Read-only: no splaying, the root stays where it is. In-order
    /// traversal of a valid tree yields strictly ascending keys.
    pub fn traverse(&self, order: TraversalOrder) -> Vec<K> {
        Iter::new(self.root.as_deref(), order).collect()
    }

    /// Iterator over the keys in ascending (in-order) order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), TraversalOrder::InOrder)
    }

    pub(crate) fn root_node(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

// Internals implementation
impl<K: KeyTrait> SplayTree<K> {
    /// Recursive top-down splay. Returns the new subtree root: the node
    /// holding `key` if present, otherwise the last node a standard BST
    /// search for `key` would visit.
    ///
    /// Each level of the recursion fixes up the grandchild on the search
    /// path, then composes up to two rotations, moving the target two
    /// levels at a time. The amortized O(log n) bound depends on exactly
    /// this pairing; one rotation per level is a different (and worse)
    /// algorithm.
    fn splay(node: Link<K>, key: K) -> Link<K> {
        let Some(mut root) = node else {
            return None;
        };

        match key.cmp(&root.key) {
            Ordering::Equal => Some(root),
            Ordering::Less => {
                let Some(mut left) = root.left.take() else {
                    // Key absent; the root is the search endpoint.
                    return Some(root);
                };
                match key.cmp(&left.key) {
                    Ordering::Less => {
                        // Zig-zig: splay the grandchild up, rotate at the
                        // root, and let the final rotation finish the pair.
                        left.left = Self::splay(left.left.take(), key);
                        root.left = Some(left);
                        root = Node::rotate_right(root);
                    }
                    Ordering::Greater => {
                        // Zig-zag: splay the inner grandchild, then rotate
                        // the child toward it if anything came up.
                        left.right = Self::splay(left.right.take(), key);
                        if left.right.is_some() {
                            left = Node::rotate_left(left);
                        }
                        root.left = Some(left);
                    }
                    Ordering::Equal => {
                        root.left = Some(left);
                    }
                }
                if root.left.is_none() {
                    Some(root)
                } else {
                    Some(Node::rotate_right(root))
                }
            }
            Ordering::Greater => {
                let Some(mut right) = root.right.take() else {
                    return Some(root);
                };
                match key.cmp(&right.key) {
                    Ordering::Greater => {
                        // Zag-zag, mirror of zig-zig.
                        right.right = Self::splay(right.right.take(), key);
                        root.right = Some(right);
                        root = Node::rotate_left(root);
                    }
                    Ordering::Less => {
                        // Zag-zig, mirror of zig-zag.
                        right.left = Self::splay(right.left.take(), key);
                        if right.left.is_some() {
                            right = Node::rotate_right(right);
                        }
                        root.right = Some(right);
                    }
                    Ordering::Equal => {
                        root.right = Some(right);
                    }
                }
                if root.right.is_none() {
                    Some(root)
                } else {
                    Some(Node::rotate_left(root))
                }
            }
        }
    }

    /// Standard recursive BST insertion through mutable links. Stops at
    /// the first equality, so a duplicate never mutates structure.
    fn insert_recurse(link: &mut Link<K>, key: K) -> Result<(), SplayTreeError<K>> {
        match link {
            None => {
                *link = Some(Node::new(key));
                Ok(())
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_recurse(&mut node.left, key),
                Ordering::Greater => Self::insert_recurse(&mut node.right, key),
                Ordering::Equal => Err(SplayTreeError::DuplicateKey { key }),
            },
        }
    }
}

impl<K: KeyTrait> Drop for SplayTree<K> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop of the box chain
        // consumes call stack proportional to tree height.
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
