use thiserror::Error;

use crate::keys::KeyTrait;

/// Errors reported by [`SplayTree`](crate::SplayTree) operations.
///
/// Absent keys are not errors: `search` reports them through its return
/// value, and `delete` of a missing key is a no-op. These two variants are
/// the only failure modes the tree has.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplayTreeError<K: KeyTrait> {
    /// Insert found the key already present. The tree was left exactly as
    /// it was: the duplicate is detected during the placement descent,
    /// before any structural change.
    #[error("duplicate key: {key:?}")]
    DuplicateKey { key: K },

    /// Delete was called on a tree with no nodes.
    #[error("cannot delete from an empty tree")]
    EmptyTree,
}
