//! Structural self-checks for a subtree.
//!
//! These exist to verify that insert and remove preserve the tree invariants,
//! and are never called by those operations.

use crate::node::{balance, Node};

/// Returns true if every key in the subtree rooted at `n` lies strictly within
/// the open interval `(lower, upper)`, where [`None`] is unbounded, and the
/// binary search ordering holds at every node.
pub(crate) fn is_bst<V>(n: Option<&Node<V>>, lower: Option<u64>, upper: Option<u64>) -> bool {
    let n = match n {
        Some(v) => v,
        None => return true,
    };

    if lower.is_some_and(|l| n.key() <= l) || upper.is_some_and(|u| n.key() >= u) {
        return false;
    }

    // Descending left tightens the upper bound, descending right tightens the
    // lower bound.
    is_bst(n.left(), lower, Some(n.key())) && is_bst(n.right(), Some(n.key()), upper)
}

/// Returns true if every node in the subtree rooted at `n` stores the correct
/// height and has a balance factor within [-1, 1].
pub(crate) fn is_balanced<V>(n: Option<&Node<V>>) -> bool {
    let n = match n {
        Some(v) => v,
        None => return true,
    };

    let want_height = n
        .left()
        .map(|v| v.height() + 1)
        .max(n.right().map(|v| v.height() + 1))
        .unwrap_or_default();

    n.height() == want_height
        && balance(n).abs() <= 1
        && is_balanced(n.left())
        && is_balanced(n.right())
}
