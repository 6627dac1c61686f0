use super::{balance, update_height, Node};

/// Recompute the height of `n` and, if the subtree rooted at `n` is skewed by
/// more than 1, rotate it back into balance.
///
/// Returns true if a rotation was applied (which may change the height of the
/// subtree, requiring the caller to continue checking ancestors).
pub(crate) fn rebalance<V>(n: &mut Box<Node<V>>) -> bool {
    update_height(n);

    match balance(n) {
        // Left-heavy
        2.. if n.left().map(balance).unwrap_or_default() >= 0 => rotate_right(n),
        2.. => rotate_left_right(n),
        // Right-heavy
        ..=-2 if n.right().map(balance).unwrap_or_default() <= 0 => rotate_left(n),
        ..=-2 => rotate_right_left(n),

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => return false,
    }

    // Invariant: a single rotation restores the local balance factor.
    debug_assert!(balance(n).abs() <= 1);
    true
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// The subtree is left unchanged if `x` has no right child.
pub(crate) fn rotate_left<V>(x: &mut Box<Node<V>>) {
    debug_assert!(x.right.is_some(), "rotate_left of node without right child");
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);

    #[cfg(feature = "tracing")]
    tracing::trace!(root = x.key, "rotate left");
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// The subtree is left unchanged if `y` has no left child.
pub(crate) fn rotate_right<V>(y: &mut Box<Node<V>>) {
    debug_assert!(y.left.is_some(), "rotate_right of node without left child");
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);

    #[cfg(feature = "tracing")]
    tracing::trace!(root = y.key, "rotate right");
}

/// Correct a left-heavy subtree whose left child leans right.
///
/// ```text
///        z                    z
///       / \                  / \                    y
///      x   4   Rotate       y   4   Rotate        /   \
///     / \      Left x      / \      Right z      x     z
///    1   y    -------->   x   3    -------->    / \   / \
///       / \              / \                   1   2 3   4
///      2   3            1   2
/// ```
pub(crate) fn rotate_left_right<V>(z: &mut Box<Node<V>>) {
    if let Some(x) = z.left.as_mut() {
        rotate_left(x);
    }
    rotate_right(z);
}

/// Correct a right-heavy subtree whose right child leans left.
///
/// Mirror of [`rotate_left_right()`].
pub(crate) fn rotate_right_left<V>(z: &mut Box<Node<V>>) {
    if let Some(x) = z.right.as_mut() {
        rotate_right(x);
    }
    rotate_left(z);
}
