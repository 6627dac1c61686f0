use std::{
    alloc::{self, Layout},
    cmp::Ordering,
};

use crate::error::{InsertError, TreeError};

mod rotate;

pub(crate) use rotate::rebalance;

#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    /// Child nodes pointers.
    left: Option<Box<Node<V>>>,
    right: Option<Box<Node<V>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0, and an empty subtree is treated as having a
    /// height of -1 when computing the balance factor.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    key: u64,
    value: V,
}

impl<V> Node<V> {
    pub(crate) fn new(key: u64, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Allocate a new leaf node, handing `value` back within an
    /// [`InsertError`] if the allocation cannot be satisfied.
    pub(crate) fn try_new_boxed(key: u64, value: V) -> Result<Box<Self>, InsertError<V>> {
        try_box(Self::new(key, value))
            .map_err(|n| InsertError::new(TreeError::AllocationFailure, key, n.value))
    }

    pub(crate) fn insert(self: &mut Box<Self>, key: u64, value: V) -> Result<(), InsertError<V>> {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                // Nothing has been modified on the path to this node, so the
                // tree is left exactly as it was.
                return Err(InsertError::new(TreeError::KeyExists, key, value));
            }
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => v.insert(key, value)?,
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Self::try_new_boxed(key, value)?);

                // A new leaf child changes the balance factor of self by at
                // most 1, from balanced or skewed in the opposite direction,
                // so only the height needs recomputing here.
                update_height(self);
                return Ok(());
            }
        };

        // The subtree below has changed shape, and may now be taller than
        // before: recompute the height and rotate if it has become skewed.
        rebalance(self);

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        Ok(())
    }

    pub(crate) fn get(&self, key: u64) -> Option<&V> {
        let mut n = self;
        loop {
            n = match key.cmp(&n.key) {
                Ordering::Less => n.left()?,
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right()?,
            };
        }
    }

    pub(crate) fn get_mut(&mut self, key: u64) -> Option<&mut V> {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_mut()?.get_mut(key),
            Ordering::Equal => Some(&mut self.value),
            Ordering::Greater => self.right.as_mut()?.get_mut(key),
        }
    }

    /// The left-most node of the subtree rooted at `self`.
    pub(crate) fn min(&self) -> &Self {
        let mut n = self;
        while let Some(left) = n.left() {
            n = left;
        }
        n
    }

    /// The right-most node of the subtree rooted at `self`.
    pub(crate) fn max(&self) -> &Self {
        let mut n = self;
        while let Some(right) = n.right() {
            n = right;
        }
        n
    }

    pub(crate) fn key(&self) -> u64 {
        self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the key and value `V` it contains.
    pub(crate) fn into_tuple(self) -> (u64, V) {
        (self.key, self.value)
    }
}

/// Move `v` into a new heap allocation, returning it unchanged if the global
/// allocator cannot satisfy the request.
///
/// [`Box::new()`] aborts the process when allocation fails, which would make
/// [`TreeError::AllocationFailure`] unreportable; allocating through
/// [`alloc::alloc()`] directly lets the null return be observed instead.
fn try_box<T>(v: T) -> Result<Box<T>, T> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(v));
    }

    // SAFETY: the layout has a non-zero size.
    let ptr = unsafe { alloc::alloc(layout) }.cast::<T>();
    if ptr.is_null() {
        return Err(v);
    }

    // SAFETY: ptr is non-null, was allocated by the global allocator with the
    // layout of T, and is valid for a write of T. Ownership of the allocation
    // is transferred to the Box.
    unsafe {
        ptr.write(v);
        Ok(Box::from_raw(ptr))
    }
}

/// The height of the subtree `n`, or -1 for an empty subtree.
pub(crate) fn height<V>(n: Option<&Node<V>>) -> i16 {
    n.map(|v| v.height() as i16).unwrap_or(-1)
}

pub(crate) fn update_height<V>(n: &mut Node<V>) {
    n.height = n
        .left()
        .map(|v| v.height() + 1)
        .max(n.right().map(|v| v.height() + 1))
        .unwrap_or_default()
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<V>(n: &Node<V>) -> i16 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    height(n.left()) - height(n.right())
}

/// Remove the node holding `key` from the subtree held in `slot`, returning
/// its value and rebalancing every node on the path back up to `slot`.
///
/// Returns [`None`] without modifying the subtree if `key` is not found.
pub(crate) fn remove_recurse<V>(slot: &mut Option<Box<Node<V>>>, key: u64) -> Option<V> {
    let node = slot.as_mut()?;

    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove_recurse(&mut node.left, key)?,
        Ordering::Greater => remove_recurse(&mut node.right, key)?,
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // This node has two children:
            //
            //                          +----------+
            //                     +----|   node   |----+
            //                     |    +----------+    |
            //                     v                    v
            //               +-----------+       +------------+
            //               | node.left |       | node.right |
            //               +-----------+       +------------+
            //
            // Extract the in-order successor (the left-most node of
            // "node.right") and move its key and value into "node", returning
            // the value it displaces.
            let successor = *extract_subtree_min(&mut node.right)?;

            // Invariant: the extracted node is unlinked from all children.
            debug_assert!(successor.left.is_none());
            debug_assert!(successor.right.is_none());
            debug_assert!(successor.key > key);

            node.key = successor.key;
            std::mem::replace(&mut node.value, successor.value)
        }
        Ordering::Equal => {
            // This node has at most one child, which replaces it in the parent
            // link (or the link becomes empty for a leaf).
            //
            // The child subtree is already balanced, so there is nothing to
            // rebalance at this level.
            let mut old = slot.take()?;
            *slot = old.take_left().or_else(|| old.take_right());

            debug_assert!(old.left.is_none());
            debug_assert!(old.right.is_none());

            return Some(old.value);
        }
    };

    // A removal may shorten the subtree below, requiring a rotation at any
    // level on the path back to the root.
    rebalance(node);
    debug_assert!(balance(node).abs() <= 1);

    Some(removed)
}

/// Extracts the node holding the minimum key of the subtree in `slot`, linking
/// the right subtree of the extracted node in its place.
///
/// Every node on the path to the extracted node is rebalanced.
fn extract_subtree_min<V>(slot: &mut Option<Box<Node<V>>>) -> Option<Box<Node<V>>> {
    let node = slot.as_mut()?;

    if node.left.is_some() {
        // Descend left to the end of the left edge.
        let min = extract_subtree_min(&mut node.left);
        rebalance(node);
        debug_assert!(balance(node).abs() <= 1);
        return min;
    }

    // This node is the end of the left edge.
    //
    // ```text
    //                 6
    //                / \
    //    here ->   <4>   7
    //                \
    //                 5
    // ```
    //
    // Unlink it, and link its right child (if any) in its place.
    let mut min = slot.take()?;
    *slot = min.take_right();
    Some(min)
}

/// Consume the subtree rooted at `n` in post-order, passing each key and value
/// to `f` before the node holding it is freed.
pub(crate) fn drain_post_order<V, F>(mut n: Box<Node<V>>, f: &mut F)
where
    F: FnMut(u64, V),
{
    if let Some(left) = n.take_left() {
        drain_post_order(left, f);
    }
    if let Some(right) = n.take_right() {
        drain_post_order(right, f);
    }

    let (key, value) = n.into_tuple();
    f(key, value);
}
