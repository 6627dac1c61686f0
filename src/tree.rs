use std::{fmt::Display, ops::ControlFlow};

use crate::{
    dot::Dot,
    error::{InsertError, TreeError},
    iter::{IntoIter, Iter},
    node::{drain_post_order, remove_recurse, Node},
    traverse::{Order, Traverse, Visit},
    validate,
};

/// A self-balancing AVL tree mapping unique `u64` keys to values of type `V`.
///
/// The tree is intended for single-owner use: every mutating operation takes
/// `&mut self`, and no internal synchronisation is performed.
#[derive(Debug, Clone)]
pub struct AvlTree<V> {
    root: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> Default for AvlTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AvlTree<V> {
    /// Construct a new, empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an [`InsertError`] holding `value` if:
    ///
    /// * [`TreeError::KeyExists`] - `key` is already present in the tree.
    /// * [`TreeError::AllocationFailure`] - the new node cannot be allocated.
    ///
    /// In both cases the tree is left unmodified.
    pub fn insert(&mut self, key: u64, value: V) -> Result<(), InsertError<V>> {
        match self.root.as_mut() {
            Some(v) => v.insert(key, value)?,
            None => self.root = Some(Node::try_new_boxed(key, value)?),
        }

        self.len += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(key, len = self.len, "inserted key");

        Ok(())
    }

    /// Remove the value stored under `key`, returning ownership of it to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if `key` is not in the tree, in which
    /// case the tree is left unmodified.
    pub fn remove(&mut self, key: u64) -> Result<V, TreeError> {
        let v = remove_recurse(&mut self.root, key).ok_or(TreeError::KeyNotFound)?;
        self.len -= 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(key, len = self.len, "removed key");

        Ok(v)
    }

    pub fn get(&self, key: u64) -> Option<&V> {
        self.root.as_ref().and_then(|v| v.get(key))
    }

    pub fn get_mut(&mut self, key: u64) -> Option<&mut V> {
        self.root.as_mut().and_then(|v| v.get_mut(key))
    }

    pub fn contains_key(&self, key: u64) -> bool {
        self.get(key).is_some()
    }

    /// The entry with the smallest key, if any.
    pub fn first(&self) -> Option<(u64, &V)> {
        self.root.as_deref().map(|v| v.min()).map(|v| (v.key(), v.value()))
    }

    /// The entry with the largest key, if any.
    pub fn last(&self) -> Option<(u64, &V)> {
        self.root.as_deref().map(|v| v.max()).map(|v| (v.key(), v.value()))
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree, where a tree holding a single entry has a
    /// height of 0.
    ///
    /// Returns [`None`] for an empty tree.
    pub fn height(&self) -> Option<u8> {
        self.root.as_deref().map(|v| v.height())
    }

    /// Walk the tree in the given [`Order`], calling `visitor` for each
    /// [`Visit`].
    ///
    /// The walk stops as soon as `visitor` returns [`ControlFlow::Break`],
    /// and the break value is returned.
    ///
    /// Under [`Order::Euler`] the visitor is invoked three times for every
    /// node. All other orders invoke it exactly once per node.
    pub fn traverse<B, F>(&self, order: Order, visitor: F) -> ControlFlow<B>
    where
        F: FnMut(Visit<'_, V>) -> ControlFlow<B>,
    {
        self.visits(order).try_for_each(visitor)
    }

    /// Return a lazy iterator of the [`Visit`] instances a walk in the given
    /// [`Order`] produces.
    pub fn visits(&self, order: Order) -> Traverse<'_, V> {
        Traverse::new(self.root.as_deref(), order)
    }

    /// Iterate over `(key, &value)` tuples in ascending key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_deref())
    }

    /// Returns true if the binary search ordering holds for every node: all
    /// keys in a left subtree are less than the node key, and all keys in a
    /// right subtree are greater.
    pub fn is_bst(&self) -> bool {
        validate::is_bst(self.root.as_deref(), None, None)
    }

    /// Returns true if every node stores a correct height, and the heights of
    /// the two subtrees of every node differ by at most 1.
    pub fn is_balanced(&self) -> bool {
        validate::is_balanced(self.root.as_deref())
    }

    /// Remove all entries, passing each key and value to `f` in post-order
    /// (children before their parent).
    pub fn clear_with<F>(&mut self, mut f: F)
    where
        F: FnMut(u64, V),
    {
        if let Some(root) = self.root.take() {
            drain_post_order(root, &mut f);
        }
        self.len = 0;
    }

    /// Remove and drop all entries.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Render the tree as a Graphviz digraph.
    pub fn to_dot(&self) -> String
    where
        V: Display,
    {
        Dot(self.root.as_deref()).to_string()
    }
}

impl<V> IntoIterator for AvlTree<V> {
    type Item = (u64, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}

impl<'a, V> IntoIterator for &'a AvlTree<V> {
    type Item = (u64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Entries that cannot be inserted are discarded: an entry with a key that is
/// already present keeps the first value inserted for that key, and an entry
/// for which node allocation fails ([`TreeError::AllocationFailure`]) is
/// dropped. Use [`AvlTree::insert()`] to observe either condition.
impl<V> Extend<(u64, V)> for AvlTree<V> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (u64, V)>,
    {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

/// Entries are inserted as by [`Extend`]: duplicate keys keep the first value,
/// and entries for which node allocation fails are dropped.
impl<V> FromIterator<(u64, V)> for AvlTree<V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (u64, V)>,
    {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}
