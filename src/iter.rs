use std::iter::FusedIterator;

use crate::{
    node::Node,
    traverse::{Order, Traverse},
};

/// An iterator of `(key, &value)` tuples in ascending key order.
#[derive(Debug)]
pub struct Iter<'a, V> {
    walk: Traverse<'a, V>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>) -> Self {
        Self {
            walk: Traverse::new(root, Order::InOrder),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (u64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|v| (v.key(), v.value()))
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

/// An iterator of owned `(key, value)` tuples in ascending key order, as the
/// underlying tree `into_iter()` impl.
#[derive(Debug)]
pub struct IntoIter<V> {
    stack: Vec<Box<Node<V>>>,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(root: Option<Box<Node<V>>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<V>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (u64, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        Some(v.into_tuple())
    }
}

impl<V> FusedIterator for IntoIter<V> {}
