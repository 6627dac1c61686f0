use std::{collections::VecDeque, iter::FusedIterator};

use crate::node::Node;

/// The order in which [`AvlTree::traverse()`] visits nodes.
///
/// [`AvlTree::traverse()`]: crate::AvlTree::traverse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Visit a node, then its left subtree, then its right subtree.
    PreOrder,

    /// Visit the left subtree, then the node, then the right subtree.
    ///
    /// Nodes are visited in strictly ascending key order.
    InOrder,

    /// Visit the left subtree, then the right subtree, then the node.
    PostOrder,

    /// Visit nodes level by level from the root, left to right within each
    /// level.
    BreadthFirst,

    /// Visit every node three times: once when descending into it, once on
    /// return from its left subtree and once on return from its right
    /// subtree.
    ///
    /// An absent child is treated as an immediate return, so a leaf is also
    /// visited three times in a row. Use [`Visit::step()`] to tell the
    /// visits apart.
    Euler,
}

/// Identifies which of the (up to three) visits of a node a [`Visit`]
/// represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// The walk is descending into the node.
    ///
    /// This is the step of every [`Order::PreOrder`] and
    /// [`Order::BreadthFirst`] visit.
    Enter,

    /// The walk has returned from the node's left subtree.
    ///
    /// This is the step of every [`Order::InOrder`] visit.
    FromLeft,

    /// The walk has returned from the node's right subtree.
    ///
    /// This is the step of every [`Order::PostOrder`] visit.
    FromRight,
}

/// A read-only view of a node, passed to traversal visitors.
#[derive(Debug)]
pub struct Visit<'a, V> {
    node: &'a Node<V>,
    step: Step,
}

impl<V> Clone for Visit<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Visit<'_, V> {}

impl<'a, V> Visit<'a, V> {
    /// The key stored in this node.
    pub fn key(&self) -> u64 {
        self.node.key()
    }

    /// The height of the subtree rooted at this node, where a leaf has a
    /// height of 0.
    pub fn height(&self) -> u8 {
        self.node.height()
    }

    /// The value stored under [`Visit::key()`].
    pub fn value(&self) -> &'a V {
        self.node.value()
    }

    /// Which of the node's visits this is.
    ///
    /// Only [`Order::Euler`] yields more than one [`Step`] per node.
    pub fn step(&self) -> Step {
        self.step
    }

    pub(crate) fn node(&self) -> &'a Node<V> {
        self.node
    }
}

/// A lazy iterator of [`Visit`] instances from a walk of an
/// [`AvlTree`](crate::AvlTree) in a given [`Order`].
#[derive(Debug)]
pub struct Traverse<'a, V> {
    inner: Walk<'a, V>,
}

#[derive(Debug)]
enum Walk<'a, V> {
    /// An Euler tour driven by an explicit stack of pending (node, step)
    /// visits, yielding only the visits matching `filter` (or all of them
    /// when [`None`]).
    DepthFirst {
        filter: Option<Step>,
        stack: Vec<(&'a Node<V>, Step)>,
    },

    /// A FIFO queue of the subtrees pending a visit.
    BreadthFirst { queue: VecDeque<&'a Node<V>> },
}

impl<'a, V> Traverse<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>, order: Order) -> Self {
        let filter = match order {
            Order::PreOrder => Some(Step::Enter),
            Order::InOrder => Some(Step::FromLeft),
            Order::PostOrder => Some(Step::FromRight),
            Order::Euler => None,
            Order::BreadthFirst => {
                return Self {
                    inner: Walk::BreadthFirst {
                        queue: root.into_iter().collect(),
                    },
                }
            }
        };

        Self {
            inner: Walk::DepthFirst {
                filter,
                stack: root.map(|v| (v, Step::Enter)).into_iter().collect(),
            },
        }
    }
}

impl<'a, V> Iterator for Traverse<'a, V> {
    type Item = Visit<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Walk::DepthFirst { filter, stack } => loop {
                let (node, step) = stack.pop()?;

                // Schedule the next visit of this node, and the subtree that
                // must be walked before it.
                match step {
                    Step::Enter => {
                        stack.push((node, Step::FromLeft));
                        stack.extend(node.left().map(|v| (v, Step::Enter)));
                    }
                    Step::FromLeft => {
                        stack.push((node, Step::FromRight));
                        stack.extend(node.right().map(|v| (v, Step::Enter)));
                    }
                    Step::FromRight => {}
                }

                if filter.map(|want| want == step).unwrap_or(true) {
                    return Some(Visit { node, step });
                }
            },
            Walk::BreadthFirst { queue } => {
                let node = queue.pop_front()?;
                queue.extend(node.left().into_iter().chain(node.right()));

                Some(Visit {
                    node,
                    step: Step::Enter,
                })
            }
        }
    }
}

impl<V> FusedIterator for Traverse<'_, V> {}
