use std::fmt;

/// The closed set of conditions an [`AvlTree`] operation can report.
///
/// None of these are fatal: a failed operation leaves the tree exactly as it
/// was before the call.
///
/// [`AvlTree`]: crate::AvlTree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// A node with the requested key already exists in the tree.
    KeyExists,

    /// No node with the requested key exists in the tree.
    KeyNotFound,

    /// Memory for a new node could not be allocated.
    AllocationFailure,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyExists => write!(f, "key already exists"),
            Self::KeyNotFound => write!(f, "key not found"),
            Self::AllocationFailure => write!(f, "node allocation failed"),
        }
    }
}

impl std::error::Error for TreeError {}

/// The error returned by [`AvlTree::insert()`], handing ownership of the
/// rejected value back to the caller.
///
/// [`AvlTree::insert()`]: crate::AvlTree::insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertError<V> {
    kind: TreeError,
    key: u64,
    value: V,
}

impl<V> InsertError<V> {
    pub(crate) fn new(kind: TreeError, key: u64, value: V) -> Self {
        Self { kind, key, value }
    }

    /// The reason the insert was rejected.
    pub fn kind(&self) -> TreeError {
        self.kind
    }

    /// The key passed to the rejected insert.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Borrow the value that was not inserted.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Take back ownership of the value that was not inserted.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V> fmt::Display for InsertError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot insert key {}: {}", self.key, self.kind)
    }
}

impl<V> std::error::Error for InsertError<V>
where
    V: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
