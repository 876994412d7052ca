use crate::id::DenseId;

/// This provides additional information about a given value in the forest.
///
/// For each value in the forest we store a `Metadata`.
#[derive(Clone, Debug)]
pub(crate) struct Metadata<E> {
    /// The parent of the value in its set's tree.
    /// These form an upside down tree where each child holds the
    /// identifier of its parent.
    parent: E,
    /// The number of values whose chain of parents passes through this
    /// value, the value itself included.
    size: usize,
}

impl<E> Metadata<E>
where
    E: DenseId,
{
    /// Create a new `Metadata` for a value that forms its own singleton
    /// set.
    pub(crate) fn new(value: E) -> Self {
        Self {
            parent: value,
            size: 1,
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> E {
        self.parent
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&mut self, value: E) {
        self.parent = value;
    }

    /// Return the `size` variable.
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Set the `size` variable.
    pub(crate) fn set_size(&mut self, value: usize) {
        self.size = value;
    }
}
