use alloc::boxed::Box;

/// An owned, possibly empty subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Which child of a node a descent continues into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A binary search tree node.
///
/// Keys under `left` compare strictly less than `key`; keys under `right`
/// compare greater than or equal to it. Duplicates therefore always sit in
/// the right subtree of an equal key.
pub(crate) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
    // The number of nodes in the subtree rooted here, this one included.
    pub(super) size: usize,
}

/// Returns the size of the subtree behind `link`, zero if empty.
#[inline]
pub(crate) fn size_of<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

impl<K, V> Node<K, V> {
    /// Creates a boxed, childless node.
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            size: 1,
        })
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn key_value(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub(crate) fn key_value_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    /// Unwraps a node whose children have already been detached.
    pub(crate) fn into_entry(self: Box<Self>) -> (K, V) {
        debug_assert!(self.left.is_none() && self.right.is_none());
        let Node { key, value, .. } = *self;
        (key, value)
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> &Link<K, V> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<K, V> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Returns the cached subtree size.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Recomputes the cached size from the children.
    pub(crate) fn update_size(&mut self) {
        self.size = size_of(&self.left) + size_of(&self.right) + 1;
    }
}
