use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::iter;

use smallvec::SmallVec;

use super::node::{Link, Node, Side, size_of};

/// The size-augmented binary search tree backing `Bst`.
pub(crate) struct RawBst<K, V> {
    pub(super) root: Link<K, V>,
}

/// The turns taken on the way down, root first.
pub(crate) type Path = SmallVec<[Side; 32]>;

/// Follows `path` down from `slot`, handing every node passed to `visit`, and
/// returns the link the path ends at.
///
/// # Panics
///
/// Panics if `path` runs past a leaf.
pub(crate) fn descend<K, V>(
    mut slot: &mut Link<K, V>,
    path: impl IntoIterator<Item = Side>,
    mut visit: impl FnMut(&mut Node<K, V>),
) -> &mut Link<K, V> {
    for side in path {
        let node = slot.as_deref_mut().expect("`descend()` - `path` leaves the tree!");
        visit(&mut *node);
        slot = node.child_mut(side);
    }
    slot
}

/// Unlinks the leftmost node under the non-empty `link`.
fn detach_min<K, V>(link: &mut Link<K, V>) -> Box<Node<K, V>> {
    let mut depth = 0;
    let mut current = link.as_deref();
    while let Some(left) = current.and_then(Node::left) {
        depth += 1;
        current = Some(left);
    }

    let slot = descend(link, iter::repeat_n(Side::Left, depth), |node| node.size -= 1);
    let mut min = slot.take().expect("`detach_min()` - `link` is empty!");
    *slot = min.right.take();
    min
}

impl<K, V> RawBst<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self { root: None }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) fn len(&self) -> usize {
        size_of(&self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Returns the leftmost node of the tree.
    pub(crate) fn min(&self) -> Option<&Node<K, V>> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node)
    }

    /// Returns the rightmost node of the tree.
    pub(crate) fn max(&self) -> Option<&Node<K, V>> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node)
    }

    /// Returns the turns leading to the `rank`-th smallest key (one-based).
    fn select_path(&self, rank: usize) -> Option<Path> {
        if rank == 0 || rank > self.len() {
            return None;
        }

        let mut rank = rank;
        let mut path = Path::new();
        let mut node = self.root()?;
        loop {
            let left_size = size_of(&node.left);
            let side = match rank.cmp(&(left_size + 1)) {
                Ordering::Equal => return Some(path),
                Ordering::Less => Side::Left,
                Ordering::Greater => {
                    rank -= left_size + 1;
                    Side::Right
                }
            };
            path.push(side);
            node = node.child(side).as_deref()?;
        }
    }

    /// Returns the node at the end of `path`.
    fn follow(&self, path: &[Side]) -> Option<&Node<K, V>> {
        let mut node = self.root()?;
        for &side in path {
            node = node.child(side).as_deref()?;
        }
        Some(node)
    }

    fn follow_mut(&mut self, path: &[Side]) -> Option<&mut Node<K, V>> {
        descend(&mut self.root, path.iter().copied(), |_| {}).as_deref_mut()
    }

    /// Returns the node holding the `rank`-th smallest key (one-based).
    pub(crate) fn select(&self, rank: usize) -> Option<&Node<K, V>> {
        self.follow(&self.select_path(rank)?)
    }

    pub(crate) fn select_mut(&mut self, rank: usize) -> Option<&mut Node<K, V>> {
        let path = self.select_path(rank)?;
        self.follow_mut(&path)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: SmallVec<[(&Node<K, V>, usize); 32]> = SmallVec::new();
        stack.extend(self.root().map(|root| (root, 1)));

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Drops every node, children before their parent.
    ///
    /// A parent goes back on the work list until both children are gone, so
    /// no drop ever recurses into a subtree.
    pub(crate) fn clear(&mut self) {
        let mut pending: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            if let Some(child) = node.left.take().or_else(|| node.right.take()) {
                pending.push(node);
                pending.push(child);
            }
        }
    }

    /// Moves every key-value pair out of the tree in ascending order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(mut node) = stack.pop() else { break };
            current = node.right.take();
            entries.push(node.into_entry());
        }

        entries
    }
}

impl<K, V> Drop for RawBst<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Clone, V: Clone> Clone for RawBst<K, V> {
    /// Copies the tree node for node, keeping its shape.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut pending: Vec<(&Node<K, V>, &mut Link<K, V>)> = Vec::new();
        if let Some(node) = self.root() {
            pending.push((node, &mut root));
        }

        while let Some((source, target)) = pending.pop() {
            let copy = target.insert(Box::new(Node {
                key: source.key.clone(),
                value: source.value.clone(),
                left: None,
                right: None,
                size: source.size,
            }));
            let Node { left, right, .. } = &mut **copy;
            if let Some(child) = source.left() {
                pending.push((child, left));
            }
            if let Some(child) = source.right() {
                pending.push((child, right));
            }
        }

        Self { root }
    }
}

impl<K: Ord, V> RawBst<K, V> {
    /// Returns the first node on the search path whose key equals `key`.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let path = self.locate(key, |_| true)?;
        self.follow_mut(&path)
    }

    /// Returns the node with the largest key `<= key`.
    pub(crate) fn pred<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root();
        while let Some(node) = current {
            if node.key().borrow() <= key {
                best = Some(node);
                current = node.right();
            } else {
                current = node.left();
            }
        }
        best
    }

    /// Returns the node with the smallest key `>= key`.
    pub(crate) fn succ<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root();
        while let Some(node) = current {
            if node.key().borrow() >= key {
                best = Some(node);
                current = node.left();
            } else {
                current = node.right();
            }
        }
        best
    }

    /// Returns the one-based rank of the first key equal to `key`.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        // Lower-bound descent: it passes through the first equal key, if any.
        let mut below = 0;
        let mut found = false;
        let mut current = self.root();
        while let Some(node) = current {
            match node.key().borrow().cmp(key) {
                Ordering::Less => {
                    below += size_of(&node.left) + 1;
                    current = node.right();
                }
                ordering => {
                    found |= ordering == Ordering::Equal;
                    current = node.left();
                }
            }
        }
        found.then_some(below + 1)
    }

    /// Inserts a new leaf without rebalancing.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        let mut slot = &mut self.root;
        // Every node passed gains the new leaf as a descendant.
        while let Some(node) = slot {
            node.size += 1;
            slot = if key < node.key { &mut node.left } else { &mut node.right };
        }
        *slot = Some(Node::leaf(key, value));
    }

    /// Finds the first node on the search path with key `key` whose value
    /// `accept` approves, and returns the turns leading to it.
    pub(crate) fn locate<Q, F>(&self, key: &Q, mut accept: F) -> Option<Path>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: FnMut(&V) -> bool,
    {
        let mut path = Path::new();
        let mut current = self.root();
        while let Some(node) = current {
            let side = match key.cmp(node.key().borrow()) {
                Ordering::Less => Side::Left,
                Ordering::Equal if accept(node.value()) => return Some(path),
                // Remaining equal keys can only be to the right.
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            path.push(side);
            current = node.child(side).as_deref();
        }
        None
    }

    /// Removes a matching node without rebalancing.
    ///
    /// A node with two children is replaced by its in-order successor.
    pub(crate) fn delete<Q, F>(&mut self, key: &Q, accept: F) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: FnMut(&V) -> bool,
    {
        let path = self.locate(key, accept)?;
        let slot = descend(&mut self.root, path, |node| node.size -= 1);
        let mut node = slot.take()?;

        *slot = match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => child,
            (Some(left), Some(right)) => {
                let mut rest = Some(right);
                let mut successor = detach_min(&mut rest);
                successor.left = Some(left);
                successor.right = rest;
                successor.update_size();
                Some(successor)
            }
        };

        Some(node.into_entry())
    }
}

#[cfg(test)]
impl<K: Ord, V> RawBst<K, V> {
    /// Asserts the ordering and size invariants on every reachable node.
    pub(crate) fn check_invariants(&self) {
        // (node, inclusive lower bound, exclusive upper bound)
        let mut stack: Vec<(&Node<K, V>, Option<&K>, Option<&K>)> = self.root().into_iter().map(|root| (root, None, None)).collect();
        let mut reachable = 0;

        while let Some((node, lower, upper)) = stack.pop() {
            reachable += 1;
            let key = node.key();
            assert!(lower.is_none_or(|lower| lower <= key), "key below its subtree's lower bound");
            assert!(upper.is_none_or(|upper| key < upper), "key not below its subtree's upper bound");
            assert_eq!(node.size(), size_of(&node.left) + size_of(&node.right) + 1, "stale subtree size");

            stack.extend(node.left().map(|left| (left, lower, Some(key))));
            stack.extend(node.right().map(|right| (right, Some(key), upper)));
        }

        assert_eq!(reachable, self.len(), "root size disagrees with node count");
    }
}
