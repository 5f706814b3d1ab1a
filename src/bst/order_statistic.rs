use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::Bst;
use crate::Rank;
use crate::raw::Node;

impl<K, V, R> Bst<K, V, R> {
    /// Returns the entry with the `rank`-th smallest key.
    ///
    /// The rank is one-based: `select(1)` is the minimum and `select(len)`
    /// the maximum.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is zero or greater than [`len`](Bst::len). Use
    /// [`get_by_rank`](Bst::get_by_rank) for a checked lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let tree = Bst::from([(30, 'c'), (10, 'a'), (20, 'b')]);
    /// assert_eq!(tree.select(1), (&10, &'a'));
    /// assert_eq!(tree.select(3), (&30, &'c'));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn select(&self, rank: usize) -> (&K, &V) {
        match self.get_by_rank(rank) {
            Some(entry) => entry,
            None => panic!("`Bst::select()` - `rank` {rank} is out of range for a tree of length {}!", self.len()),
        }
    }

    /// Returns the entry with the `rank`-th smallest key (one-based), or
    /// `None` if `rank` is zero or greater than [`len`](Bst::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert("a", 10);
    /// tree.insert("c", 30);
    /// tree.insert("b", 20);
    ///
    /// assert_eq!(tree.get_by_rank(2), Some((&"b", &20)));
    /// assert_eq!(tree.get_by_rank(0), None);
    /// assert_eq!(tree.get_by_rank(4), None);
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.select(rank).map(Node::key_value)
    }

    /// Returns the key and a mutable reference to the value of the entry at
    /// one-based `rank`.
    ///
    /// The key stays shared because changing it could break the ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::from([(10, "a"), (5, "b")]);
    /// if let Some((key, value)) = tree.get_by_rank_mut(1) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    /// assert_eq!(tree.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.select_mut(rank).map(Node::key_value_mut)
    }
}

impl<K: Ord, V, R> Bst<K, V, R> {
    /// Returns the entry with the largest key less than or equal to `key`.
    ///
    /// `key` itself need not be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let tree = Bst::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(tree.pred(&25).map(|(k, _)| *k), Some(20));
    /// assert_eq!(tree.pred(&20).map(|(k, _)| *k), Some(20));
    /// assert_eq!(tree.pred(&5), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn pred<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.pred(key).map(Node::key_value)
    }

    /// Returns the entry with the smallest key greater than or equal to
    /// `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let tree = Bst::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(tree.succ(&25).map(|(k, _)| *k), Some(30));
    /// assert_eq!(tree.succ(&31), None);
    /// ```
    #[must_use]
    pub fn succ<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.succ(key).map(Node::key_value)
    }

    /// Returns the one-based rank of `key`, or `None` if it is not present.
    ///
    /// With duplicate keys, the rank of the first of them is returned, so
    /// `select(rank_of(k))` has key `k`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let tree = Bst::from([(10, "a"), (20, "b")]);
    /// assert_eq!(tree.rank_of(&10), Some(1));
    /// assert_eq!(tree.rank_of(&20), Some(2));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }
}

/// Indexes into the tree by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is out of range.
///
/// # Examples
///
/// ```
/// use randbst::{Bst, Rank};
///
/// let tree = Bst::from([("a", 1), ("b", 2)]);
/// assert_eq!(tree[Rank(1)], 1);
/// ```
impl<K, V, R> Index<Rank> for Bst<K, V, R> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select(rank.0).1
    }
}

/// Mutably indexes into the tree by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is out of range.
///
/// # Examples
///
/// ```
/// use randbst::{Bst, Rank};
///
/// let mut tree = Bst::from([("a", 1), ("b", 2)]);
/// tree[Rank(2)] = 5;
/// assert_eq!(tree.get(&"b"), Some(&5));
/// ```
impl<K, V, R> IndexMut<Rank> for Bst<K, V, R> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        let len = self.len();
        match self.get_by_rank_mut(rank.0) {
            Some((_, value)) => value,
            None => panic!("`Bst::index_mut()` - `rank` {} is out of range for a tree of length {len}!", rank.0),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::vec::Vec;

    use super::*;

    #[test]
    fn select_and_rank_of_are_inverse() {
        let tree: Bst<i32, ()> = [5, 1, 4, 2, 3].into_iter().map(|k| (k, ())).collect();
        for rank in 1..=tree.len() {
            let (key, ()) = tree.select(rank);
            assert_eq!(tree.rank_of(key), Some(rank));
        }
    }

    #[test]
    fn rank_of_duplicates_is_first_position() {
        let mut tree = Bst::new();
        for key in [2, 7, 7, 7, 9] {
            tree.insert(key, ());
        }
        assert_eq!(tree.rank_of(&7), Some(2));
        assert_eq!(tree.select(2).0, &7);
        assert_eq!(tree.select(4).0, &7);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn select_zero_panics() {
        let tree = Bst::from([(1, ())]);
        let _ = tree.select(0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn select_past_len_panics() {
        let tree = Bst::from([(1, ()), (2, ())]);
        let _ = tree.select(3);
    }

    #[test]
    fn pred_and_succ_on_exact_and_missing_keys() {
        let tree = Bst::from([(10, 'a'), (20, 'b'), (30, 'c')]);
        let pred: Vec<_> = [5, 10, 15, 35].iter().map(|k| tree.pred(k).map(|(k, _)| *k)).collect();
        let succ: Vec<_> = [5, 10, 15, 35].iter().map(|k| tree.succ(k).map(|(k, _)| *k)).collect();
        assert_eq!(pred, [None, Some(10), Some(10), Some(30)]);
        assert_eq!(succ, [Some(10), Some(10), Some(20), None]);
    }

    #[test]
    fn index_mut_by_rank_updates_value() {
        let mut tree = Bst::from([(3, 0), (1, 0), (2, 0)]);
        tree[Rank(3)] = 30;
        assert_eq!(tree.get(&3), Some(&30));
    }
}
