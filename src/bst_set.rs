use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::bst::{self, Bst, Keys};
use crate::random::{DefaultRng, RandomSource};

/// An ordered multiset based on [`Bst`].
///
/// See [`Bst`]'s documentation for the two balancing disciplines and the
/// cost of each operation. Equal items are kept side by side, so
/// inserting an item twice makes [`len`](BstSet::len) grow by two.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the [`Ord`]
/// trait, changes while it is in the set.
///
/// # Examples
///
/// ```
/// use randbst::BstSet;
///
/// let mut books = BstSet::new();
/// books.balanced_insert("The Odyssey");
/// books.balanced_insert("A Dance With Dragons");
/// books.balanced_insert("The Great Gatsby");
///
/// assert!(books.contains("The Odyssey"));
/// assert_eq!(books.select(1), &"A Dance With Dragons");
///
/// books.balanced_delete("The Odyssey");
/// assert_eq!(books.len(), 2);
/// ```
pub struct BstSet<T, R = DefaultRng> {
    map: Bst<T, (), R>,
}

/// An iterator over the items of a `BstSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`BstSet`].
///
/// [`iter`]: BstSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: Keys<'a, T, ()>,
}

/// An owning iterator over the items of a `BstSet`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`BstSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T> {
    inner: bst::IntoIter<T, ()>,
}

impl<T> BstSet<T> {
    /// Makes a new, empty `BstSet` using the default random source.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        BstSet { map: Bst::new() }
    }

    /// Makes a new, empty `BstSet` whose random source is seeded with `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        BstSet { map: Bst::with_seed(seed) }
    }
}

impl<T, R> BstSet<T, R> {
    /// Makes a new, empty `BstSet` drawing randomness from `rng`.
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        BstSet { map: Bst::with_rng(rng) }
    }

    /// Returns the number of items in the set, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the smallest item, or `None` if the set is empty.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.map.min().map(|(item, ())| item)
    }

    /// Returns the largest item, or `None` if the set is empty.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.map.max().map(|(item, ())| item)
    }

    /// Returns the `rank`-th smallest item (one-based).
    ///
    /// # Panics
    ///
    /// Panics if `rank` is zero or greater than [`len`](BstSet::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::BstSet;
    ///
    /// let set = BstSet::from([30, 10, 20]);
    /// assert_eq!(set.select(2), &20);
    /// ```
    #[must_use]
    pub fn select(&self, rank: usize) -> &T {
        self.map.select(rank).0
    }

    /// Returns the `rank`-th smallest item (one-based), or `None` if `rank`
    /// is out of range.
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.map.get_by_rank(rank).map(|(item, ())| item)
    }

    /// Gets an iterator that visits the items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::BstSet;
    ///
    /// let set = BstSet::from([3, 1, 2, 1]);
    /// let items: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(items, [1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }
}

impl<T: Ord, R> BstSet<T, R> {
    /// Returns `true` if the set contains an item equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to an item equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.find(value).map(|(item, ())| item)
    }

    /// Adds an item as a new leaf, without rebalancing.
    pub fn insert(&mut self, value: T) {
        self.map.insert(value, ());
    }

    /// Removes one item equal to `value`, without rebalancing, and returns
    /// it.
    pub fn delete<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.delete(value).map(|(item, ())| item)
    }

    /// Removes one item equal to `value` by joining its node's subtrees,
    /// and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::BstSet;
    ///
    /// let mut set = BstSet::from([1, 2, 2, 3]);
    /// assert_eq!(set.balanced_delete(&2), Some(2));
    /// assert_eq!(set.balanced_delete(&2), Some(2));
    /// assert_eq!(set.balanced_delete(&2), None);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn balanced_delete<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.balanced_delete(value).map(|(item, ())| item)
    }

    /// Returns the largest item less than or equal to `value`.
    pub fn pred<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.pred(value).map(|(item, ())| item)
    }

    /// Returns the smallest item greater than or equal to `value`.
    pub fn succ<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.succ(value).map(|(item, ())| item)
    }

    /// Returns the one-based rank of the first item equal to `value`.
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank_of(value)
    }

    /// Moves all items of `other` into `self`.
    ///
    /// Every item in `self` must be strictly less than every item in
    /// `other`; see [`Bst::join`].
    pub fn join<S>(&mut self, other: BstSet<T, S>) {
        self.map.join(other.map);
    }
}

impl<T: Ord, R: RandomSource> BstSet<T, R> {
    /// Adds an item using randomized root insertion.
    pub fn balanced_insert(&mut self, value: T) {
        self.map.balanced_insert(value, ());
    }

    /// Splits the set into the items `<= value` and those `> value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::BstSet;
    ///
    /// let set: BstSet<_> = (1..=6).collect();
    /// let (low, high) = set.split(&2);
    /// assert_eq!(low.iter().copied().collect::<Vec<_>>(), [1, 2]);
    /// assert_eq!(high.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn split<Q>(self, value: &Q) -> (Self, Self)
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (left, right) = self.map.split(value);
        (BstSet { map: left }, BstSet { map: right })
    }
}

impl<T: Clone, R: Clone> Clone for BstSet<T, R> {
    fn clone(&self) -> Self {
        BstSet { map: self.map.clone() }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for BstSet<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, R, S> PartialEq<BstSet<T, S>> for BstSet<T, R> {
    fn eq(&self, other: &BstSet<T, S>) -> bool {
        self.map == other.map
    }
}

impl<T: Eq, R> Eq for BstSet<T, R> {}

impl<T: Ord> FromIterator<T> for BstSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BstSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, R: RandomSource> Extend<T> for BstSet<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BstSet<T> {
    /// Converts a `[T; N]` into a `BstSet<T>`.
    ///
    /// ```
    /// use randbst::BstSet;
    ///
    /// let set1 = BstSet::from([1, 2, 3, 4]);
    /// let set2: BstSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T, R> IntoIterator for &'a BstSet<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, R> IntoIterator for BstSet<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(item, ())| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|(item, ())| item)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice().iter().map(|(item, ())| item)).finish()
    }
}
