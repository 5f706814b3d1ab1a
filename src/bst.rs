use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use smallvec::SmallVec;

use crate::random::{self, DefaultRng, RandomSource};
use crate::raw::{Node, RawBst};

mod order_statistic;

/// An ordered map based on a size-augmented [binary search tree].
///
/// Keys must implement [`Ord`]. Duplicate keys are allowed: inserting an
/// existing key adds another entry rather than replacing the value. Keys
/// smaller than a node's key live in its left subtree, keys greater than or
/// equal to it in its right subtree.
///
/// Two families of mutating operations share the same tree:
///
/// - [`insert`](Bst::insert) and [`delete`](Bst::delete) never restructure the
///   tree. Their cost is O(height) and the height depends on the insertion
///   order; sorted input produces a list.
/// - [`balanced_insert`](Bst::balanced_insert) and
///   [`balanced_delete`](Bst::balanced_delete) use the tree's random source
///   so that the shape is that of a uniformly random BST, with expected
///   O(log n) height, whatever the input order.
///
/// The random source is the `R` parameter. [`Bst::new`] uses [`DefaultRng`]
/// with a fixed seed; use [`Bst::with_seed`] or [`Bst::with_rng`] to choose
/// another.
///
/// It is a logic error for a key to be modified in such a way that the key's
/// ordering relative to any other key, as determined by the [`Ord`] trait,
/// changes while it is in the tree. The same holds for [`join`](Bst::join)
/// with overlapping key ranges. The behavior resulting from such a logic
/// error is not specified, but will be encapsulated to the `Bst` that
/// observed it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use randbst::Bst;
///
/// let mut tree = Bst::new();
/// for key in [50, 20, 80, 10, 30] {
///     tree.balanced_insert(key, key * 2);
/// }
///
/// assert_eq!(tree.find(&30), Some((&30, &60)));
/// assert_eq!(tree.min(), Some((&10, &20)));
/// assert_eq!(tree.max(), Some((&80, &160)));
///
/// tree.balanced_delete(&20);
/// let keys: Vec<_> = tree.keys().copied().collect();
/// assert_eq!(keys, [10, 30, 50, 80]);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
pub struct Bst<K, V, R = DefaultRng> {
    raw: RawBst<K, V>,
    rng: R,
}

/// An iterator over the entries of a `Bst`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`Bst`].
///
/// [`iter`]: Bst::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    // Nodes whose left subtree is done but which are not yet yielded.
    stack: SmallVec<[&'a Node<K, V>; 32]>,
    remaining: usize,
}

/// An owning iterator over the entries of a `Bst`, in ascending key order.
///
/// This `struct` is created by the [`into_iter`] method on [`Bst`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `Bst`.
///
/// This `struct` is created by the [`keys`] method on [`Bst`].
///
/// [`keys`]: Bst::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `Bst`.
///
/// This `struct` is created by the [`values`] method on [`Bst`].
///
/// [`values`]: Bst::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Bst<K, V> {
    /// Makes a new, empty `Bst` using [`DefaultRng`] seeded with
    /// [`DEFAULT_SEED`](crate::DEFAULT_SEED).
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1, "a");
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(random::default_rng())
    }

    /// Makes a new, empty `Bst` whose balanced operations draw from
    /// [`DefaultRng`] seeded with `seed`.
    ///
    /// Trees built with the same seed and the same operations have the same
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut a = Bst::with_seed(7);
    /// let mut b = Bst::with_seed(7);
    /// for key in 0..100 {
    ///     a.balanced_insert(key, ());
    ///     b.balanced_insert(key, ());
    /// }
    /// assert_eq!(a.height(), b.height());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;

        Self::with_rng(DefaultRng::seed_from_u64(seed))
    }
}

impl<K, V, R> Bst<K, V, R> {
    /// Makes a new, empty `Bst` drawing randomness from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use randbst::Bst;
    ///
    /// let mut tree: Bst<u32, &str, StdRng> = Bst::with_rng(StdRng::seed_from_u64(42));
    /// tree.balanced_insert(3, "three");
    /// assert_eq!(tree.get(&3), Some(&"three"));
    /// ```
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Bst { raw: RawBst::new(), rng }
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root down to
    /// a leaf, or zero for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut list = Bst::new();
    /// for key in 0..64 {
    ///     list.insert(key, ());
    /// }
    /// assert_eq!(list.height(), 64);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Removes every entry.
    ///
    /// Entries are dropped in postorder, children before their parent, using
    /// an explicit work list rather than recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1, "a");
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the entry with the smallest key, or `None` if the tree is
    /// empty. Any one of several equal smallest keys may be returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// assert_eq!(tree.min(), None);
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// assert_eq!(tree.min(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.raw.min().map(Node::key_value)
    }

    /// Returns the entry with the largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.raw.max().map(Node::key_value)
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// Entries with equal keys come out in tree order.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let tree = Bst::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let entries: Vec<_> = tree.iter().collect();
    /// assert_eq!(entries, [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.raw)
    }

    /// Returns the lazy inorder traversal of the tree.
    ///
    /// The same sequence as [`iter`](Bst::iter); each call starts a fresh
    /// traversal.
    pub fn inorder(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Gets an iterator over the keys of the tree, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the tree, in order by key.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V, R> Bst<K, V, R> {
    /// Returns the entry for `key`, or `None` if no entry has that key.
    ///
    /// When several entries share the key, any one of them may be returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(150, "x");
    /// assert_eq!(tree.find(&150), Some((&150, &"x")));
    /// assert_eq!(tree.find(&151), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn find<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find(key).map(Node::key_value)
    }

    /// Returns a reference to the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1, "a");
    /// if let Some(value) = tree.get_mut(&1) {
    ///     *value = "b";
    /// }
    /// assert_eq!(tree[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find_mut(key).map(|node| node.key_value_mut().1)
    }

    /// Returns `true` if the tree has an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find(key).is_some()
    }

    /// Inserts an entry as a new leaf, without rebalancing.
    ///
    /// An entry with an equal key is kept; the new one goes to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1, "a");
    /// tree.insert(1, "b");
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height), which is O(n) for sorted input.
    pub fn insert(&mut self, key: K, value: V) {
        self.raw.insert(key, value);
    }

    /// Removes one entry with key `key`, without rebalancing, and returns it.
    ///
    /// Returns `None` and leaves the tree untouched if there is no such
    /// entry. A node with two children is replaced by its in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::from([(1, "a"), (2, "b")]);
    /// assert_eq!(tree.delete(&1), Some((1, "a")));
    /// assert_eq!(tree.delete(&1), None);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.delete(key, |_| true)
    }

    /// Removes one entry whose key is `key` and whose value equals `value`,
    /// without rebalancing.
    ///
    /// Entries with the same key but a different value are left alone. If
    /// several entries match, any one of them is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(7, "x");
    /// tree.insert(7, "y");
    /// assert_eq!(tree.delete_entry(&7, &"y"), Some((7, "y")));
    /// assert_eq!(tree.delete_entry(&7, &"z"), None);
    /// assert_eq!(tree.get(&7), Some(&"x"));
    /// ```
    pub fn delete_entry<Q>(&mut self, key: &Q, value: &V) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        V: PartialEq,
    {
        self.raw.delete(key, |stored| stored == value)
    }

    /// Removes one entry with key `key` by replacing its node with the join
    /// of the node's two subtrees, and returns it.
    ///
    /// The first match on the search path is removed. Returns `None` and
    /// leaves the tree untouched if there is no such entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree: Bst<_, _> = (0..100).map(|key| (key, key)).collect();
    /// assert_eq!(tree.balanced_delete(&40), Some((40, 40)));
    /// assert!(!tree.contains_key(&40));
    /// assert_eq!(tree.len(), 99);
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n) on a randomly built tree.
    pub fn balanced_delete<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.balanced_delete(key, |_| true)
    }

    /// Like [`balanced_delete`](Bst::balanced_delete), but only removes an
    /// entry whose value equals `value`.
    pub fn balanced_delete_entry<Q>(&mut self, key: &Q, value: &V) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        V: PartialEq,
    {
        self.raw.balanced_delete(key, |stored| stored == value)
    }

    /// Moves all entries of `other` into `self`, leaving nothing behind.
    ///
    /// Every key in `self` must be strictly less than every key in `other`.
    /// This is not checked: joining overlapping trees is a logic error that
    /// breaks the ordering of the result.
    ///
    /// No entry is copied: the larger root stays on top at each level and
    /// the descent continues into the smaller side, relinking subtrees as it
    /// goes. `other`'s random source is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut low = Bst::from([(1, 'a'), (2, 'b')]);
    /// let high = Bst::from([(3, 'c'), (4, 'd')]);
    /// low.join(high);
    ///
    /// let keys: Vec<_> = low.keys().copied().collect();
    /// assert_eq!(keys, [1, 2, 3, 4]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height(self) + height(other)), expected O(log n + log m) for randomly
    /// built trees.
    pub fn join<S>(&mut self, other: Bst<K, V, S>) {
        self.raw.join(other.raw);
    }
}

impl<K: Ord, V, R: RandomSource> Bst<K, V, R> {
    /// Inserts an entry using randomized root insertion.
    ///
    /// At each subtree of size `s` on the way down, the new entry becomes
    /// the root of that subtree with probability `1 / (s + 1)`: the subtree
    /// is split around the key and the halves hang below the new node. The
    /// resulting shape is that of a uniformly random BST over the keys,
    /// whatever order they arrive in.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// for key in 0..1_000 {
    ///     tree.balanced_insert(key, ());
    /// }
    /// assert!(tree.height() < 100);
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n).
    pub fn balanced_insert(&mut self, key: K, value: V) {
        self.raw.balanced_insert(key, value, &mut self.rng);
    }

    /// Splits the tree into the entries with keys `<= key` and those with
    /// keys `> key`.
    ///
    /// Consumes the tree. Both halves reuse its nodes, relinked along the
    /// search path for `key`. The left half keeps this tree's random source
    /// and the right half gets a [forked](RandomSource::fork) one.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let tree: Bst<_, _> = (1..=10).map(|key| (key, ())).collect();
    /// let (mut left, right) = tree.split(&5);
    ///
    /// assert_eq!(left.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    /// assert_eq!(right.keys().copied().collect::<Vec<_>>(), [6, 7, 8, 9, 10]);
    ///
    /// left.join(right);
    /// assert_eq!(left.len(), 10);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn split<Q>(mut self, key: &Q) -> (Self, Self)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let forked = self.rng.fork();
        let (left, right) = self.raw.split(key);
        (Bst { raw: left, rng: self.rng }, Bst { raw: right, rng: forked })
    }
}

impl<K: Clone, V: Clone, R: Clone> Clone for Bst<K, V, R> {
    fn clone(&self) -> Self {
        Bst {
            raw: self.raw.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, R> fmt::Debug for Bst<K, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for Bst<K, V> {
    /// Creates an empty `Bst`.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq, R, S> PartialEq<Bst<K, V, S>> for Bst<K, V, R> {
    /// Trees are equal when their inorder entry sequences are, whatever
    /// their shapes.
    fn eq(&self, other: &Bst<K, V, S>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, R> Eq for Bst<K, V, R> {}

impl<K: Ord, V> FromIterator<(K, V)> for Bst<K, V> {
    /// Builds a tree with [`balanced_insert`](Bst::balanced_insert).
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = Bst::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V, R: RandomSource> Extend<(K, V)> for Bst<K, V, R> {
    /// Adds every entry with [`balanced_insert`](Bst::balanced_insert).
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.balanced_insert(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for Bst<K, V> {
    /// Converts a `[(K, V); N]` into a `Bst<K, V>`.
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let tree1 = Bst::from([(1, 2), (3, 4)]);
    /// let tree2: Bst<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(tree1, tree2);
    /// ```
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, Q, V, R> Index<&Q> for Bst<K, V, R>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value for the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the tree.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, R> IntoIterator for &'a Bst<K, V, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, R> IntoIterator for Bst<K, V, R> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use randbst::Bst;
    ///
    /// let tree = Bst::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let entries: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(raw: &'a RawBst<K, V>) -> Self {
        let mut iter = Iter {
            stack: SmallVec::new(),
            remaining: raw.len(),
        };
        iter.descend_left(raw.root());
        iter
    }

    fn descend_left(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right());
        self.remaining -= 1;
        Some(node.key_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn as_slice(&self) -> &[(K, V)] {
        self.inner.as_slice()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
