/// A one-based rank into the sorted order of a tree or set.
///
/// `Rank(1)` is the smallest entry and `Rank(len)` the largest, matching
/// [`Bst::select`](crate::Bst::select).
///
/// # Examples
///
/// ```
/// use randbst::{Bst, Rank};
///
/// let mut tree = Bst::new();
/// tree.insert("b", 20);
/// tree.insert("a", 10);
///
/// assert_eq!(tree[Rank(1)], 10);
/// assert_eq!(tree[Rank(2)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
