use core::borrow::Borrow;

use smallvec::SmallVec;

use super::node::{Link, Node, Side, size_of};
use super::raw_bst::{Path, RawBst, descend};
use crate::random::RandomSource;

/// Which half of a split receives keys equal to the pivot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ties {
    Left,
    Right,
}

/// Merges two detached subtrees.
///
/// Every key under `left` must be strictly less than every key under
/// `right`. This is not checked; violating it breaks the ordering of the
/// result.
///
/// The larger side keeps its root at each step and the descent continues
/// into its child facing the smaller side. Only nodes on that descent are
/// touched, and their final sizes are known on the way down.
pub(crate) fn join_links<K, V>(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
    let (mut left, mut right) = (left, right);
    let mut joined = None;
    let mut tail = &mut joined;

    loop {
        match (left, right) {
            (None, rest) | (rest, None) => {
                *tail = rest;
                break;
            }
            (Some(mut l), Some(mut r)) => {
                if l.size >= r.size {
                    // All of `r` ends up below `l`.
                    l.size += r.size;
                    left = l.right.take();
                    right = Some(r);
                    tail = &mut tail.insert(l).right;
                } else {
                    r.size += l.size;
                    right = r.left.take();
                    left = Some(l);
                    tail = &mut tail.insert(r).left;
                }
            }
        }
    }

    joined
}

/// Partitions a detached subtree around `pivot`.
///
/// With [`Ties::Left`] the halves hold keys `<= pivot` and `> pivot`; with
/// [`Ties::Right`] they hold `< pivot` and `>= pivot`. Works top-down,
/// appending each visited node to the spine of the half it belongs to, then
/// walks both spines once more to fix their sizes.
pub(crate) fn split_links<K, V, Q>(root: Link<K, V>, pivot: &Q, ties: Ties) -> (Link<K, V>, Link<K, V>)
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    let (mut left, mut right) = (None, None);
    // Per spine node: itself plus the subtree it took along.
    let (mut left_kept, mut right_kept): (SmallVec<[usize; 32]>, SmallVec<[usize; 32]>) = (SmallVec::new(), SmallVec::new());

    {
        let (mut left_tail, mut right_tail) = (&mut left, &mut right);
        let mut current = root;

        while let Some(mut node) = current {
            let key: &Q = node.key().borrow();
            let goes_left = match ties {
                Ties::Left => key <= pivot,
                Ties::Right => key < pivot,
            };

            if goes_left {
                // Its left subtree comes along; its right subtree is split next.
                current = node.right.take();
                left_kept.push(size_of(&node.left) + 1);
                left_tail = &mut left_tail.insert(node).right;
            } else {
                current = node.left.take();
                right_kept.push(size_of(&node.right) + 1);
                right_tail = &mut right_tail.insert(node).left;
            }
        }
    }

    restore_spine_sizes(&mut left, &left_kept, Side::Right);
    restore_spine_sizes(&mut right, &right_kept, Side::Left);
    (left, right)
}

/// Rewrites the sizes down a spine built by [`split_links`].
///
/// A spine node's subtree is what it kept plus everything kept below it.
fn restore_spine_sizes<K, V>(link: &mut Link<K, V>, kept: &[usize], side: Side) {
    let mut remaining: usize = kept.iter().sum();
    let mut slot = link;
    for &size in kept {
        let Some(node) = slot.as_deref_mut() else { break };
        node.size = remaining;
        remaining -= size;
        slot = node.child_mut(side);
    }
}

impl<K, V> RawBst<K, V> {
    /// Appends `other`, whose keys must all be greater than this tree's.
    pub(crate) fn join(&mut self, mut other: Self) {
        self.root = join_links(self.root.take(), other.root.take());
    }
}

impl<K: Ord, V> RawBst<K, V> {
    /// Splits the whole tree into keys `<= pivot` and keys `> pivot`.
    ///
    /// Both halves reuse the existing nodes.
    pub(crate) fn split<Q>(mut self, pivot: &Q) -> (Self, Self)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (left, right) = split_links(self.root.take(), pivot, Ties::Left);
        (Self { root: left }, Self { root: right })
    }

    /// Inserts with the randomized root-insertion rule.
    ///
    /// At each subtree of size `s` on the search path the new node becomes
    /// that subtree's root with probability `1 / (s + 1)`.
    pub(crate) fn balanced_insert<R>(&mut self, key: K, value: V, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        let mut path = Path::new();
        let mut current = self.root();
        while let Some(node) = current {
            if rng.below(node.size() + 1) == 0 {
                break;
            }
            let side = if key < *node.key() { Side::Left } else { Side::Right };
            path.push(side);
            current = node.child(side).as_deref();
        }

        let slot = descend(&mut self.root, path, |node| node.size += 1);
        // Equal keys go right so the new node keeps strictly smaller keys on its left.
        let (left, right) = split_links(slot.take(), &key, Ties::Right);
        let mut node = Node::leaf(key, value);
        node.left = left;
        node.right = right;
        node.update_size();
        *slot = Some(node);
    }

    /// Removes the first matching node on the search path, replacing it with
    /// the join of its subtrees.
    pub(crate) fn balanced_delete<Q, F>(&mut self, key: &Q, accept: F) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: FnMut(&V) -> bool,
    {
        let path = self.locate(key, accept)?;
        let slot = descend(&mut self.root, path, |node| node.size -= 1);
        let mut node = slot.take()?;
        *slot = join_links(node.left.take(), node.right.take());
        Some(node.into_entry())
    }
}
