use rand::{Rng, RngCore, SeedableRng};

/// The random number generator used when none is supplied.
pub type DefaultRng = rand::rngs::SmallRng;

/// Seed for [`DefaultRng`] in [`Bst::new`](crate::Bst::new).
///
/// The crate is `no_std` and has no entropy source of its own, so trees
/// built with `new` make the same random choices on every run. Use
/// [`Bst::with_seed`](crate::Bst::with_seed) or
/// [`Bst::with_rng`](crate::Bst::with_rng) to vary them.
pub const DEFAULT_SEED: u64 = 0x5EED_0B57_C0FF_EE42;

/// A source of randomness for the balanced operations.
///
/// Every generator implementing [`RngCore`] and [`SeedableRng`] is a
/// `RandomSource`. Implement it directly to script the choices, e.g. in
/// tests.
///
/// # Examples
///
/// ```
/// use randbst::{Bst, RandomSource};
///
/// /// Always promotes the new key to the root of the whole tree.
/// struct RootInsertion;
///
/// impl RandomSource for RootInsertion {
///     fn below(&mut self, _bound: usize) -> usize {
///         0
///     }
///
///     fn fork(&mut self) -> Self {
///         RootInsertion
///     }
/// }
///
/// let mut tree = Bst::with_rng(RootInsertion);
/// for key in 1..=5 {
///     tree.balanced_insert(key, ());
/// }
/// // Sorted root insertion builds a left spine.
/// assert_eq!(tree.height(), 5);
/// ```
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `0..bound`.
    ///
    /// `bound` is always at least one.
    fn below(&mut self, bound: usize) -> usize;

    /// Returns an independent source, used by the second half of a split.
    #[must_use]
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

impl<R: RngCore + SeedableRng> RandomSource for R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn fork(&mut self) -> Self {
        Self::seed_from_u64(self.next_u64())
    }
}

pub(crate) fn default_rng() -> DefaultRng {
    DefaultRng::seed_from_u64(DEFAULT_SEED)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn below_one_is_always_zero() {
        let mut rng = default_rng();
        for _ in 0..100 {
            assert_eq!(rng.below(1), 0);
        }
    }

    #[test]
    fn below_stays_in_bounds_and_covers_them() {
        let mut rng = default_rng();
        let mut seen = [false; 7];
        for _ in 0..1_000 {
            let draw = rng.below(7);
            assert!(draw < 7);
            seen[draw] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn forked_source_diverges_from_parent() {
        let mut parent = default_rng();
        let mut child = parent.fork();
        let a: [u64; 4] = core::array::from_fn(|_| parent.next_u64());
        let b: [u64; 4] = core::array::from_fn(|_| child.next_u64());
        assert_ne!(a, b);
    }

    #[test]
    fn default_rng_is_reproducible() {
        let mut a = default_rng();
        let mut b = default_rng();
        assert_eq!(a.below(1_000_000), b.below(1_000_000));
    }
}
