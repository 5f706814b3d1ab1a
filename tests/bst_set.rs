use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use randbst::BstSet;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn value_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    BalancedInsert(i64),
    Delete(i64),
    BalancedDelete(i64),
    Contains(i64),
    Pred(i64),
    Succ(i64),
    Min,
    Max,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        3 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::BalancedInsert),
        2 => value_strategy().prop_map(SetOp::Delete),
        2 => value_strategy().prop_map(SetOp::BalancedDelete),
        1 => value_strategy().prop_map(SetOp::Contains),
        1 => value_strategy().prop_map(SetOp::Pred),
        1 => value_strategy().prop_map(SetOp::Succ),
        1 => Just(SetOp::Min),
        1 => Just(SetOp::Max),
    ]
}

/// Removes one copy of `value` from a multiset of counts.
fn take(model: &mut BTreeMap<i64, usize>, value: i64) -> Option<i64> {
    let count = model.get_mut(&value)?;
    *count -= 1;
    if *count == 0 {
        model.remove(&value);
    }
    Some(value)
}

fn expand(model: &BTreeMap<i64, usize>) -> Vec<i64> {
    model.iter().flat_map(|(&value, &n)| std::iter::repeat_n(value, n)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays random operations on a `BstSet` and a counted `BTreeMap`.
    #[test]
    fn set_ops_match_multiset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set = BstSet::new();
        let mut model: BTreeMap<i64, usize> = BTreeMap::new();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    set.insert(v);
                    *model.entry(v).or_default() += 1;
                }
                SetOp::BalancedInsert(v) => {
                    set.balanced_insert(v);
                    *model.entry(v).or_default() += 1;
                }
                SetOp::Delete(v) => {
                    prop_assert_eq!(set.delete(&v), take(&mut model, v), "delete({})", v);
                }
                SetOp::BalancedDelete(v) => {
                    prop_assert_eq!(set.balanced_delete(&v), take(&mut model, v), "balanced_delete({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(set.contains(&v), model.contains_key(&v), "contains({})", v);
                }
                SetOp::Pred(v) => {
                    prop_assert_eq!(set.pred(&v), model.range(..=v).next_back().map(|(v, _)| v), "pred({})", v);
                }
                SetOp::Succ(v) => {
                    prop_assert_eq!(set.succ(&v), model.range(v..).next().map(|(v, _)| v), "succ({})", v);
                }
                SetOp::Min => prop_assert_eq!(set.min(), model.keys().next()),
                SetOp::Max => prop_assert_eq!(set.max(), model.keys().next_back()),
            }
            prop_assert_eq!(set.len(), model.values().sum::<usize>(), "len mismatch after {:?}", op);
        }

        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), expand(&model));
    }

    #[test]
    fn ranks_match_sorted_vec(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let set: BstSet<i64> = values.iter().copied().collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();

        for (index, value) in sorted.iter().enumerate() {
            prop_assert_eq!(set.select(index + 1), value);
            prop_assert_eq!(set.get_by_rank(index + 1), Some(value));
        }
        prop_assert_eq!(set.get_by_rank(sorted.len() + 1), None);

        let middle = sorted[sorted.len() / 2];
        let first = sorted.partition_point(|&v| v < middle);
        prop_assert_eq!(set.rank_of(&middle), Some(first + 1));
    }

    #[test]
    fn split_join_round_trip(
        values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE),
        pivot in value_strategy(),
    ) {
        let set: BstSet<i64> = values.iter().copied().collect();
        let before: Vec<i64> = set.iter().copied().collect();

        let (mut low, high) = set.split(&pivot);
        prop_assert!(low.iter().all(|&v| v <= pivot));
        prop_assert!(high.iter().all(|&v| v > pivot));
        low.join(high);
        prop_assert_eq!(low.into_iter().collect::<Vec<_>>(), before);
    }
}

#[test]
fn duplicates_count_toward_len() {
    let mut set = BstSet::new();
    set.insert("b");
    set.insert("a");
    set.insert("b");
    assert_eq!(set.len(), 3);
    assert_eq!(set.rank_of("b"), Some(2));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "b", "b"]);
}

#[test]
fn clear_and_reuse() {
    let mut set: BstSet<u32> = (0..100).collect();
    assert!(set.height() >= 7);
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.min(), None);
    set.balanced_insert(42);
    assert_eq!(set.get(&42), Some(&42));
}

#[test]
fn debug_lists_items_in_order() {
    let set = BstSet::from([3, 1, 2]);
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    assert_eq!(format!("{:?}", set.into_iter()), "[1, 2, 3]");
}
