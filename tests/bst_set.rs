use std::collections::BTreeSet;

use proptest::prelude::*;

use plain_bst::BstSet;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates values in a range narrow enough to force collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -500i64..500i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    Get(i64),
    Find(i64),
    First,
    Last,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        2 => value_strategy().prop_map(SetOp::Get),
        2 => value_strategy().prop_map(SetOp::Find),
        1 => Just(SetOp::First),
        1 => Just(SetOp::Last),
    ]
}

// ─── Randomized comparison against BTreeSet ──────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays a random sequence of operations on both BstSet and BTreeSet
    /// and asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut bst: BstSet<i64> = BstSet::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(bst.insert(*v), model.insert(*v), "insert({})", v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(bst.remove(v), model.remove(v), "remove({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(bst.contains(v), model.contains(v), "contains({})", v);
                }
                SetOp::Get(v) => {
                    prop_assert_eq!(bst.get(v), model.get(v), "get({})", v);
                }
                SetOp::Find(v) => {
                    prop_assert_eq!(bst.find(v), model.range(*v..).next(), "find({})", v);
                }
                SetOp::First => {
                    prop_assert_eq!(bst.first(), model.first(), "first()");
                }
                SetOp::Last => {
                    prop_assert_eq!(bst.last(), model.last(), "last()");
                }
            }
            prop_assert_eq!(bst.len(), model.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(bst.is_empty(), model.is_empty(), "is_empty mismatch after {:?}", op);
        }
    }

    /// After any insertion sequence, in-order iteration yields the keys in
    /// strictly ascending order and visits exactly `len()` of them.
    #[test]
    fn inorder_iteration_is_sorted(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let bst: BstSet<i64> = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.iter().copied().collect();

        let items: Vec<_> = bst.iter().copied().collect();
        prop_assert_eq!(items.len(), bst.len());
        prop_assert!(items.windows(2).all(|w| w[0] < w[1]), "iter() not strictly ascending");

        let expected: Vec<_> = model.iter().copied().collect();
        prop_assert_eq!(&items, &expected, "iter() mismatch");

        let owned: Vec<_> = bst.clone().into_iter().collect();
        prop_assert_eq!(&owned, &expected, "into_iter() mismatch");
    }

    /// Every traversal order visits each key exactly once, regardless of
    /// tree shape.
    #[test]
    fn traversals_are_permutations(values in proptest::collection::vec(value_strategy(), 0..200)) {
        let bst: BstSet<i64> = values.iter().copied().collect();

        let mut pre: Vec<_> = bst.preorder().copied().collect();
        let mut post: Vec<_> = bst.postorder().copied().collect();
        let inorder: Vec<_> = bst.iter().copied().collect();

        pre.sort_unstable();
        post.sort_unstable();
        prop_assert_eq!(&pre, &inorder, "preorder is not a permutation of the key set");
        prop_assert_eq!(&post, &inorder, "postorder is not a permutation of the key set");
    }

    /// Interleaved adds and removes keep size consistent with the number of
    /// successful operations.
    #[test]
    fn size_tracks_successful_ops(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut bst: BstSet<i64> = BstSet::new();
        let mut balance: usize = 0;

        for op in &ops {
            match op {
                SetOp::Insert(v) => balance += usize::from(bst.insert(*v)),
                SetOp::Remove(v) => balance -= usize::from(bst.remove(v)),
                _ => {}
            }
            prop_assert_eq!(bst.len(), balance);
            prop_assert_eq!(bst.iter().count(), balance);
        }
    }
}

// ─── Deterministic cases ─────────────────────────────────────────────────────

mod deterministic {
    use super::BstSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn successor_lookup() {
        let set = BstSet::from([10, 20, 30]);
        assert_eq!(set.find(&15), Some(&20));
        assert_eq!(set.find(&30), Some(&30));
        assert_eq!(set.find(&31), None);
        assert_eq!(set.find(&5), Some(&10));
    }

    #[test]
    fn two_child_removal_preserves_order() {
        let mut set = BstSet::from([5, 3, 8, 1, 4, 7, 9]);

        // 5 sits at the root with two children.
        assert!(set.remove(&5));
        assert_eq!(set.len(), 6);
        let items: Vec<_> = set.iter().copied().collect();
        assert_eq!(items, [1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn add_find_remove_round_trip() {
        let mut set = BstSet::new();
        assert!(set.insert(42));
        assert_eq!(set.get(&42), Some(&42));
        assert!(set.remove(&42));
        assert_eq!(set.get(&42), None);
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut set = BstSet::new();
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_set_queries() {
        let set: BstSet<i32> = BstSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(!set.contains(&1));
        assert_eq!(set.get(&1), None);
        assert_eq!(set.find(&1), None);
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn removing_absent_keys_changes_nothing() {
        let mut set = BstSet::from([1, 2, 3]);
        assert!(!set.remove(&4));
        assert!(!set.remove(&4));
        assert_eq!(set.len(), 3);
        let items: Vec<_> = set.iter().copied().collect();
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn construction_skips_duplicates() {
        let set: BstSet<i32> = [3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(set.len(), 3);
        let items: Vec<_> = set.iter().copied().collect();
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn set_comparisons() {
        let a = BstSet::from([1, 2, 3]);
        // Different insertion order, different shape, same set.
        let b = BstSet::from([3, 2, 1]);
        let c = BstSet::from([1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }

    #[test]
    fn debug_output_is_sorted() {
        let set = BstSet::from([2, 1, 3]);
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }
}
