use std::collections::BTreeMap;

use mapkit::{BinaryTreeMap, Collection, Map};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn key_strategy() -> impl Strategy<Value = i64> {
    // Small enough to make repeated keys common.
    -500i64..500i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Put(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    First,
    Last,
    PopFirst,
    PopLast,
    RotateLeft,
    RotateRight,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (key_strategy(), any::<i64>()).prop_map(|(k, v)| MapOp::Put(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => Just(MapOp::First),
        1 => Just(MapOp::Last),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
        1 => Just(MapOp::RotateLeft),
        1 => Just(MapOp::RotateRight),
    ]
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays random operations on both maps and compares every result. Rotations only
    /// reshape the tree, so the model ignores them.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut tree: BinaryTreeMap<i64, i64> = BinaryTreeMap::new();
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Put(k, v) => prop_assert_eq!(tree.put(*k, *v), model.insert(*k, *v), "put({}, {})", k, v),
                MapOp::Remove(k) => prop_assert_eq!(tree.remove(k), model.remove(k).is_some(), "remove({})", k),
                MapOp::Get(k) => prop_assert_eq!(tree.get(k), model.get(k), "get({})", k),
                MapOp::ContainsKey(k) => prop_assert_eq!(tree.contains_key(k), model.contains_key(k)),
                MapOp::First => prop_assert_eq!(tree.first(), model.first_key_value()),
                MapOp::Last => prop_assert_eq!(tree.last(), model.last_key_value()),
                MapOp::PopFirst => prop_assert_eq!(tree.pop_first(), model.pop_first()),
                MapOp::PopLast => prop_assert_eq!(tree.pop_last(), model.pop_last()),
                MapOp::RotateLeft => {
                    tree.rotate_left();
                }
                MapOp::RotateRight => {
                    tree.rotate_right();
                }
            }
            prop_assert_eq!(tree.size(), model.len(), "size mismatch after {:?}", op);
            prop_assert_eq!(tree.is_empty(), model.is_empty(), "is_empty mismatch after {:?}", op);
        }

        prop_assert!(tree.iter().eq(model.iter()), "iteration order diverged");
    }

    /// Height is bounded by the entry count and never below the minimum for a binary tree.
    #[test]
    fn height_stays_within_bounds(keys in proptest::collection::vec(key_strategy(), 0..300)) {
        let tree: BinaryTreeMap<i64, ()> = keys.iter().map(|k| (*k, ())).collect();
        let n = tree.size();
        let minimum = usize::BITS as usize - n.leading_zeros() as usize;
        prop_assert!(tree.height() <= n);
        prop_assert!(tree.height() >= minimum);
    }
}

// ─── Tree shape ──────────────────────────────────────────────────────────────

#[test]
fn ascending_inserts_degenerate_into_a_list() {
    let tree: BinaryTreeMap<u32, ()> = (0..64).map(|k| (k, ())).collect();
    assert_eq!(tree.height(), 64);
    assert_eq!(tree.keys().len(), 64);
}

#[test]
fn display_renders_the_shape() {
    let tree = BinaryTreeMap::from([(4, 'd'), (2, 'b'), (6, 'f'), (5, 'e')]);
    assert_eq!(tree.to_string(), "(() - 2 - ()) - 4 - ((() - 5 - ()) - 6 - ())");
    assert_eq!(tree.formatted(), tree.to_string());
    assert_eq!(BinaryTreeMap::<i32, i32>::new().to_string(), "");
}

#[test]
fn display_renders_a_deep_degenerate_tree() {
    const DEPTH: u32 = 100_000;

    // Each new maximum lands as the root's right child and is rotated up, so the tree grows
    // into a left-leaning list in linear time.
    let mut tree = BinaryTreeMap::new();
    for key in 0..DEPTH {
        tree.put(key, ());
        tree.rotate_left();
    }
    assert_eq!(tree.height(), DEPTH as usize);

    let rendered = tree.formatted();
    let opening = "(".repeat(DEPTH as usize - 1) + "() - 0 - ()) - 1 - ()";
    assert!(rendered.starts_with(&opening));
    assert!(rendered.ends_with(&format!(") - {} - ()", DEPTH - 1)));
    assert_eq!(rendered.matches('(').count(), 2 * DEPTH as usize);
    assert_eq!(rendered.matches(')').count(), 2 * DEPTH as usize);
}

#[test]
fn removing_a_two_child_node_keeps_order() {
    let mut tree = BinaryTreeMap::new();
    for key in [50, 30, 70, 20, 40, 60, 80, 65] {
        tree.put(key, key * 10);
    }

    assert_eq!(tree.remove_entry(&50), Some((50, 500)));
    assert_eq!(tree.keys(), [&20, &30, &40, &60, &65, &70, &80]);
    assert_eq!(tree.get(&60), Some(&600));
    assert_eq!(tree.get(&65), Some(&650));
    assert!(!tree.contains_key(&50));
}

#[test]
fn rotations_preserve_contents() {
    let mut tree = BinaryTreeMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
    let before: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();

    assert!(tree.rotate_right());
    assert_eq!(tree.to_string(), "() - 1 - (() - 2 - (() - 3 - ()))");
    assert!(!tree.rotate_right());
    assert!(tree.rotate_left());
    assert!(tree.rotate_left());
    assert_eq!(tree.first(), Some((&1, &'a')));

    let after: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(before, after);
}

#[test]
fn rotating_an_empty_tree_fails() {
    let mut tree: BinaryTreeMap<u8, u8> = BinaryTreeMap::default();
    assert!(!tree.rotate_left());
    assert!(!tree.rotate_right());
}

// ─── Comparators ─────────────────────────────────────────────────────────────

#[test]
fn floats_with_a_partial_comparator() {
    let mut tree = BinaryTreeMap::with_comparator(mapkit::comparator::compare_f64);
    for (key, name) in [(2.5, "b"), (-1.0, "a"), (10.0, "c")] {
        tree.put(key, name);
    }
    assert_eq!(tree.first(), Some((&-1.0, &"a")));
    assert_eq!(tree.last(), Some((&10.0, &"c")));
    assert_eq!(tree[&2.5], "b");
}

#[test]
fn case_insensitive_keys() {
    let mut tree = BinaryTreeMap::with_comparator(|a: &String, b: &String| {
        a.to_lowercase().cmp(&b.to_lowercase())
    });
    tree.put("Apple".to_string(), 1);
    assert_eq!(tree.put("APPLE".to_string(), 2), Some(1));
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.get_key_value(&"apple".to_string()), Some((&"Apple".to_string(), &2)));
}

// ─── Empty-map edge cases ────────────────────────────────────────────────────

#[test]
fn empty_map_edges() {
    let mut tree: BinaryTreeMap<i32, i32> = BinaryTreeMap::new();
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert!(!tree.remove(&1));
    assert!(!tree.remove_first());
    assert!(!tree.remove_last());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.iter().next(), None);
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let tree = BinaryTreeMap::from([(1, 1)]);
    let _ = tree[&2];
}

// ─── Trait impls ─────────────────────────────────────────────────────────────

#[test]
fn trait_impls() {
    let mut tree = BinaryTreeMap::from([(3, "c"), (1, "a")]);
    let copy = tree.clone();
    assert_eq!(tree, copy);
    assert_eq!(format!("{tree:?}"), r#"{1: "a", 3: "c"}"#);

    tree.extend([(2, "b")]);
    assert_ne!(tree, copy);
    if let Some(value) = tree.get_mut(&2) {
        *value = "B";
    }
    let collected: Vec<_> = (&tree).into_iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(collected, [(1, "a"), (2, "B"), (3, "c")]);

    let with_room: BinaryTreeMap<u8, u8> = BinaryTreeMap::with_capacity(16);
    assert!(with_room.capacity() >= 16);
}
