//! The shared `Map` / `OrderedMap` contract, run against every backing.

use mapkit::{BinaryTreeMap, Collection, FlatMap, HashMap, Map, OrderedMap};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Clone, Copy, Debug)]
enum Backing {
    Tree,
    Hash,
    Flat,
}

/// Runs `$check` on an empty map of the requested backing.
macro_rules! on_backing {
    ($backing:expr, $check:ident $(, $arg:expr)*) => {
        match $backing {
            Backing::Tree => $check(BinaryTreeMap::new() $(, $arg)*),
            Backing::Hash => $check(HashMap::new() $(, $arg)*),
            Backing::Flat => $check(FlatMap::new() $(, $arg)*),
        }
    };
}

fn sorted_keys<M: Map<Key = i32>>(map: &M) -> Vec<i32> {
    let mut keys: Vec<_> = map.keys().into_iter().copied().collect();
    keys.sort_unstable();
    keys
}

// ─── Map ─────────────────────────────────────────────────────────────────────

fn put_then_keys<M: Map<Key = i32, Value = &'static str>>(mut map: M) {
    map.put(3, "c");
    map.put(1, "a");
    map.put(2, "b");
    assert_eq!(map.size(), 3);
    assert_eq!(sorted_keys(&map), [1, 2, 3]);
}

#[rstest]
#[case::tree(Backing::Tree)]
#[case::hash(Backing::Hash)]
#[case::flat(Backing::Flat)]
fn keys_cover_every_put(#[case] backing: Backing) {
    on_backing!(backing, put_then_keys);
}

fn overwrite<M: Map<Key = i32, Value = &'static str>>(mut map: M) {
    assert_eq!(map.put(7, "old"), None);
    assert_eq!(map.put(7, "new"), Some("old"));
    assert_eq!(map.size(), 1);
    assert_eq!(map.get(&7), Some(&"new"));
    assert_eq!(map.values(), [&"new"]);
}

#[rstest]
#[case::tree(Backing::Tree)]
#[case::hash(Backing::Hash)]
#[case::flat(Backing::Flat)]
fn put_overwrites_present_keys(#[case] backing: Backing) {
    on_backing!(backing, overwrite);
}

fn remove_round_trip<M: Map<Key = i32, Value = i32>>(mut map: M, count: i32) {
    for key in 0..count {
        map.put(key, -key);
    }
    for key in (0..count).step_by(2) {
        assert!(map.remove(&key));
        assert!(!map.remove(&key));
    }
    assert_eq!(map.size(), (count / 2) as usize);
    for key in 0..count {
        assert_eq!(map.contains_key(&key), key % 2 == 1, "key {key}");
    }
    assert_eq!(map.remove_entry(&1), Some((1, -1)));
}

#[rstest]
fn remove_leaves_the_rest(
    #[values(Backing::Tree, Backing::Hash, Backing::Flat)] backing: Backing,
    #[values(2, 10, 300)] count: i32,
) {
    on_backing!(backing, remove_round_trip, count);
}

fn empty_edges<M: Map<Key = i32, Value = i32>>(mut map: M) {
    assert!(map.is_empty());
    assert!(!map.is_not_empty());
    assert_eq!(map.get(&0), None);
    assert!(!map.contains_key(&0));
    assert!(!map.remove(&0));
    assert_eq!(map.remove_entry(&0), None);
    assert!(map.keys().is_empty());
    assert!(map.entries().is_empty());
    map.clear();
    assert_eq!(map.size(), 0);
}

#[rstest]
#[case::tree(Backing::Tree)]
#[case::hash(Backing::Hash)]
#[case::flat(Backing::Flat)]
fn empty_map_edges(#[case] backing: Backing) {
    on_backing!(backing, empty_edges);
}

fn clear_then_reuse<M: Map<Key = i32, Value = i32>>(mut map: M) {
    for key in 0..50 {
        map.put(key, key);
    }
    map.clear();
    assert!(map.is_empty());
    map.put(5, 55);
    assert_eq!(map.get(&5), Some(&55));
    assert_eq!(map.size(), 1);
}

#[rstest]
#[case::tree(Backing::Tree)]
#[case::hash(Backing::Hash)]
#[case::flat(Backing::Flat)]
fn cleared_maps_are_reusable(#[case] backing: Backing) {
    on_backing!(backing, clear_then_reuse);
}

// ─── OrderedMap ──────────────────────────────────────────────────────────────

fn first_and_last<M: OrderedMap<Key = i32, Value = char>>(mut map: M) {
    for (key, value) in [(5, 'e'), (1, 'a'), (9, 'i'), (3, 'c')] {
        map.put(key, value);
    }
    assert_eq!(map.first(), Some((&1, &'a')));
    assert_eq!(map.last(), Some((&9, &'i')));
    assert_eq!(map.keys(), [&1, &3, &5, &9]);

    assert!(map.remove_first());
    assert!(map.remove_last());
    assert_eq!(map.first(), Some((&3, &'c')));
    assert_eq!(map.last(), Some((&5, &'e')));

    assert_eq!(map.pop_first(), Some((3, 'c')));
    assert_eq!(map.pop_last(), Some((5, 'e')));
    assert!(!map.remove_first());
    assert!(!map.remove_last());
    assert_eq!(map.first(), None);
    assert_eq!(map.last(), None);
}

#[rstest]
fn ordered_backings_track_their_edges(#[values(Backing::Tree, Backing::Flat)] backing: Backing) {
    match backing {
        Backing::Tree => first_and_last(BinaryTreeMap::new()),
        Backing::Flat => first_and_last(FlatMap::new()),
        Backing::Hash => unreachable!("hash maps are unordered"),
    }
}

#[rstest]
#[case::ascending(&[1, 2, 3, 4, 5])]
#[case::descending(&[5, 4, 3, 2, 1])]
#[case::zigzag(&[3, 1, 5, 2, 4])]
fn ordered_iteration_ignores_arrival_order(#[case] arrivals: &[i32]) {
    let tree: BinaryTreeMap<i32, ()> = arrivals.iter().map(|k| (*k, ())).collect();
    let flat: FlatMap<i32, ()> = arrivals.iter().map(|k| (*k, ())).collect();
    assert_eq!(tree.keys(), [&1, &2, &3, &4, &5]);
    assert_eq!(flat.keys(), tree.keys());
}

// ─── Rendering ───────────────────────────────────────────────────────────────

#[test]
fn formatted_output_per_backing() {
    let tree = BinaryTreeMap::from([(2, "b"), (1, "a")]);
    let hash = HashMap::from([(2, "b"), (1, "a")]);
    let flat = FlatMap::from([(2, "b"), (1, "a")]);

    assert_eq!(tree.formatted(), "(() - 1 - ()) - 2 - ()");
    assert_eq!(hash.formatted(), "{1: a, 2: b}");
    assert_eq!(flat.formatted(), "{1: a, 2: b}");
}
