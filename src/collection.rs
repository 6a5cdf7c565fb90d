//! The capability contract shared by every container in the crate.
//!
//! Code that only needs "a map" can be written once against [`Map`] (or [`OrderedMap`] when it
//! needs the minimum and maximum keys) and run on any backing:
//!
//! ```
//! use mapkit::{BinaryTreeMap, FlatMap, HashMap, Map};
//!
//! fn word_lengths<M: Map<Key = &'static str, Value = usize>>(mut map: M) -> M {
//!     for word in ["tree", "hash", "flat", "tree"] {
//!         map.put(word, word.len());
//!     }
//!     map
//! }
//!
//! assert_eq!(word_lengths(BinaryTreeMap::new()).size(), 3);
//! assert_eq!(word_lengths(HashMap::new()).size(), 3);
//! assert_eq!(word_lengths(FlatMap::new()).keys(), [&"flat", &"hash", &"tree"]);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// A key paired with its value.
///
/// [`Map::entries`] hands these out by reference; the pair itself never changes shape.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Entry<K, V> {
    /// The key.
    pub key: K,
    /// The value stored under `key`.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry.
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into a `(key, value)` tuple.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Operations every container supports regardless of what it stores.
pub trait Collection {
    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if there is at least one element.
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Renders the contents for debugging. The format depends on the container and is not
    /// meant to be parsed back.
    fn formatted(&self) -> String
    where
        Self: fmt::Display,
    {
        self.to_string()
    }
}

/// A key-value map with unique keys.
pub trait Map: Collection {
    /// The key type.
    type Key;
    /// The value type.
    type Value;
    /// Borrowing iterator over the entries in the map's iteration order.
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Inserts `value` under `key`, overwriting any value already stored there.
    ///
    /// Returns the previous value, if any. Never fails.
    fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key equal to `key` together with its value.
    fn get_key_value(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;

    /// Removes the entry for `key`. Returns `true` if there was one.
    fn remove(&mut self, key: &Self::Key) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry for `key` and hands it back.
    fn remove_entry(&mut self, key: &Self::Key) -> Option<(Self::Key, Self::Value)>;

    /// Returns `true` if the map has an entry for `key`.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns a borrowing iterator over the entries.
    fn iter(&self) -> Self::Iter<'_>;

    /// Collects the entries into a fresh vector, in iteration order.
    fn entries(&self) -> Vec<Entry<&Self::Key, &Self::Value>> {
        self.iter().map(Entry::from).collect()
    }

    /// Collects the keys into a fresh vector, in iteration order.
    fn keys(&self) -> Vec<&Self::Key> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Collects the values into a fresh vector, in iteration order.
    fn values(&self) -> Vec<&Self::Value> {
        self.iter().map(|(_, value)| value).collect()
    }
}

/// A map that keeps its keys sorted, so iteration is in ascending key order.
pub trait OrderedMap: Map {
    /// Returns the entry with the smallest key, or `None` if the map is empty.
    fn first(&self) -> Option<(&Self::Key, &Self::Value)>;

    /// Returns the entry with the largest key, or `None` if the map is empty.
    fn last(&self) -> Option<(&Self::Key, &Self::Value)>;

    /// Removes and returns the entry with the smallest key.
    fn pop_first(&mut self) -> Option<(Self::Key, Self::Value)>;

    /// Removes and returns the entry with the largest key.
    fn pop_last(&mut self) -> Option<(Self::Key, Self::Value)>;

    /// Removes the entry with the smallest key. Returns `false` if the map is empty.
    fn remove_first(&mut self) -> bool {
        self.pop_first().is_some()
    }

    /// Removes the entry with the largest key. Returns `false` if the map is empty.
    fn remove_last(&mut self) -> bool {
        self.pop_last().is_some()
    }
}

/// A collection of unique items.
pub trait Set: Collection {
    /// The item type.
    type Item;

    /// Adds `item`. Returns `true` if it was not present before; adding an item twice is a no-op.
    fn add(&mut self, item: Self::Item) -> bool;

    /// Removes `item`. Returns `true` if it was present.
    fn remove(&mut self, item: &Self::Item) -> bool;

    /// Returns `true` if `item` is present.
    fn contains(&self, item: &Self::Item) -> bool;
}

/// A set that keeps its items sorted.
pub trait OrderedSet: Set {
    /// Returns the smallest item, or `None` if the set is empty.
    fn first(&self) -> Option<&Self::Item>;

    /// Returns the largest item, or `None` if the set is empty.
    fn last(&self) -> Option<&Self::Item>;

    /// Removes the smallest item. Returns `false` if the set is empty.
    fn remove_first(&mut self) -> bool;

    /// Removes the largest item. Returns `false` if the set is empty.
    fn remove_last(&mut self) -> bool;

    /// Collects the items into a fresh vector in ascending order.
    fn to_sorted_vec(&self) -> Vec<&Self::Item>;
}

/// Writes `entries` as `{k: v, k: v}`.
pub(crate) fn fmt_entries<'a, K, V, I>(f: &mut fmt::Formatter<'_>, entries: I) -> fmt::Result
where
    K: fmt::Display + 'a,
    V: fmt::Display + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    f.write_str("{")?;
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}: {value}")?;
    }
    f.write_str("}")
}

/// Writes `items` as `{k, k}`.
pub(crate) fn fmt_items<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("{")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("}")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{BinaryTreeMap, FlatMap, HashMap};

    struct Entries<'a>(&'a [(i32, char)]);

    impl fmt::Display for Entries<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_entries(f, self.0.iter().map(|(k, v)| (k, v)))
        }
    }

    struct Items<'a>(&'a [&'a str]);

    impl fmt::Display for Items<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_items(f, self.0)
        }
    }

    #[test]
    fn entry_pairs() {
        let entry = Entry::from((1, 'a'));
        assert_eq!(entry, Entry::new(1, 'a'));
        assert_eq!(entry.into_pair(), (1, 'a'));
    }

    #[test]
    fn entry_formatting() {
        assert_eq!(Entries(&[]).to_string(), "{}");
        assert_eq!(Entries(&[(1, 'a')]).to_string(), "{1: a}");
        assert_eq!(Entries(&[(1, 'a'), (2, 'b')]).to_string(), "{1: a, 2: b}");
    }

    #[test]
    fn item_formatting() {
        assert_eq!(Items(&[]).to_string(), "{}");
        assert_eq!(Items(&["x", "y"]).to_string(), "{x, y}");
    }

    fn exercise<M: Map<Key = i32, Value = &'static str>>(mut map: M) {
        assert!(map.is_empty());
        assert!(!map.is_not_empty());
        assert!(!map.remove(&1));

        assert_eq!(map.put(2, "two"), None);
        assert_eq!(map.put(1, "one"), None);
        assert_eq!(map.put(2, "TWO"), Some("two"));
        assert_eq!(map.size(), 2);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&2), Some(&"TWO"));

        let mut keys = map.keys();
        keys.sort_unstable();
        assert_eq!(keys, [&1, &2]);
        assert_eq!(map.entries().len(), 2);
        assert_eq!(map.values().len(), 2);

        assert!(map.remove(&1));
        assert!(!map.contains_key(&1));
        map.clear();
        assert_eq!(map.size(), 0);
    }

    #[test]
    fn every_backing_honours_the_map_contract() {
        exercise(BinaryTreeMap::new());
        exercise(HashMap::new());
        exercise(FlatMap::new());
    }

    fn ordered<M: OrderedMap<Key = i32, Value = ()>>(mut map: M) {
        assert_eq!(map.first(), None);
        assert!(!map.remove_first());
        assert!(!map.remove_last());
        for key in [5, 3, 8, 1] {
            map.put(key, ());
        }
        assert_eq!(map.first(), Some((&1, &())));
        assert_eq!(map.last(), Some((&8, &())));
        assert!(map.remove_first());
        assert!(map.remove_last());
        assert_eq!(map.keys(), [&3, &5]);
    }

    #[test]
    fn ordered_backings_honour_the_ordered_contract() {
        ordered(BinaryTreeMap::new());
        ordered(FlatMap::new());
    }
}
