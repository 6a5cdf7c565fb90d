use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::ops::Index;
use core::slice;

use crate::collection::{Collection, Map, OrderedMap, fmt_entries};
use crate::comparator::{Comparator, Natural};

mod capacity;

/// An ordered map stored as one vector of entries kept sorted by key.
///
/// Lookups binary-search the vector. Insertion appends the new entry and then moves it left one
/// neighbor at a time until it is in order, so inserting keys that arrive roughly sorted is cheap
/// while inserting a new minimum shifts every entry. Removal scans linearly for the key and
/// closes the gap.
///
/// Keys are ordered by the map's [`Comparator`], [`Natural`] by default.
///
/// # Examples
///
/// ```
/// use mapkit::FlatMap;
///
/// let mut scores = FlatMap::new();
/// scores.put("carol", 7);
/// scores.put("alice", 9);
/// scores.put("bob", 4);
///
/// assert_eq!(scores.first(), Some((&"alice", &9)));
/// assert_eq!(scores.to_string(), "{alice: 9, bob: 4, carol: 7}");
/// ```
///
/// # Complexity
///
/// | operation                | cost                          |
/// |--------------------------|-------------------------------|
/// | `get`, `contains_key`    | O(log n)                      |
/// | `put` of a present key   | O(log n)                      |
/// | `put` of a new key       | O(log n) search + O(n) shifts |
/// | `remove`                 | O(n)                          |
/// | `first`, `last`          | O(1)                          |
#[derive(Clone)]
pub struct FlatMap<K, V, C = Natural> {
    entries: Vec<(K, V)>,
    comparator: C,
}

/// An iterator over the entries of a [`FlatMap`], in ascending key order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<K: Ord, V> FlatMap<K, V> {
    /// Makes a new, empty map ordered by the keys' [`Ord`] implementation.
    ///
    /// Does not allocate anything on its own.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> FlatMap<K, V, C> {
    /// Makes a new, empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::FlatMap;
    ///
    /// let mut map = FlatMap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// map.put("three", 3);
    /// map.put("one", 1);
    /// map.put("two", 2);
    /// // "one" and "two" have the same length, so they are the same key.
    /// assert_eq!(map.size(), 2);
    /// assert_eq!(map.get(&"six"), Some(&2));
    /// ```
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            entries: Vec::new(),
            comparator,
        }
    }

    /// Returns the comparator that orders this map.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Removes every entry. The allocated storage is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns the entry with the minimum key, or `None` if the map is empty.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    /// Returns the entry with the maximum key, or `None` if the map is empty.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(key, value)| (key, value))
    }

    /// Removes and returns the entry with the minimum key.
    ///
    /// # Complexity
    ///
    /// O(n), every remaining entry shifts left.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.remove(0))
    }

    /// Removes and returns the entry with the maximum key.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.entries.pop()
    }

    /// Removes the entry with the minimum key. Returns `false` if the map was empty.
    pub fn remove_first(&mut self) -> bool {
        self.pop_first().is_some()
    }

    /// Removes the entry with the maximum key. Returns `false` if the map was empty.
    pub fn remove_last(&mut self) -> bool {
        self.pop_last().is_some()
    }
}

impl<K, V, C: Comparator<K>> FlatMap<K, V, C> {
    /// Binary-searches for `key`: `Ok` with its index, or `Err` with the index it would be
    /// inserted at.
    fn search(&self, key: &K) -> Result<usize, usize> {
        let mut low = 0;
        let mut high = self.entries.len();
        while low < high {
            let middle = low + (high - low) / 2;
            match self.comparator.compare(key, &self.entries[middle].0) {
                Ordering::Equal => return Ok(middle),
                Ordering::Greater => low = middle + 1,
                Ordering::Less => high = middle,
            }
        }
        Err(low)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// A present key has its value overwritten and the old value is returned. A new key is
    /// appended and then swapped left past every neighbor that compares greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::{FlatMap, Map};
    ///
    /// let mut map = FlatMap::new();
    /// map.put(3, "c");
    /// map.put(1, "a");
    /// map.put(2, "b");
    /// assert_eq!(map.keys(), [&1, &2, &3]);
    /// assert_eq!(map.put(2, "B"), Some("b"));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Ok(index) = self.search(&key) {
            return Some(mem::replace(&mut self.entries[index].1, value));
        }

        self.entries.push((key, value));
        let mut index = self.entries.len() - 1;
        while index > 0
            && self.comparator.compare(&self.entries[index].0, &self.entries[index - 1].0) == Ordering::Less
        {
            self.entries.swap(index, index - 1);
            index -= 1;
        }
        None
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let (key, value) = &self.entries[self.search(key).ok()?];
        Some((key, value))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.search(key).ok()?;
        Some(&mut self.entries[index].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Removes the entry for `key`. Returns `true` if there was one.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry for `key` and returns it.
    ///
    /// The entry is found by a front-to-back scan; the entries after it shift left by one.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let index = self
            .entries
            .iter()
            .position(|(candidate, _)| self.comparator.compare(candidate, key) == Ordering::Equal)?;
        Some(self.entries.remove(index))
    }
}

impl<K, V, C> Collection for FlatMap<K, V, C> {
    fn size(&self) -> usize {
        self.size()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn clear(&mut self) {
        self.clear();
    }
}

impl<K, V, C: Comparator<K>> Map for FlatMap<K, V, C> {
    type Key = K;
    type Value = V;
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a;

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.get_key_value(key)
    }

    fn remove(&mut self, key: &K) -> bool {
        self.remove(key)
    }

    fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.remove_entry(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn iter(&self) -> Iter<'_, K, V> {
        self.iter()
    }
}

impl<K, V, C: Comparator<K>> OrderedMap for FlatMap<K, V, C> {
    fn first(&self) -> Option<(&K, &V)> {
        self.first()
    }

    fn last(&self) -> Option<(&K, &V)> {
        self.last()
    }

    fn pop_first(&mut self) -> Option<(K, V)> {
        self.pop_first()
    }

    fn pop_last(&mut self) -> Option<(K, V)> {
        self.pop_last()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for FlatMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(f, self.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for FlatMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for FlatMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for FlatMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq, C> Eq for FlatMap<K, V, C> {}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for FlatMap<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for FlatMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for FlatMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, C: Comparator<K>> Index<&K> for FlatMap<K, V, C> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C> IntoIterator for &'a FlatMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
