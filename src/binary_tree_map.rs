use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::collection::{Collection, Map, OrderedMap};
use crate::comparator::{Comparator, Natural};
use crate::raw::{InOrder, RawBinaryTree, Side};

mod capacity;
mod rotation;

/// An ordered map based on an unbalanced [binary search tree].
///
/// Keys are ordered by the map's [`Comparator`]: [`Natural`] (the key's [`Ord`]) for maps made
/// with [`new`](BinaryTreeMap::new), or any comparator passed to
/// [`with_comparator`](BinaryTreeMap::with_comparator). Iteration is in ascending key order.
///
/// The tree is never rebalanced. New keys always become leaves, so inserting keys in sorted
/// order degrades the tree into a list and every operation becomes linear. The root
/// [`rotate_left`](BinaryTreeMap::rotate_left) / [`rotate_right`](BinaryTreeMap::rotate_right)
/// primitives are exposed for callers that want to reshape the tree themselves; no map
/// operation calls them.
///
/// It is a logic error for a key to be modified in such a way that its ordering relative to any
/// other key changes while it is in the map.
///
/// # Examples
///
/// ```
/// use mapkit::BinaryTreeMap;
///
/// let mut planets = BinaryTreeMap::new();
/// planets.put("Mercury", 0.4);
/// planets.put("Venus", 0.7);
/// planets.put("Earth", 1.0);
/// planets.put("Mars", 1.5);
///
/// assert_eq!(planets.get(&"Earth"), Some(&1.0));
/// assert!(planets.remove(&"Venus"));
/// assert!(!planets.remove(&"Pluto"));
///
/// let names: Vec<_> = planets.iter().map(|(name, _)| *name).collect();
/// assert_eq!(names, ["Earth", "Mars", "Mercury"]);
/// ```
///
/// # Complexity
///
/// `put`, `get`, `remove` and `contains_key` walk one root-to-leaf path: O(h), where h is the
/// current height. h is about log n for keys arriving in random order and n in the worst case.
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
#[derive(Clone)]
pub struct BinaryTreeMap<K, V, C = Natural> {
    raw: RawBinaryTree<K, V>,
    comparator: C,
}

/// An iterator over the entries of a [`BinaryTreeMap`], in ascending key order.
///
/// This `struct` is created by the [`iter`](BinaryTreeMap::iter) method.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: InOrder<'a, K, V>,
}

impl<K: Ord, V> BinaryTreeMap<K, V> {
    /// Makes a new, empty map ordered by the keys' [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::new();
    /// map.put(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> BinaryTreeMap<K, V, C> {
    /// Makes a new, empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.put(1, "a");
    /// map.put(2, "b");
    /// assert_eq!(map.first(), Some((&2, &"b")));
    /// ```
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            raw: RawBinaryTree::new(),
            comparator,
        }
    }

    /// Returns the comparator that orders this map.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn size(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns `true` if the map has at least one entry.
    #[must_use]
    pub const fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Removes every entry, keeping the comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::from([(1, "a"), (2, "b")]);
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 for an
    /// empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let balanced = BinaryTreeMap::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let degenerate = BinaryTreeMap::from([(1, ()), (2, ()), (3, ())]);
    /// assert_eq!(degenerate.height(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let map = BinaryTreeMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let mut iter = map.iter();
    /// assert_eq!(iter.next(), Some((&1, &"a")));
    /// assert_eq!(iter.len(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.raw.iter() }
    }

    /// Returns the entry with the minimum key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::new();
    /// assert_eq!(map.first(), None);
    /// map.put(2, "two");
    /// map.put(1, "one");
    /// assert_eq!(map.first(), Some((&1, &"one")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.raw.edge_entry(Side::Left)
    }

    /// Returns the entry with the maximum key, or `None` if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.raw.edge_entry(Side::Right)
    }

    /// Removes and returns the entry with the minimum key.
    ///
    /// The node is unlinked by attaching its right subtree, if any, where it used to hang.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_edge(Side::Left)
    }

    /// Removes and returns the entry with the maximum key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_edge(Side::Right)
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

impl<K, V, C: Comparator<K>> BinaryTreeMap<K, V, C> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the key was already present its value is overwritten in place and the old value is
    /// returned. Otherwise the key is attached as a new leaf and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::new();
    /// assert_eq!(map.put(37, "a"), None);
    /// assert_eq!(map.put(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value, &self.comparator)
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key and its value.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.get_key_value(key, &self.comparator)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::from([(1, 10)]);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(map[&1], 11);
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.raw.get_mut(key, &self.comparator)
    }

    /// Returns `true` if the map has an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_key_value(key).is_some()
    }

    /// Removes the entry for `key`. Returns `true` if there was one.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry for `key` and returns it.
    ///
    /// A node with two children is not unlinked itself: it takes over the entry of its in-order
    /// successor, and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::from([(2, "b"), (1, "a"), (3, "c")]);
    /// assert_eq!(map.remove_entry(&2), Some((2, "b")));
    /// assert_eq!(map.remove_entry(&2), None);
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.raw.remove_entry(key, &self.comparator)
    }
}

impl<K, V, C> Collection for BinaryTreeMap<K, V, C> {
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

impl<K, V, C: Comparator<K>> Map for BinaryTreeMap<K, V, C> {
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

impl<K, V, C: Comparator<K>> OrderedMap for BinaryTreeMap<K, V, C> {
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

/// Renders the tree shape as `(<left>) - <key> - (<right>)`, recursively. An empty subtree
/// renders as nothing, so a single entry `1` renders as `() - 1 - ()`.
///
/// ```
/// use mapkit::BinaryTreeMap;
///
/// let map = BinaryTreeMap::from([(2, "b"), (1, "a"), (3, "c")]);
/// assert_eq!(map.to_string(), "(() - 1 - ()) - 2 - (() - 3 - ())");
/// ```
impl<K: fmt::Display, V, C> fmt::Display for BinaryTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt_subtree(self.raw.root(), f)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for BinaryTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for BinaryTreeMap<K, V, C> {
    /// Creates an empty `BinaryTreeMap` with the default comparator.
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for BinaryTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for BinaryTreeMap<K, V, C> {}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for BinaryTreeMap<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for BinaryTreeMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for BinaryTreeMap<K, V> {
    /// Builds the map by inserting the pairs in array order, which also fixes the tree shape.
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, C: Comparator<K>> Index<&K> for BinaryTreeMap<K, V, C> {
    type Output = V;

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C> IntoIterator for &'a BinaryTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
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
