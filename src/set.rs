//! Sets built as key-only views over a map.
//!
//! A [`MapSet`] owns exactly one map whose values are `()`. Every set operation forwards to the
//! map, so a set inherits the ordering, hashing and cost profile of the map it is built on:
//!
//! ```
//! use mapkit::{BinaryTreeSet, FlatSet, HashSet, OrderedSet, Set};
//!
//! let mut tree = BinaryTreeSet::new();
//! let mut flat = FlatSet::new();
//! let mut hash = HashSet::new();
//! for word in ["pear", "apple", "fig", "apple"] {
//!     tree.add(word);
//!     flat.add(word);
//!     hash.add(word);
//! }
//!
//! assert_eq!(tree.to_sorted_vec(), [&"apple", &"fig", &"pear"]);
//! assert_eq!(flat.first(), Some(&"apple"));
//! assert_eq!(hash.size(), 3);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::binary_tree_map::BinaryTreeMap;
use crate::collection::{Collection, Map, OrderedMap, OrderedSet, Set, fmt_items};
use crate::comparator::{Comparator, Natural};
use crate::flat_map::FlatMap;
use crate::hash_map::HashMap;
use crate::hasher::{DefaultHash, KeyHasher};

/// A set of the keys of a map `M` with `()` values.
///
/// `MapSet` implements [`Set`] for any [`Map`] and [`OrderedSet`] for any [`OrderedMap`]. The
/// aliases [`BinaryTreeSet`], [`HashSet`] and [`FlatSet`] name the usual backings.
///
/// # Examples
///
/// A set over a map with a custom policy:
///
/// ```
/// use mapkit::{FlatMap, MapSet, OrderedSet, Set};
///
/// let descending = FlatMap::with_comparator(|a: &u8, b: &u8| b.cmp(a));
/// let mut set = MapSet::from_map(descending);
/// set.add(1);
/// set.add(7);
/// set.add(4);
/// assert_eq!(set.to_sorted_vec(), [&7, &4, &1]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MapSet<M> {
    map: M,
}

/// A set backed by a [`BinaryTreeMap`].
pub type BinaryTreeSet<T, C = Natural> = MapSet<BinaryTreeMap<T, (), C>>;

/// A set backed by a [`HashMap`].
pub type HashSet<T, H = Natural> = MapSet<HashMap<T, (), H>>;

/// A set backed by a [`FlatMap`].
pub type FlatSet<T, C = Natural> = MapSet<FlatMap<T, (), C>>;

/// An iterator over the items of a [`MapSet`], in the backing map's order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Items<'a, M: Map + 'a> {
    inner: M::Iter<'a>,
}

impl<M: Map<Value = ()>> MapSet<M> {
    /// Wraps `map`. Its current keys become the set's items.
    pub const fn from_map(map: M) -> Self {
        Self { map }
    }

    /// Returns the backing map.
    pub const fn map(&self) -> &M {
        &self.map
    }

    /// Unwraps the backing map.
    pub fn into_map(self) -> M {
        self.map
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.map.size()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        self.map.is_not_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Adds `item`. Returns `true` if it was not already present.
    ///
    /// Adding a present item leaves the set unchanged; the stored item is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::HashSet;
    ///
    /// let mut set = HashSet::new();
    /// assert!(set.add(2));
    /// assert!(!set.add(2));
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn add(&mut self, item: M::Key) -> bool {
        self.map.put(item, ()).is_none()
    }

    /// Removes `item`. Returns `true` if it was present.
    pub fn remove(&mut self, item: &M::Key) -> bool {
        self.map.remove(item)
    }

    #[must_use]
    pub fn contains(&self, item: &M::Key) -> bool {
        self.map.contains_key(item)
    }

    /// Returns the stored item equal to `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::FlatSet;
    ///
    /// let set = FlatSet::from([String::from("kiwi")]);
    /// let stored: &String = set.get(&String::from("kiwi")).unwrap();
    /// assert_eq!(stored, "kiwi");
    /// ```
    #[must_use]
    pub fn get(&self, item: &M::Key) -> Option<&M::Key> {
        self.map.get_key_value(item).map(|(key, ())| key)
    }

    /// Removes and returns the stored item equal to `item`.
    pub fn take(&mut self, item: &M::Key) -> Option<M::Key> {
        self.map.remove_entry(item).map(|(key, ())| key)
    }

    /// Gets an iterator over the items, in the backing map's iteration order.
    pub fn iter(&self) -> Items<'_, M> {
        Items { inner: self.map.iter() }
    }
}

impl<M: OrderedMap<Value = ()>> MapSet<M> {
    /// Returns the smallest item, or `None` if the set is empty.
    #[must_use]
    pub fn first(&self) -> Option<&M::Key> {
        self.map.first().map(|(key, ())| key)
    }

    /// Returns the largest item, or `None` if the set is empty.
    #[must_use]
    pub fn last(&self) -> Option<&M::Key> {
        self.map.last().map(|(key, ())| key)
    }

    /// Removes and returns the smallest item.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeSet;
    ///
    /// let mut set = BinaryTreeSet::from([3, 1, 2]);
    /// assert_eq!(set.pop_first(), Some(1));
    /// assert_eq!(set.first(), Some(&2));
    /// ```
    pub fn pop_first(&mut self) -> Option<M::Key> {
        self.map.pop_first().map(|(key, ())| key)
    }

    /// Removes and returns the largest item.
    pub fn pop_last(&mut self) -> Option<M::Key> {
        self.map.pop_last().map(|(key, ())| key)
    }

    /// Removes the smallest item. Returns `false` if the set was empty.
    pub fn remove_first(&mut self) -> bool {
        self.map.remove_first()
    }

    /// Removes the largest item. Returns `false` if the set was empty.
    pub fn remove_last(&mut self) -> bool {
        self.map.remove_last()
    }

    /// Collects the items into a vector in ascending order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<&M::Key> {
        self.map.keys()
    }
}

impl<T: Ord> BinaryTreeSet<T> {
    /// Makes a new, empty set ordered by the items' [`Ord`] implementation.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_map(BinaryTreeMap::new())
    }
}

impl<T, C: Comparator<T>> BinaryTreeSet<T, C> {
    /// Makes a new, empty set ordered by `comparator`.
    pub const fn with_comparator(comparator: C) -> Self {
        Self::from_map(BinaryTreeMap::with_comparator(comparator))
    }
}

impl<T: Ord> FlatSet<T> {
    /// Makes a new, empty set ordered by the items' [`Ord`] implementation.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_map(FlatMap::new())
    }
}

impl<T, C: Comparator<T>> FlatSet<T, C> {
    /// Makes a new, empty set ordered by `comparator`.
    pub const fn with_comparator(comparator: C) -> Self {
        Self::from_map(FlatMap::with_comparator(comparator))
    }
}

impl<T: DefaultHash + Eq> HashSet<T> {
    /// Makes a new, empty set with the default table size, hashing items with their
    /// [`DefaultHash`] value.
    #[must_use]
    pub fn new() -> Self {
        Self::from_map(HashMap::new())
    }
}

impl<T: Eq, H: KeyHasher<T>> HashSet<T, H> {
    /// Makes a new, empty set that hashes items with `hasher`.
    pub fn with_hasher(hasher: H) -> Self {
        Self::from_map(HashMap::with_hasher(hasher))
    }
}

impl<M: Map<Value = ()>> Collection for MapSet<M> {
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

impl<M: Map<Value = ()>> Set for MapSet<M> {
    type Item = M::Key;

    fn add(&mut self, item: M::Key) -> bool {
        self.add(item)
    }

    fn remove(&mut self, item: &M::Key) -> bool {
        self.remove(item)
    }

    fn contains(&self, item: &M::Key) -> bool {
        self.contains(item)
    }
}

impl<M: OrderedMap<Value = ()>> OrderedSet for MapSet<M> {
    fn first(&self) -> Option<&M::Key> {
        self.first()
    }

    fn last(&self) -> Option<&M::Key> {
        self.last()
    }

    fn remove_first(&mut self) -> bool {
        self.remove_first()
    }

    fn remove_last(&mut self) -> bool {
        self.remove_last()
    }

    fn to_sorted_vec(&self) -> Vec<&M::Key> {
        self.to_sorted_vec()
    }
}

impl<M> fmt::Display for MapSet<M>
where
    M: Map<Value = ()>,
    M::Key: fmt::Display,
{
    /// Renders the items as `{a, b}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_items(f, self.iter())
    }
}

impl<M> fmt::Debug for MapSet<M>
where
    M: Map<Value = ()>,
    M::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<M: Map<Value = ()> + Default> FromIterator<M::Key> for MapSet<M> {
    fn from_iter<T: IntoIterator<Item = M::Key>>(iter: T) -> Self {
        let mut set = Self::from_map(M::default());
        set.extend(iter);
        set
    }
}

impl<M: Map<Value = ()>> Extend<M::Key> for MapSet<M> {
    fn extend<T: IntoIterator<Item = M::Key>>(&mut self, iter: T) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinaryTreeSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for FlatSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: DefaultHash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, M: Map<Value = ()>> IntoIterator for &'a MapSet<M> {
    type Item = &'a M::Key;
    type IntoIter = Items<'a, M>;

    fn into_iter(self) -> Items<'a, M> {
        self.iter()
    }
}

impl<'a, M: Map + 'a> Iterator for Items<'a, M> {
    type Item = &'a M::Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, M> ExactSizeIterator for Items<'a, M>
where
    M: Map + 'a,
    M::Iter<'a>: ExactSizeIterator,
{
}

impl<'a, M> FusedIterator for Items<'a, M>
where
    M: Map + 'a,
    M::Iter<'a>: FusedIterator,
{
}

impl<'a, M> Clone for Items<'a, M>
where
    M: Map + 'a,
    M::Iter<'a>: Clone,
{
    fn clone(&self) -> Self {
        Items {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn add_is_idempotent() {
        let mut set = BinaryTreeSet::new();
        assert!(set.add(5));
        assert!(!set.add(5));
        assert_eq!(set.size(), 1);
        assert!(set.contains(&5));
    }

    #[test]
    fn removal_and_edges_on_empty_sets() {
        let mut set: FlatSet<i32> = FlatSet::new();
        assert!(!set.remove(&1));
        assert!(!set.remove_first());
        assert!(!set.remove_last());
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
        assert_eq!(set.to_string(), "{}");
    }

    #[test]
    fn ordered_sets_drain_from_both_ends() {
        let mut set = FlatSet::from([4, 2, 9, 7]);
        assert_eq!(set.to_sorted_vec(), [&2, &4, &7, &9]);
        assert!(set.remove_first());
        assert!(set.remove_last());
        assert_eq!(set.to_string(), "{4, 7}");
        assert_eq!(set.pop_last(), Some(7));
        assert_eq!(set.pop_first(), Some(4));
        assert!(set.is_empty());
    }

    #[test]
    fn take_returns_the_stored_item() {
        let mut set = HashSet::from([10_u32, 20]);
        assert_eq!(set.get(&10), Some(&10));
        assert_eq!(set.take(&10), Some(10));
        assert_eq!(set.take(&10), None);
        assert_eq!(set.iter().len(), 1);
    }

    #[test]
    fn the_set_forwards_to_its_map() {
        let set = BinaryTreeSet::from([2, 1, 3]);
        let map = set.into_map();
        assert_eq!(map.height(), 2);
        assert_eq!(map.get(&1), Some(&()));
    }

    #[test]
    fn sets_with_custom_policies() {
        let mut descending = BinaryTreeSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        descending.extend([1, 3, 2]);
        assert_eq!(descending.first(), Some(&3));

        let mut by_parity = HashSet::with_hasher(|item: &u8| u64::from(item % 2));
        by_parity.extend([1, 2, 3]);
        assert_eq!(by_parity.map().bucket_len(1), 2);
        assert_eq!(by_parity.to_string(), "{2, 1, 3}");
    }
}
