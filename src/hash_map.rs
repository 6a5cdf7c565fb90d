use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::collection::{Collection, Map, fmt_entries};
use crate::hasher::{DefaultHash, KeyHasher, Natural};
use crate::raw::{Chains, RawChainTable};

mod capacity;

/// The number of buckets a [`HashMap`] gets unless another table size is requested.
pub const DEFAULT_TABLE_SIZE: usize = 128;

/// An unordered map using separate chaining over a fixed number of buckets.
///
/// A key lives in bucket `hash(key) % table_size`, where `hash` is the map's [`KeyHasher`].
/// Keys sharing a bucket are chained in insertion order and told apart with [`Eq`].
///
/// The bucket table is sized once, at construction, and **never grows**. There is no rehashing:
/// as the number of entries rises past the table size the chains get longer and lookups degrade
/// toward O(n). Pick the table size for the expected load with
/// [`with_table_size`](HashMap::with_table_size).
///
/// Iteration visits the buckets in index order and each chain from head to tail. That order is
/// deterministic for a given hasher and insertion history but carries no meaning.
///
/// # Examples
///
/// ```
/// use mapkit::HashMap;
///
/// let mut stock = HashMap::new();
/// stock.put("apples", 3);
/// stock.put("pears", 0);
///
/// assert_eq!(stock.get(&"apples"), Some(&3));
/// assert!(stock.remove(&"pears"));
/// assert_eq!(stock.size(), 1);
/// ```
///
/// Integer keys hash to themselves under the default hasher, so `1` and `129` share a bucket:
///
/// ```
/// use mapkit::HashMap;
///
/// let mut map = HashMap::new();
/// map.put(1, "one");
/// map.put(129, "one twenty-nine");
/// assert_eq!(map.bucket_len(1), 2);
/// assert_eq!(map.get(&129), Some(&"one twenty-nine"));
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, H = Natural> {
    raw: RawChainTable<K, V>,
    hasher: H,
}

/// An iterator over the entries of a [`HashMap`], bucket by bucket.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: Chains<'a, K, V>,
}

impl<K: DefaultHash + Eq, V> HashMap<K, V> {
    /// Makes a new, empty map with [`DEFAULT_TABLE_SIZE`] buckets, hashing keys with their
    /// [`DefaultHash`] value.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(Natural)
    }

    /// Makes a new, empty map with `table_size` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `table_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::HashMap;
    ///
    /// let map: HashMap<u32, ()> = HashMap::with_table_size(1024);
    /// assert_eq!(map.table_size(), 1024);
    /// ```
    #[must_use]
    pub fn with_table_size(table_size: usize) -> Self {
        Self::with_hasher_and_table_size(Natural, table_size)
    }
}

impl<K, V, H> HashMap<K, V, H> {
    /// Makes a new, empty map with [`DEFAULT_TABLE_SIZE`] buckets that hashes keys with `hasher`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::HashMap;
    /// use mapkit::hasher::BuildHasherAdapter;
    ///
    /// let mut map = HashMap::with_hasher(BuildHasherAdapter::default());
    /// map.put(vec![1, 2], "list");
    /// assert!(map.contains_key(&vec![1, 2]));
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_hasher_and_table_size(hasher, DEFAULT_TABLE_SIZE)
    }

    /// Makes a new, empty map with `table_size` buckets that hashes keys with `hasher`.
    ///
    /// # Panics
    ///
    /// Panics if `table_size` is zero.
    pub fn with_hasher_and_table_size(hasher: H, table_size: usize) -> Self {
        Self {
            raw: RawChainTable::new(table_size),
            hasher,
        }
    }

    /// Returns the hasher that places keys in buckets.
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the number of buckets. This never changes over the life of the map.
    #[must_use]
    pub fn table_size(&self) -> usize {
        self.raw.table_size()
    }

    /// Returns how many entries are chained in bucket `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`table_size`](HashMap::table_size).
    #[must_use]
    pub fn bucket_len(&self, index: usize) -> usize {
        self.raw.bucket_len(index)
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1); the count is kept by the node storage rather than summed over the chains.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub const fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Removes every entry. The table size is kept.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Gets an iterator over the entries, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.raw.iter() }
    }
}

impl<K: Eq, V, H: KeyHasher<K>> HashMap<K, V, H> {
    /// Inserts a key-value pair into the map.
    ///
    /// A present key has its value overwritten in place and the old value is returned. A new key
    /// is appended to the tail of its bucket's chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.put('x', 1), None);
    /// assert_eq!(map.put('x', 2), Some(1));
    /// assert_eq!(map[&'x'], 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1 + chain length)
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hasher.hash(&key);
        self.raw.insert(hash, key, value)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.get_key_value(self.hasher.hash(key), key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hasher.hash(key);
        self.raw.get_mut(hash, key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_key_value(key).is_some()
    }

    /// Removes the entry for `key`. Returns `true` if there was one.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry for `key` and returns it. Its chain is relinked around it.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hasher.hash(key);
        self.raw.remove_entry(hash, key)
    }
}

impl<K, V, H> Collection for HashMap<K, V, H> {
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

impl<K: Eq, V, H: KeyHasher<K>> Map for HashMap<K, V, H> {
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

impl<K: fmt::Display, V: fmt::Display, H> fmt::Display for HashMap<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(f, self.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, H> fmt::Debug for HashMap<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, H: Default> Default for HashMap<K, V, H> {
    /// Creates an empty map with the default hasher and [`DEFAULT_TABLE_SIZE`] buckets.
    fn default() -> Self {
        Self::with_hasher(H::default())
    }
}

/// Two maps are equal when they hold the same entries, whatever their table sizes or chain
/// orders.
impl<K: Eq, V: PartialEq, H: KeyHasher<K>> PartialEq for HashMap<K, V, H> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Eq, V: Eq, H: KeyHasher<K>> Eq for HashMap<K, V, H> {}

impl<K: Eq, V, H: KeyHasher<K> + Default> FromIterator<(K, V)> for HashMap<K, V, H> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K: Eq, V, H: KeyHasher<K>> Extend<(K, V)> for HashMap<K, V, H> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: DefaultHash + Eq, V, const N: usize> From<[(K, V); N]> for HashMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Eq, V, H: KeyHasher<K>> Index<&K> for HashMap<K, V, H> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, H> IntoIterator for &'a HashMap<K, V, H> {
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
