use super::{DEFAULT_TABLE_SIZE, HashMap};
use crate::hasher::{DefaultHash, Natural};
use crate::raw::RawChainTable;

impl<K: DefaultHash + Eq, V> HashMap<K, V, Natural> {
    /// Creates an empty map with [`DEFAULT_TABLE_SIZE`] buckets and room for at least `capacity`
    /// entries before the entry storage reallocates.
    ///
    /// The capacity only concerns entry storage. The number of buckets stays fixed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::{DEFAULT_TABLE_SIZE, HashMap};
    ///
    /// let map: HashMap<u64, u64> = HashMap::with_capacity(500);
    /// assert!(map.capacity() >= 500);
    /// assert_eq!(map.table_size(), DEFAULT_TABLE_SIZE);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HashMap {
            raw: RawChainTable::with_capacity(DEFAULT_TABLE_SIZE, capacity),
            hasher: Natural,
        }
    }
}

impl<K, V, H> HashMap<K, V, H> {
    /// Returns the number of entries the map can hold before the entry storage reallocates.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
