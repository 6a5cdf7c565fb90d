use alloc::vec::Vec;

use super::FlatMap;
use crate::comparator::Natural;

impl<K: Ord, V> FlatMap<K, V, Natural> {
    /// Creates an empty map with room for at least `capacity` entries before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::FlatMap;
    ///
    /// let map: FlatMap<i32, i32> = FlatMap::with_capacity(32);
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FlatMap {
            entries: Vec::with_capacity(capacity),
            comparator: Natural,
        }
    }
}

impl<K, V, C> FlatMap<K, V, C> {
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Reserves room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Shrinks the backing storage to fit the current entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::FlatMap;
    ///
    /// let mut map = FlatMap::with_capacity(64);
    /// map.put(1, 1);
    /// map.shrink_to_fit();
    /// assert!(map.capacity() < 64);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }
}
