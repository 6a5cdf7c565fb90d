use super::BinaryTreeMap;
use crate::comparator::Natural;
use crate::raw::RawBinaryTree;

impl<K: Ord, V> BinaryTreeMap<K, V, Natural> {
    /// Creates an empty map with room for at least `capacity` nodes before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let map: BinaryTreeMap<i32, i32> = BinaryTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryTreeMap {
            raw: RawBinaryTree::with_capacity(capacity),
            comparator: Natural,
        }
    }
}

impl<K, V, C> BinaryTreeMap<K, V, C> {
    /// Returns the number of nodes the map can hold without reallocating.
    ///
    /// Slots freed by removals are reused before the node storage grows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
