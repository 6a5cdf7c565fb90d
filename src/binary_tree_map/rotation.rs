use super::BinaryTreeMap;
use crate::raw::Side;

impl<K, V, C> BinaryTreeMap<K, V, C> {
    /// Rotates the tree right at its root.
    ///
    /// The root's left child becomes the new root. The old root becomes its right child and
    /// takes over the promoted node's former right subtree as its left subtree. In-order
    /// iteration is unchanged; only the shape is.
    ///
    /// Returns `false` and leaves the map untouched if the map is empty or the root has no left
    /// child.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::from([(2, ()), (1, ())]);
    /// assert_eq!(map.to_string(), "(() - 1 - ()) - 2 - ()");
    ///
    /// assert!(map.rotate_right());
    /// assert_eq!(map.to_string(), "() - 1 - (() - 2 - ())");
    /// assert!(!map.rotate_right());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn rotate_right(&mut self) -> bool {
        self.raw.rotate_root(Side::Right)
    }

    /// Rotates the tree left at its root. This is the mirror image of
    /// [`rotate_right`](BinaryTreeMap::rotate_right).
    ///
    /// Returns `false` and leaves the map untouched if the map is empty or the root has no right
    /// child.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapkit::BinaryTreeMap;
    ///
    /// let mut map = BinaryTreeMap::from([(1, ()), (2, ()), (3, ())]);
    /// assert_eq!(map.height(), 3);
    /// assert!(map.rotate_left());
    /// assert_eq!(map.height(), 2);
    /// assert_eq!(map.first(), Some((&1, &())));
    /// ```
    pub fn rotate_left(&mut self) -> bool {
        self.raw.rotate_root(Side::Left)
    }
}
