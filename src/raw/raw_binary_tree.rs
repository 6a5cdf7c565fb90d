use core::cmp::Ordering;
use core::fmt;
use core::mem;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::{Handle, Link};
use super::node::{Children, Side, TreeNode};
use crate::comparator::Comparator;

/// The unbalanced binary search tree backing `BinaryTreeMap`.
///
/// All nodes live in one arena; the tree shape is expressed through the child links of each
/// node plus the root link. The comparator is owned by the public wrapper and passed in to
/// every operation that needs to order keys.
#[derive(Clone)]
pub(crate) struct RawBinaryTree<K, V> {
    nodes: Arena<TreeNode<K, V>>,
    root: Link,
}

/// The link that owns a node: the root link, or one side of a parent.
type Slot = Option<(Handle, Side)>;

/// Where a key search stopped.
struct Location {
    /// The link that owns `node`, or would own a new node for the key.
    slot: Slot,
    /// The matching node, if any.
    node: Link,
}

/// Pending output of [`RawBinaryTree::fmt_subtree`].
#[derive(Clone, Copy)]
enum Render {
    /// Opens a node; its left subtree follows.
    Node(Handle),
    /// Ends the left subtree, prints the key and opens the right subtree.
    Key(Handle),
    /// Ends the right subtree.
    Close,
}

/// Traversal stack; most trees are shallower than this.
type Stack = SmallVec<[Handle; 32]>;

impl<K, V> RawBinaryTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of nodes in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            pending.push((root, 1));
        }

        while let Some((handle, depth)) = pending.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            for child in [node.left(), node.right()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }

        height
    }

    fn link(&self, slot: Slot) -> Link {
        match slot {
            None => self.root,
            Some((parent, side)) => self.nodes.get(parent).child(side),
        }
    }

    fn set_link(&mut self, slot: Slot, link: Link) {
        match slot {
            None => self.root = link,
            Some((parent, side)) => self.nodes.get_mut(parent).set_child(side, link),
        }
    }

    /// Follows `side` links from the node owned by `slot` for as long as possible.
    ///
    /// Returns the last node reached together with the link that owns it.
    fn extreme(&self, slot: Slot, side: Side) -> Option<(Slot, Handle)> {
        let start = self.link(slot)?;
        Some(self.descend(slot, start, side))
    }

    fn descend(&self, mut slot: Slot, mut current: Handle, side: Side) -> (Slot, Handle) {
        while let Some(next) = self.nodes.get(current).child(side) {
            slot = Some((current, side));
            current = next;
        }
        (slot, current)
    }

    /// Unlinks the node at `handle`, owned by `slot`, and returns its entry.
    ///
    /// A node with at most one child is replaced by that child. A node with two children takes
    /// over the entry of its in-order successor (the leftmost node of its right subtree), which
    /// is spliced out in turn; the successor has no left child, so that second splice is direct.
    fn splice(&mut self, slot: Slot, handle: Handle) -> (K, V) {
        match self.nodes.get(handle).children() {
            Children::AtMostOne(child) => {
                self.set_link(slot, child);
                self.nodes.take(handle).into_entry()
            }
            Children::Two(right) => {
                let (successor_slot, successor) = self.descend(Some((handle, Side::Right)), right, Side::Left);
                let (key, value) = self.splice(successor_slot, successor);
                let node = self.nodes.get_mut(handle);
                (mem::replace(&mut node.key, key), mem::replace(&mut node.value, value))
            }
        }
    }

    /// Returns the entry of the node reached by following `side` links from the root.
    pub(crate) fn edge_entry(&self, side: Side) -> Option<(&K, &V)> {
        let (_, handle) = self.extreme(None, side)?;
        let node = self.nodes.get(handle);
        Some((&node.key, &node.value))
    }

    /// Removes the minimum (`Side::Left`) or maximum (`Side::Right`) entry.
    pub(crate) fn pop_edge(&mut self, side: Side) -> Option<(K, V)> {
        let (slot, handle) = self.extreme(None, side)?;
        Some(self.splice(slot, handle))
    }

    /// Rotates the tree at its root in direction `toward`.
    ///
    /// A right rotation promotes the root's left child to root; the old root becomes that child's
    /// right child and adopts its former right subtree as its new left subtree. Left rotation is
    /// the mirror image. Returns `false`, leaving the tree untouched, if the root has no child on
    /// the promoted side.
    pub(crate) fn rotate_root(&mut self, toward: Side) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let promoted_side = toward.opposite();
        let Some(pivot) = self.nodes.get(root).child(promoted_side) else {
            return false;
        };

        let inner = self.nodes.get(pivot).child(toward);
        self.nodes.get_mut(root).set_child(promoted_side, inner);
        self.nodes.get_mut(pivot).set_child(toward, Some(root));
        self.root = Some(pivot);
        true
    }

    /// Returns an in-order iterator over the entries.
    pub(crate) fn iter(&self) -> InOrder<'_, K, V> {
        let mut iter = InOrder {
            nodes: &self.nodes,
            stack: Stack::new(),
            remaining: self.len(),
        };
        iter.descend_left(self.root);
        iter
    }

    /// Renders the subtree owned by `link` as `(<left>) - <key> - (<right>)`.
    ///
    /// An empty subtree renders as nothing. The walk keeps its own stack, so a degenerate tree
    /// renders at any depth.
    pub(crate) fn fmt_subtree(&self, link: Link, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        K: fmt::Display,
    {
        let mut pending: SmallVec<[Render; 32]> = SmallVec::new();
        if let Some(handle) = link {
            pending.push(Render::Node(handle));
        }

        while let Some(step) = pending.pop() {
            match step {
                Render::Node(handle) => {
                    let node = self.nodes.get(handle);
                    f.write_str("(")?;
                    pending.push(Render::Close);
                    pending.extend(node.right().map(Render::Node));
                    pending.push(Render::Key(handle));
                    pending.extend(node.left().map(Render::Node));
                }
                Render::Key(handle) => write!(f, ") - {} - (", self.nodes.get(handle).key)?,
                Render::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }

    pub(crate) const fn root(&self) -> Link {
        self.root
    }
}

impl<K, V> RawBinaryTree<K, V> {
    fn locate<C: Comparator<K>>(&self, key: &K, comparator: &C) -> Location {
        let mut slot = None;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = match comparator.compare(key, &node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break,
            };
            slot = Some((handle, side));
            current = node.child(side);
        }

        Location { slot, node: current }
    }

    pub(crate) fn get_key_value<C: Comparator<K>>(&self, key: &K, comparator: &C) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.locate(key, comparator).node?);
        Some((&node.key, &node.value))
    }

    pub(crate) fn get_mut<C: Comparator<K>>(&mut self, key: &K, comparator: &C) -> Option<&mut V> {
        let handle = self.locate(key, comparator).node?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Inserts an entry, overwriting the value in place if the key is present.
    ///
    /// Returns the previous value. New keys always become leaves; nothing is rebalanced.
    pub(crate) fn insert<C: Comparator<K>>(&mut self, key: K, value: V, comparator: &C) -> Option<V> {
        let location = self.locate(&key, comparator);
        if let Some(handle) = location.node {
            return Some(mem::replace(&mut self.nodes.get_mut(handle).value, value));
        }

        let leaf = self.nodes.alloc(TreeNode::leaf(key, value));
        self.set_link(location.slot, Some(leaf));
        None
    }

    pub(crate) fn remove_entry<C: Comparator<K>>(&mut self, key: &K, comparator: &C) -> Option<(K, V)> {
        let location = self.locate(key, comparator);
        let handle = location.node?;
        Some(self.splice(location.slot, handle))
    }
}

/// In-order iterator over a [`RawBinaryTree`].
pub(crate) struct InOrder<'a, K, V> {
    nodes: &'a Arena<TreeNode<K, V>>,
    // Nodes whose left subtree has been visited but which have not been yielded yet.
    stack: Stack,
    remaining: usize,
}

impl<K, V> InOrder<'_, K, V> {
    fn descend_left(&mut self, mut link: Link) {
        while let Some(handle) = link {
            self.stack.push(handle);
            link = self.nodes.get(handle).left();
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> Clone for InOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let node = self.nodes.get(handle);
        self.descend_left(node.right());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
