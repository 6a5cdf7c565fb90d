use super::handle::{Handle, Link};

/// Which child link of a tree node is meant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Child shape of a tree node, as needed by removal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Children {
    /// The node can be replaced by this (possibly empty) link.
    AtMostOne(Link),
    /// Both children are present; this is the right one.
    Two(Handle),
}

// Binary search tree node. Each child link is owned by exactly this node.
#[derive(Clone)]
pub(crate) struct TreeNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    left: Link,
    right: Link,
}

impl<K, V> TreeNode<K, V> {
    /// Creates a new leaf.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }

    pub(crate) const fn left(&self) -> Link {
        self.left
    }

    pub(crate) const fn right(&self) -> Link {
        self.right
    }

    pub(crate) const fn children(&self) -> Children {
        match (self.left, self.right) {
            (Some(_), Some(right)) => Children::Two(right),
            (Some(child), None) | (None, Some(child)) => Children::AtMostOne(Some(child)),
            (None, None) => Children::AtMostOne(None),
        }
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

// Hash chain node. `next` is owned by this node; the chain head is owned by its bucket.
#[derive(Clone)]
pub(crate) struct ChainNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) next: Link,
}

impl<K, V> ChainNode<K, V> {
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self { key, value, next: None }
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
