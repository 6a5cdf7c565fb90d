use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use super::arena::Arena;
use super::handle::{Handle, Link};
use super::node::ChainNode;

/// The separate-chaining table backing `HashMap`.
///
/// The bucket vector is sized once at construction and never grows: every key hashes into one of
/// `table_size` buckets forever, and collisions only lengthen the chains.
#[derive(Clone)]
pub(crate) struct RawChainTable<K, V> {
    /// Chain heads, one per bucket.
    buckets: Vec<Link>,
    /// All chain nodes.
    nodes: Arena<ChainNode<K, V>>,
}

impl<K, V> RawChainTable<K, V> {
    /// Creates an empty table with `table_size` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `table_size` is zero.
    pub(crate) fn new(table_size: usize) -> Self {
        Self::with_capacity(table_size, 0)
    }

    /// Creates an empty table with `table_size` buckets and room for `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `table_size` is zero.
    pub(crate) fn with_capacity(table_size: usize, capacity: usize) -> Self {
        assert!(table_size > 0, "`RawChainTable::with_capacity()` - `table_size` is zero!");
        Self {
            buckets: vec![None; table_size],
            nodes: Arena::with_capacity(capacity),
        }
    }

    pub(crate) fn table_size(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Empties every bucket. The table size is kept.
    pub(crate) fn clear(&mut self) {
        self.buckets.fill(None);
        self.nodes.clear();
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn bucket_of(&self, hash: u64) -> usize {
        // The remainder is below the bucket count, which fits in `usize`.
        (hash % self.buckets.len() as u64) as usize
    }

    /// Returns the number of entries chained in bucket `index`.
    pub(crate) fn bucket_len(&self, index: usize) -> usize {
        self.chain(self.buckets[index]).count()
    }

    fn chain(&self, head: Link) -> ChainLinks<'_, K, V> {
        ChainLinks {
            nodes: &self.nodes,
            current: head,
        }
    }

    /// Returns an iterator over all entries, bucket by bucket, each chain head to tail.
    pub(crate) fn iter(&self) -> Chains<'_, K, V> {
        Chains {
            nodes: &self.nodes,
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len(),
        }
    }
}

impl<K: Eq, V> RawChainTable<K, V> {
    fn find(&self, hash: u64, key: &K) -> Option<Handle> {
        self.chain(self.buckets[self.bucket_of(hash)])
            .find(|&handle| self.nodes.get(handle).key == *key)
    }

    pub(crate) fn get_key_value(&self, hash: u64, key: &K) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.find(hash, key)?);
        Some((&node.key, &node.value))
    }

    pub(crate) fn get_mut(&mut self, hash: u64, key: &K) -> Option<&mut V> {
        let handle = self.find(hash, key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Inserts an entry into the bucket for `hash`.
    ///
    /// An equal key already in the chain has its value overwritten and the old value is
    /// returned; otherwise the entry is appended to the tail of the chain.
    pub(crate) fn insert(&mut self, hash: u64, key: K, value: V) -> Option<V> {
        let bucket = self.bucket_of(hash);
        let mut tail = None;
        let mut current = self.buckets[bucket];
        while let Some(handle) = current {
            let node = self.nodes.get_mut(handle);
            if node.key == key {
                return Some(mem::replace(&mut node.value, value));
            }
            tail = current;
            current = node.next;
        }

        let node = Some(self.nodes.alloc(ChainNode::new(key, value)));
        match tail {
            None => self.buckets[bucket] = node,
            Some(tail) => self.nodes.get_mut(tail).next = node,
        }
        None
    }

    /// Unlinks the entry for `key` from its chain and returns it.
    pub(crate) fn remove_entry(&mut self, hash: u64, key: &K) -> Option<(K, V)> {
        let bucket = self.bucket_of(hash);
        let mut previous = None;
        let mut current = self.buckets[bucket];

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if node.key != *key {
                previous = current;
                current = node.next;
                continue;
            }

            let next = node.next;
            match previous {
                None => self.buckets[bucket] = next,
                Some(previous) => self.nodes.get_mut(previous).next = next,
            }
            return Some(self.nodes.take(handle).into_entry());
        }

        None
    }
}

/// Walks the handles of one chain.
struct ChainLinks<'a, K, V> {
    nodes: &'a Arena<ChainNode<K, V>>,
    current: Link,
}

impl<K, V> Iterator for ChainLinks<'_, K, V> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let handle = self.current?;
        self.current = self.nodes.get(handle).next;
        Some(handle)
    }
}

/// Iterator over every entry of a [`RawChainTable`].
pub(crate) struct Chains<'a, K, V> {
    nodes: &'a Arena<ChainNode<K, V>>,
    buckets: core::slice::Iter<'a, Link>,
    current: Link,
    remaining: usize,
}

impl<K, V> Chains<'_, K, V> {
    pub(crate) const fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> Clone for Chains<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            buckets: self.buckets.clone(),
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Chains<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.current.is_none() {
            self.current = *self.buckets.next()?;
        }
        let node = self.nodes.get(self.current?);
        self.current = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
