//! A Module with some utilities for working with NodeIDs

use crate::NodeID;
use std::hash::{BuildHasherDefault, Hasher};

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildHasherDefault<NodeIDHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildHasherDefault<NodeIDHasher>>;

/// A [`Hasher`] specialized on NodeIDs
///
/// NodeIDs are small dense Integers, so they are already perfectly distributed and can be used
/// as their own Hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
    /// panics, since only NodeIDs are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIDs")
    }
    /// Writes a single NodeID into this hasher.
    fn write_u32(&mut self, id: NodeID) {
        self.0 = id as u64
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

/// create a new [`NodeIDMap`] with space for at least `capacity` Entries
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIDMap<V> {
    NodeIDMap::with_capacity_and_hasher(capacity, Default::default())
}

/// create a new [`NodeIDSet`] with space for at least `capacity` Entries
pub fn node_id_set_with_cap(capacity: usize) -> NodeIDSet {
    NodeIDSet::with_capacity_and_hasher(capacity, Default::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_hash() {
        let mut hasher = NodeIDHasher::default();
        hasher.write_u32(42);
        assert_eq!(hasher.finish(), 42);
    }

    #[test]
    fn map_and_set() {
        let mut map = node_id_map_with_cap(4);
        map.insert(3, "three");
        map.insert(7, "seven");
        assert_eq!(map[&3], "three");
        assert_eq!(map.get(&5), None);

        let set: NodeIDSet = [1, 2, 2, 3].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert!(node_id_set_with_cap(8).is_empty());
    }
}
