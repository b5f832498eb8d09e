use parking_lot::RwLock;
use std::{hash::Hash, marker::PhantomData, sync::Arc};

use crate::map::Map;

/// Wrapper for a Map which is shareable across thread boundaries. The map
/// itself stays free of locking; this is external synchronization layered on
/// top of it.
pub struct SharedMap<M, K, V>(
    Arc<RwLock<M>>,
    PhantomData<K>,
    PhantomData<V>,
)
where
    M: Map<K, V>,
    K: Eq + Hash,
    V: Clone;

impl<M, K, V> SharedMap<M, K, V>
where
    M: Map<K, V>,
    K: Eq + Hash,
    V: Clone,
{
    /// Wraps a map into a shared map accessor, making it safe to move across
    /// thread boundaries. Enforces an additional constraint of Clone on
    /// values.
    pub fn with_map(map: M) -> Self {
        Self(Arc::from(RwLock::from(map)), PhantomData, PhantomData)
    }

    /// Inserts an item into the map, returning the previous value at that key.
    pub fn insert(&self, k: K, v: V) -> Option<V> {
        self.0.write().insert(k, v)
    }

    /// Look up an item in the map. This clones it out under the read lock to
    /// minimize the lock time of the map.
    pub fn find<Q>(&self, k: &Q) -> Option<V>
    where
        Q: Hash + Eq,
    {
        self.0.read().find(k).map(|v| v.clone())
    }

    /// Remove an item from the map, returning the removed item if it existed.
    pub fn remove<Q>(&self, k: &Q) -> Option<V>
    where
        Q: Hash + Eq,
    {
        self.0.write().remove(k)
    }

    /// Clears the map.
    pub fn clear(&self) {
        self.0.write().clear()
    }

    /// The number of elements in the map at present.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Whether the map holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M, K, V> Clone for SharedMap<M, K, V>
where
    M: Map<K, V>,
    K: Eq + Hash,
    V: Clone,
{
    fn clone(&self) -> Self {
        SharedMap(self.0.clone(), PhantomData, PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use crate::{BuildIdentityHasher, OrderedHashMap, SharedMap};

    #[test]
    fn readme_snippet() {
        let map: SharedMap<OrderedHashMap<usize, usize>, usize, usize> =
            SharedMap::with_map(OrderedHashMap::new());
        map.insert(1, 1);

        let thread_map = map.clone();
        let r = thread::spawn(move || thread_map.find(&1)).join();

        assert_eq!(Some(1), r.unwrap());
    }

    #[test]
    fn clones_share_one_map() {
        let map: SharedMap<OrderedHashMap<u64, u64, BuildIdentityHasher>, u64, u64> =
            SharedMap::with_map(OrderedHashMap::with_capacity_and_hash_builder(
                2,
                BuildIdentityHasher,
            ));

        let other = map.clone();
        map.insert(1, 10);
        other.insert(2, 20);

        assert_eq!(2, map.len());
        assert_eq!(Some(20), map.find(&2u64));

        assert_eq!(Some(10), other.remove(&1u64));
        assert_eq!(None, map.find(&1u64));
    }
}
