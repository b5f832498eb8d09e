use std::hash::Hash;

/// Describes what a map is.
pub trait Map<K, V>
where
    K: Eq + Hash,
{
    /// Push a new element into the Map. Returns the previous value in the map
    /// if the key already had a value there, so `None` means a new entry was
    /// created and `Some` means an existing entry was updated in place.
    fn insert(&mut self, k: K, v: V) -> Option<V>;

    /// Look up an item by key. `None` is the miss sentinel; a miss is an
    /// expected, recoverable outcome, not an error.
    fn find<'a, Q>(&'a self, k: &Q) -> Option<&'a V>
    where
        Q: Hash + Eq;

    /// Look up an item by key, returning a mutable reference to its value.
    fn find_mut<'a, Q>(&'a mut self, k: &Q) -> Option<&'a mut V>
    where
        Q: Hash + Eq;

    /// Remove an item by key, returning the removed value. A `None` return
    /// means the key was absent and the map is unchanged.
    fn remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        Q: Hash + Eq;

    /// Clears the map entirely.
    fn clear(&mut self);

    /// The number of items stored in the map right now.
    fn len(&self) -> usize;
}
