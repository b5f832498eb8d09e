use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash, Hasher},
    iter::FromIterator,
    marker::PhantomData,
    mem, slice,
};

use crate::map::Map;

/// Alias for the hashed form of a key. Hashes double as the sort key of the
/// backing storage.
pub type KeyHash = u64;

/// A single slot in the map: a key's hash and the value stored under it. The
/// key itself is long gone by the time one of these exists.
#[derive(Debug, PartialEq)]
pub struct Entry<V> {
    hash: KeyHash,
    value: V,
}

impl<V> Entry<V> {
    /// The stored hash of the key this entry was created under.
    pub fn hash(&self) -> KeyHash {
        self.hash
    }

    /// The stored value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// What the shared binary search found: the index of the entry whose hash
/// matched, or the exact index a new entry has to be inserted at to keep the
/// storage sorted.
enum Probe {
    Hit(usize),
    Vacant(usize),
}

/// A map holding its entries in a single contiguous Vec sorted by ascending
/// key hash. Lookups binary-search the Vec in O(log n); insert and remove pay
/// O(n) to shift the tail around, which is the price of keeping everything
/// cache-adjacent. Iteration comes out in hash order, not insertion order.
///
/// The key is hashed to a u64 and then discarded, so the map is quite compact
/// but cannot tell two keys with the same hash apart: they share one slot, and
/// the last write wins. Pick the hasher accordingly - with the default
/// RandomState a collision takes on the order of 2^32 distinct keys to become
/// likely.
///
/// Mutating the map moves entries, so a reference handed out by find is tied
/// to a borrow of the whole map; the borrow checker won't let one survive an
/// insert or remove.
pub struct OrderedHashMap<K, V, S = RandomState>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Entries sorted by ascending hash, each hash present at most once.
    entries: Vec<Entry<V>>,
    hash_builder: S,
    // the key is hashed to a u64, so we don't actually store it anywhere. this
    // keeps the map quite compact, but the expense is that we are incapable of
    // printing back out the contents of the map except by hash, which is kind
    // of silly.
    kpd: PhantomData<K>,
}

impl<K, V> OrderedHashMap<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Make a new empty OrderedHashMap.
    pub fn new() -> Self {
        OrderedHashMap::with_capacity(0)
    }

    /// Make a new OrderedHashMap with room for a specified number of elements.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedHashMap::with_capacity_and_hash_builder(capacity, Default::default())
    }
}

impl<K, V, S> OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Makes a new OrderedHashMap with a specified capacity and hasher.
    pub fn with_capacity_and_hash_builder(capacity: usize, hash_builder: S) -> Self {
        OrderedHashMap {
            entries: Vec::with_capacity(capacity),
            hash_builder,
            kpd: PhantomData,
        }
    }

    /// Builds a map from literal (hash, value) pairs. The input does not have
    /// to be sorted: every pair goes through the same insertion path insert
    /// uses, so the result is sorted regardless, and a hash appearing more
    /// than once keeps only the value it was last paired with.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (KeyHash, V)>,
        S: Default,
    {
        let entries = entries.into_iter();
        let mut map = OrderedHashMap::with_capacity_and_hash_builder(
            entries.size_hint().0,
            Default::default(),
        );

        for (hash, value) in entries {
            map.insert_hashed(hash, value);
        }

        map
    }

    /// Forward iteration over entries in ascending-hash order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Nonmutable iteration over the map using a function, applied to every
    /// entry in ascending-hash order.
    pub fn visit<F>(&self, mut func: F)
    where
        F: FnMut(&Entry<V>),
    {
        for entry in &self.entries {
            func(entry);
        }
    }

    /// Whether the map holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn hash_k<Q>(&self, k: &Q) -> KeyHash
    where
        Q: Hash + Eq,
    {
        let mut h = self.hash_builder.build_hasher();
        k.hash(&mut h);
        h.finish()
    }

    /// Binary search for a hash over the half-open range [left, right) of the
    /// storage, shared by find, insert and remove. A miss reports the exact
    /// index the hash belongs at, which holds up at the edges too: an empty
    /// map and a hash below everything stored both report 0, a hash above
    /// everything stored reports len.
    fn probe(&self, hash: KeyHash) -> Probe {
        let mut left = 0;
        let mut right = self.entries.len();

        while left < right {
            let mid = left + (right - left) / 2;
            let mid_hash = self.entries[mid].hash;

            if mid_hash < hash {
                left = mid + 1;
            } else if mid_hash > hash {
                right = mid;
            } else {
                return Probe::Hit(mid);
            }
        }

        Probe::Vacant(left)
    }

    /// Stores a pre-hashed value, the shared back half of insert and
    /// from_entries. Returns the value previously stored under the hash.
    fn insert_hashed(&mut self, hash: KeyHash, value: V) -> Option<V> {
        let previous = match self.probe(hash) {
            Probe::Hit(idx) => Some(mem::replace(&mut self.entries[idx].value, value)),
            Probe::Vacant(idx) => {
                self.entries.insert(idx, Entry { hash, value });
                None
            }
        };

        #[cfg(test)]
        self.sortedness_check();

        previous
    }

    #[cfg(test)]
    fn sortedness_check(&self) {
        // hashes must be strictly ascending front to back; anything else and
        // the binary search is probing garbage
        for pair in self.entries.windows(2) {
            assert!(pair[0].hash < pair[1].hash);
        }
    }
}

impl<K, V, S> Map<K, V> for OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, k: K, v: V) -> Option<V> {
        let hash_k = self.hash_k(&k);
        self.insert_hashed(hash_k, v)
    }

    fn find<'a, Q>(&'a self, k: &Q) -> Option<&'a V>
    where
        Q: Hash + Eq,
    {
        match self.probe(self.hash_k(k)) {
            Probe::Hit(idx) => Some(&self.entries[idx].value),
            Probe::Vacant(_) => None,
        }
    }

    fn find_mut<'a, Q>(&'a mut self, k: &Q) -> Option<&'a mut V>
    where
        Q: Hash + Eq,
    {
        match self.probe(self.hash_k(k)) {
            Probe::Hit(idx) => Some(&mut self.entries[idx].value),
            Probe::Vacant(_) => None,
        }
    }

    fn remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        Q: Hash + Eq,
    {
        let removed = match self.probe(self.hash_k(k)) {
            Probe::Hit(idx) => Some(self.entries.remove(idx).value),
            Probe::Vacant(_) => None,
        };

        #[cfg(test)]
        self.sortedness_check();

        removed
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V, S> Default for OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        OrderedHashMap::with_capacity_and_hash_builder(0, Default::default())
    }
}

impl<K, V, S> FromIterator<(KeyHash, V)> for OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (KeyHash, V)>,
    {
        OrderedHashMap::from_entries(iter)
    }
}

/// Iterator over map entries in ascending-hash order. It walks the backing
/// Vec directly, so it runs backwards for free.
pub struct Iter<'a, V> {
    inner: slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> DoubleEndedIterator for Iter<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<'a, K, V, S> IntoIterator for &'a OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = &'a Entry<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
