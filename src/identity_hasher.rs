//! A hasher which just proxies for the u64 it's given. Because iteration
//! order of OrderedHashMap is ascending-hash order, hashing u64 keys through
//! this makes the map iterate in plain numeric key order - and makes tests
//! easy to reason about, since every key is its own hash.

use std::hash::{BuildHasher, Hasher};

/// Proxies u64's for themselves.
pub struct IdentityHasher(u64);

impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        assert_eq!(8, bytes.len()); // only accept u64's
        for byte in bytes.iter().rev() {
            self.0 = (self.0 << 8) | *byte as u64;
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Builds new IdentityHashers on demand.
#[derive(Default)]
pub struct BuildIdentityHasher;

impl BuildHasher for BuildIdentityHasher {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher(0)
    }
}
