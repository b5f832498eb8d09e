//! A quick and compact ordered hash map: entries live in one contiguous Vec
//! sorted by key hash, lookups binary-search it, and iteration comes out in
//! ascending-hash order. Keys are hashed and discarded, never stored.
//!
//! ```
//! use ordered_hash_map::{Map, OrderedHashMap};
//!
//! let mut map: OrderedHashMap<&str, u32> = OrderedHashMap::new();
//!
//! map.insert("alpha", 1);
//! map.insert("bravo", 2);
//!
//! assert_eq!(Some(&2), map.find(&"bravo"));
//! assert_eq!(Some(2), map.remove(&"bravo"));
//! assert_eq!(None, map.find(&"bravo"));
//! ```

mod identity_hasher;
mod map;
mod ordered_hash_map;
#[cfg(feature = "shared_map")]
mod shared_map;

pub use crate::identity_hasher::{BuildIdentityHasher, IdentityHasher};
pub use crate::map::Map;
pub use crate::ordered_hash_map::{Entry, Iter, KeyHash, OrderedHashMap};
#[cfg(feature = "shared_map")]
pub use crate::shared_map::SharedMap;
