//! A hash-map with a deterministic, platform-independent hasher.

use super::fx_hasher::FxHasher32;
use core::hash::BuildHasherDefault;

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`] keyed with [`FxHasher32`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, BuildHasherDefault<FxHasher32>>;
