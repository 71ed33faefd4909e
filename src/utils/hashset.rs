//! A hash-set with a deterministic, platform-independent hasher.

use super::fx_hasher::FxHasher32;
use core::hash::BuildHasherDefault;

/// Hashset using [`hashbrown::HashSet`] keyed with [`FxHasher32`].
pub type HashSet<K> = hashbrown::HashSet<K, BuildHasherDefault<FxHasher32>>;
