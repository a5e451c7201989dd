//! Various unsorted logical operators and collection aliases.

#[cfg(feature = "enhanced-determinism")]
pub(crate) mod fx_hasher;
pub mod hashmap;
pub mod hashset;
