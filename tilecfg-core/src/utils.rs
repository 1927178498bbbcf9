//! Lookups shared by the configuration checks.
pub mod keysym_lookup;
