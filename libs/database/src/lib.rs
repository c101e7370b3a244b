//! Database connectors, one backend per feature flag.

#[cfg(feature = "mongodb")]
pub mod mongodb;
