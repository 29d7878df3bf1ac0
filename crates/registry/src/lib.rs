//! Feature registry domain.
//!
//! This crate holds the one stateful concept of the demo: a named registry of
//! feature labels that can be appended to and listed. It performs no console
//! or file I/O; the `cli` crate renders what it returns.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Label newtypes (`RegistryName`, `Feature`) and `RunId` |
//! | [`registry`] | [`FeatureRegistry`] and the [`FeatureAdded`] notification |
//! | [`listing`] | [`FeatureListing`], the rendered enumeration |

pub mod identifiers;
pub mod listing;
pub mod registry;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use identifiers::{Feature, RegistryName, RunId};
pub use listing::FeatureListing;
pub use registry::{FeatureAdded, FeatureRegistry};
