//! The generic, schema-aware resource value tree and its metadata.
//!
//! # Key Types
//!
//! - [`ResourceNode`] - one resource document addressed through schema
//!   attribute definitions
//! - [`Meta`] - server-managed resource metadata

pub mod meta;
pub mod node;

pub use meta::Meta;
pub use node::ResourceNode;
