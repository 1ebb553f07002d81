//! Symbol-graph snapshot model
//!
//! This crate defines the read-only symbol-graph snapshot consumed by the
//! typeprobe query engine:
//! - Type, member, and attribute nodes carrying structural identity data
//! - Namespace paths with ordinal, order-sensitive comparison
//! - A snapshot registry with JSON interchange for host front-ends
//!
//! The graph is built and owned by a host front-end (e.g. a compiler's
//! semantic model). Nodes are frozen into shared [`TypeHandle`]s and never
//! mutated afterwards; every query over them is a pure read.

mod node;
mod snapshot;

pub use node::*;
pub use snapshot::*;
