//! Type-identity and capability queries
//!
//! The query engine of typeprobe. Given a read-only symbol-graph snapshot
//! supplied by a host front-end, this crate answers structural questions
//! about declared types:
//! - Identity matching by qualified name, namespace, and generic arguments
//! - Generic introspection and optional-wrapper detection
//! - Predicate-driven search over the base-type chain and the flattened
//!   interface closure
//! - Capability probes: numeric, comparable, enumerable with element type,
//!   equals override, user-declared conversion operators
//! - Attribute discovery by identity or predicate
//!
//! Every query is a pure, synchronous read. Negative outcomes are `false`,
//! `None`, or empty collections, never errors.

mod attributes;
mod capability;
mod generics;
mod hierarchy;
mod identity;
mod native;
mod optional;

pub use attributes::*;
pub use capability::*;
pub use generics::*;
pub use hierarchy::*;
pub use identity::*;
pub use native::*;
pub use optional::*;
