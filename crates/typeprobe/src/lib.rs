//! Type-identity and capability queries for code generation
//!
//! This crate answers structural questions about types declared in a
//! program's symbol graph, for consumption by a code-generation decision
//! layer:
//! - Identity matching by qualified name, namespace, and generic arguments
//! - Hierarchy and interface-closure search driven by predicates
//! - Capability probes: numeric, comparable, enumerable with element type,
//!   equals override, conversion operators
//! - Attribute discovery tolerant of the `Attribute` naming suffix
//! - Canonical expression templates derived from capability facts
//!
//! The symbol graph is supplied by a host front-end as a read-only
//! snapshot; every query is a pure, synchronous read.
//!
//! # Example
//!
//! ```
//! use typeprobe::graph::TypeNode;
//! use typeprobe::query::{as_enumerable, is_numeric};
//!
//! let int32 = TypeNode::value_type("Int32", "System").into_handle();
//! assert!(is_numeric(&int32, false));
//! assert!(as_enumerable(&int32).is_none());
//! ```

// Re-export all public APIs from internal crates
pub use typeprobe_graph as graph;
pub use typeprobe_query as query;
pub use typeprobe_synth as synth;
pub use typeprobe_text as text;

// Convenience re-exports
pub use typeprobe_graph::{
    Accessibility, AttributeInstance, GraphSnapshot, MemberKind, MemberNode, NamespacePath,
    SnapshotError, TypeHandle, TypeKind, TypeNode,
};
pub use typeprobe_query::{Enumerable, NativeType, TypeRef};
