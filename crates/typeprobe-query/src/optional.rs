//! Optional-wrapper detection
//!
//! The canonical single-argument optional wrapper is `System.Nullable`.

use crate::is_type;
use typeprobe_graph::{TypeHandle, TypeNode};

/// Returns whether the node is an instantiation of the optional wrapper.
pub fn is_optional(node: &TypeNode) -> bool {
    optional_underlying(node).is_some()
}

/// Returns the wrapped type when the node is an instantiation of the
/// optional wrapper.
pub fn optional_underlying(node: &TypeNode) -> Option<&TypeHandle> {
    if is_type(node, "Nullable", "System", Some(true)) {
        node.type_arguments.first()
    } else {
        None
    }
}
