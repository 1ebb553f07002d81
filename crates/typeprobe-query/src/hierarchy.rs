//! Predicate-driven hierarchy and interface-closure search

use crate::is_type;
use typeprobe_graph::{TypeHandle, TypeNode};

/// Returns whether the node is the universal root type (`System.Object`).
pub fn is_universal_root(node: &TypeNode) -> bool {
    is_type(node, "Object", "System", None)
}

/// Scans the base-type chain strictly above the node for the first ancestor
/// satisfying the predicate.
///
/// The node itself is never tested. The walk stops at the universal root,
/// which is excluded from the results even when the predicate would accept it.
pub fn walk_base_types<'a>(
    node: &'a TypeNode,
    predicate: impl Fn(&TypeNode) -> bool,
) -> Option<&'a TypeHandle> {
    let mut current = node.base_type.as_ref();
    while let Some(ancestor) = current {
        // End of inheritance chain
        if is_universal_root(ancestor) {
            break;
        }
        if predicate(ancestor) {
            return Some(ancestor);
        }
        current = ancestor.base_type.as_ref();
    }
    None
}

/// Tests the node itself, then each member of its flattened interface
/// closure in the host-given order; the first match wins.
pub fn walk_interfaces<'a>(
    node: &'a TypeHandle,
    predicate: impl Fn(&TypeNode) -> bool,
) -> Option<&'a TypeHandle> {
    if predicate(node) {
        return Some(node);
    }
    for interface in &node.interface_closure {
        if predicate(interface) {
            return Some(interface);
        }
    }
    None
}
