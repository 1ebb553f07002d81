//! Generic introspection

use crate::same_identity;
use typeprobe_graph::{TypeHandle, TypeNode};

/// Returns whether the node is a generic type.
pub fn is_generic(node: &TypeNode) -> bool {
    node.is_generic
}

/// Returns whether the node is generic with exactly the given number of
/// declared type parameters.
pub fn is_generic_with_arity(node: &TypeNode, type_parameters: usize) -> bool {
    node.is_generic && node.type_parameters == type_parameters
}

/// Returns the type-argument list, only when the node is generic with
/// exactly the given number of declared type parameters.
pub fn generic_arguments(node: &TypeNode, type_parameters: usize) -> Option<&[TypeHandle]> {
    if is_generic_with_arity(node, type_parameters) {
        Some(&node.type_arguments)
    } else {
        None
    }
}

/// Returns whether the node is closed over exactly one type argument that
/// is identity-equal to `required`.
pub fn has_single_argument(node: &TypeNode, required: &TypeNode) -> bool {
    match node.type_arguments.as_slice() {
        [argument] => same_identity(argument, required),
        _ => false,
    }
}
