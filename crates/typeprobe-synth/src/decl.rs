//! Declaration rendering for emitted source

use typeprobe_graph::{TypeKind, TypeNode};

/// Gets the declaration name of the node's kind. A record declaration
/// renders as `record class` or `record struct`.
pub fn type_kind_name(node: &TypeNode) -> String {
    match node.kind {
        TypeKind::Class if node.is_record => "record class".to_string(),
        TypeKind::Struct if node.is_record => "record struct".to_string(),
        _ => node.kind.keyword().to_string(),
    }
}

/// Gets the declaration header of a class, record, or interface, e.g.
/// `public abstract partial class`.
pub fn object_declaration(node: &TypeNode, include_partial: bool) -> String {
    let accessibility = node.accessibility.keyword();
    let static_or_empty = if node.is_static { "static " } else { "" };
    let abstract_or_empty = if node.is_abstract && node.kind == TypeKind::Class {
        "abstract "
    } else {
        ""
    };
    let partial_or_empty = if include_partial && node.kind != TypeKind::Enum {
        "partial "
    } else {
        ""
    };

    format!(
        "{accessibility} {static_or_empty}{abstract_or_empty}{partial_or_empty}{kind}",
        kind = type_kind_name(node)
    )
}

/// Globally qualified name, e.g. `global::System.String`, without
/// generic arguments.
pub fn global_name(node: &TypeNode) -> String {
    format!("global::{}", node.qualified_name())
}

/// Globally qualified name including type arguments, recursively, e.g.
/// `global::System.Nullable<global::System.Int32>`.
pub fn global_name_with_arguments(node: &TypeNode) -> String {
    if node.type_arguments.is_empty() {
        return global_name(node);
    }
    let arguments: Vec<String> = node
        .type_arguments
        .iter()
        .map(|argument| global_name_with_arguments(argument))
        .collect();
    format!("{}<{}>", global_name(node), arguments.join(", "))
}
