//! Attribute discovery
//!
//! Scans a node's attribute applications by identity or by predicate. Name
//! lookups tolerate the `Attribute` naming suffix: the exact name is tried
//! first over the whole list, the suffix-flipped alias second.

use crate::is_type;
use typeprobe_graph::{AttributeInstance, TypeNode};

/// The alternate lookup name: the `Attribute` suffix stripped when present,
/// appended otherwise.
fn alias_name(name: &str) -> String {
    match name.strip_suffix("Attribute") {
        Some(stripped) => stripped.to_string(),
        None => format!("{name}Attribute"),
    }
}

/// Returns the first attribute whose class satisfies the predicate and
/// whose class declares exactly `expected_generic_arity` type parameters.
///
/// The arity constraint is on the attribute class's own declaration, not
/// on the application.
pub fn find_attribute_matching<'a>(
    node: &'a TypeNode,
    predicate: impl Fn(&TypeNode) -> bool,
    expected_generic_arity: usize,
) -> Option<&'a AttributeInstance> {
    node.attributes.iter().find(|attribute| {
        predicate(&attribute.class) && attribute.class.type_parameters == expected_generic_arity
    })
}

/// Returns every attribute whose class satisfies the predicate and arity
/// constraint, in declaration order.
pub fn find_attributes_matching<'a>(
    node: &'a TypeNode,
    predicate: impl Fn(&TypeNode) -> bool,
    expected_generic_arity: usize,
) -> Vec<&'a AttributeInstance> {
    node.attributes
        .iter()
        .filter(|attribute| {
            predicate(&attribute.class) && attribute.class.type_parameters == expected_generic_arity
        })
        .collect()
}

/// Returns the first attribute of the given identity, trying the exact
/// name before its `Attribute`-suffix alias.
pub fn find_attribute<'a>(
    node: &'a TypeNode,
    name: &str,
    namespace: &str,
    expected_generic_arity: usize,
) -> Option<&'a AttributeInstance> {
    find_attribute_matching(
        node,
        |class| is_type(class, name, namespace, None),
        expected_generic_arity,
    )
    .or_else(|| {
        let alias = alias_name(name);
        find_attribute_matching(
            node,
            |class| is_type(class, &alias, namespace, None),
            expected_generic_arity,
        )
    })
}

/// Returns every attribute of the given identity in declaration order,
/// trying the exact name before its `Attribute`-suffix alias.
pub fn find_attributes<'a>(
    node: &'a TypeNode,
    name: &str,
    namespace: &str,
    expected_generic_arity: usize,
) -> Vec<&'a AttributeInstance> {
    let exact = find_attributes_matching(
        node,
        |class| is_type(class, name, namespace, None),
        expected_generic_arity,
    );
    if !exact.is_empty() {
        return exact;
    }
    let alias = alias_name(name);
    find_attributes_matching(
        node,
        |class| is_type(class, &alias, namespace, None),
        expected_generic_arity,
    )
}

/// Returns whether the node is annotated with the given attribute identity.
pub fn has_attribute(
    node: &TypeNode,
    name: &str,
    namespace: &str,
    expected_generic_arity: usize,
) -> bool {
    find_attribute(node, name, namespace, expected_generic_arity).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeprobe_graph::{TypeHandle, TypeNode};

    fn track_attribute_class() -> TypeHandle {
        TypeNode::class("TrackAttribute", "Shop").into_handle()
    }

    #[test]
    fn test_suffix_alias_both_directions() {
        let tagged = TypeNode::class("Money", "Shop").with_attribute(track_attribute_class());

        assert!(has_attribute(&tagged, "Track", "Shop", 0));
        assert!(has_attribute(&tagged, "TrackAttribute", "Shop", 0));

        let bare = TypeNode::class("Money", "Shop")
            .with_attribute(TypeNode::class("Track", "Shop").into_handle());
        assert!(has_attribute(&bare, "TrackAttribute", "Shop", 0));
    }

    #[test]
    fn test_exact_name_tried_before_alias() {
        let exact = TypeNode::class("Track", "Shop").into_handle();
        let suffixed = track_attribute_class();
        let tagged = TypeNode::class("Money", "Shop")
            .with_attribute(suffixed)
            .with_attribute(exact.clone());

        // "Track" matches the exact class even though the suffixed one
        // appears earlier in declaration order.
        let found = find_attribute(&tagged, "Track", "Shop", 0).unwrap();
        assert!(std::sync::Arc::ptr_eq(&found.class, &exact));
    }

    #[test]
    fn test_arity_constraint_is_on_the_class_declaration() {
        let generic_class = TypeNode::class("TrackAttribute", "Shop").generic(1).into_handle();
        let tagged = TypeNode::class("Money", "Shop").with_attribute(generic_class);

        assert!(!has_attribute(&tagged, "Track", "Shop", 0));
        assert!(has_attribute(&tagged, "Track", "Shop", 1));
    }

    #[test]
    fn test_all_matches_in_declaration_order() {
        let first = track_attribute_class();
        let second = track_attribute_class();
        let other = TypeNode::class("IgnoreAttribute", "Shop").into_handle();
        let tagged = TypeNode::class("Money", "Shop")
            .with_attribute(first.clone())
            .with_attribute(other)
            .with_attribute(second.clone());

        let found = find_attributes(&tagged, "Track", "Shop", 0);
        assert_eq!(found.len(), 2);
        assert!(std::sync::Arc::ptr_eq(&found[0].class, &first));
        assert!(std::sync::Arc::ptr_eq(&found[1].class, &second));
    }

    #[test]
    fn test_predicate_lookup() {
        let tagged = TypeNode::class("Money", "Shop").with_attribute(track_attribute_class());
        let found = find_attribute_matching(
            &tagged,
            |class| class.name.starts_with("Track"),
            0,
        );
        assert!(found.is_some());
        assert!(find_attributes_matching(&tagged, |_| true, 3).is_empty());
    }
}
