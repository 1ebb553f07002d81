//! Structural type-identity matching
//!
//! Identity is the qualified name: ordinal equality on the simple name plus
//! exact full-path equality on the namespace. When a comparison target
//! carries generic arguments, identity extends pairwise and recursively
//! over corresponding arguments in declared order.

use std::fmt;
use typeprobe_graph::TypeNode;

/// Returns whether the node has the given name and containing namespace.
///
/// When `generic` is given, the node's being-generic must match it as well.
pub fn is_type(node: &TypeNode, name: &str, namespace: &str, generic: Option<bool>) -> bool {
    if node.name != name || !node.namespace.matches_dotted(namespace) {
        return false;
    }
    generic.is_none_or(|expected| node.is_generic == expected)
}

/// Returns whether the node has the given qualified name, e.g. "System.Object".
///
/// A string without a separator, or with nothing before it, cannot be split
/// into a name and namespace and never matches.
pub fn is_type_qualified(node: &TypeNode, qualified_name: &str, generic: Option<bool>) -> bool {
    match qualified_name.rfind('.') {
        Some(index) if index >= 1 => {
            let (namespace, dotted_name) = qualified_name.split_at(index);
            is_type(node, &dotted_name[1..], namespace, generic)
        }
        _ => false,
    }
}

/// A closed-type descriptor used as a comparison target.
///
/// References are never query subjects; they only describe the identity a
/// node is matched against, including concrete generic arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// Simple type name
    pub name: String,
    /// Dotted namespace path
    pub namespace: String,
    /// Concrete type arguments, in declared order
    pub arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// Create a non-generic reference.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            arguments: Vec::new(),
        }
    }

    /// Close the reference over concrete arguments.
    pub fn with_arguments<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = TypeRef>,
    {
        self.arguments = arguments.into_iter().collect();
        self
    }

    /// Qualified name including arguments, e.g. `System.Nullable<System.Int32>`.
    pub fn qualified_name(&self) -> String {
        let base = if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        };
        if self.arguments.is_empty() {
            return base;
        }
        let arguments: Vec<String> = self
            .arguments
            .iter()
            .map(TypeRef::qualified_name)
            .collect();
        format!("{}<{}>", base, arguments.join(", "))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// Returns whether the node matches the reference.
///
/// When the reference carries arguments, the node must be closed over the
/// same number of arguments, each matching pairwise in declared order.
pub fn is_type_ref(node: &TypeNode, reference: &TypeRef) -> bool {
    if !is_type(node, &reference.name, &reference.namespace, None) {
        return false;
    }
    if reference.arguments.is_empty() {
        return true;
    }
    node.type_arguments.len() == reference.arguments.len()
        && node
            .type_arguments
            .iter()
            .zip(&reference.arguments)
            .all(|(argument, expected)| is_type_ref(argument, expected))
}

/// Returns whether two nodes denote the same qualified name.
pub fn same_qualified_name(a: &TypeNode, b: &TypeNode) -> bool {
    a.name == b.name && a.namespace == b.namespace
}

/// Returns whether two nodes denote the same identity, including pairwise
/// recursive identity of their type arguments.
pub fn same_identity(a: &TypeNode, b: &TypeNode) -> bool {
    same_qualified_name(a, b)
        && a.type_arguments.len() == b.type_arguments.len()
        && a.type_arguments
            .iter()
            .zip(&b.type_arguments)
            .all(|(x, y)| same_identity(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeprobe_graph::TypeNode;

    #[test]
    fn test_name_and_namespace_must_both_match() {
        let node = TypeNode::value_type("Int32", "System");
        assert!(is_type(&node, "Int32", "System", None));
        assert!(!is_type(&node, "Int64", "System", None));
        assert!(!is_type(&node, "Int32", "Shop", None));
        assert!(!is_type(&node, "Int32", "System.Collections", None));
    }

    #[test]
    fn test_generic_flag_constraint() {
        let open = TypeNode::class("Box", "Shop").generic(1);
        assert!(is_type(&open, "Box", "Shop", Some(true)));
        assert!(!is_type(&open, "Box", "Shop", Some(false)));

        let plain = TypeNode::class("Box", "Shop");
        assert!(is_type(&plain, "Box", "Shop", Some(false)));
        assert!(is_type(&plain, "Box", "Shop", None));
    }

    #[test]
    fn test_qualified_split_on_last_separator() {
        let node = TypeNode::interface("IEnumerable", "System.Collections");
        assert!(is_type_qualified(&node, "System.Collections.IEnumerable", None));
        assert!(!is_type_qualified(&node, "Collections.IEnumerable", None));
    }

    #[test]
    fn test_malformed_qualified_name_is_false_not_an_error() {
        let node = TypeNode::class("Object", "System");
        assert!(!is_type_qualified(&node, "Object", None));
        assert!(!is_type_qualified(&node, ".Object", None));
        assert!(!is_type_qualified(&node, "", None));
    }

    #[test]
    fn test_reference_argument_order_is_significant() {
        let string = TypeNode::class("String", "System").into_handle();
        let int32 = TypeNode::value_type("Int32", "System").into_handle();
        let pair = TypeNode::class("Pair", "Shop").with_arguments([int32, string]);

        let forward = TypeRef::new("Pair", "Shop").with_arguments([
            TypeRef::new("Int32", "System"),
            TypeRef::new("String", "System"),
        ]);
        let backward = TypeRef::new("Pair", "Shop").with_arguments([
            TypeRef::new("String", "System"),
            TypeRef::new("Int32", "System"),
        ]);

        assert!(is_type_ref(&pair, &forward));
        assert!(!is_type_ref(&pair, &backward));
    }

    #[test]
    fn test_reference_without_arguments_ignores_instantiation() {
        let int32 = TypeNode::value_type("Int32", "System").into_handle();
        let boxed = TypeNode::class("Box", "Shop").with_arguments([int32]);
        assert!(is_type_ref(&boxed, &TypeRef::new("Box", "Shop")));
    }

    #[test]
    fn test_reference_arity_mismatch() {
        let int32 = TypeNode::value_type("Int32", "System").into_handle();
        let boxed = TypeNode::class("Box", "Shop").with_arguments([int32]);
        let two_args = TypeRef::new("Box", "Shop").with_arguments([
            TypeRef::new("Int32", "System"),
            TypeRef::new("Int32", "System"),
        ]);
        assert!(!is_type_ref(&boxed, &two_args));
    }

    #[test]
    fn test_same_identity_recurses_into_arguments() {
        let int32 = || TypeNode::value_type("Int32", "System").into_handle();
        let string = || TypeNode::class("String", "System").into_handle();

        let a = TypeNode::class("Pair", "Shop").with_arguments([int32(), string()]);
        let b = TypeNode::class("Pair", "Shop").with_arguments([int32(), string()]);
        let swapped = TypeNode::class("Pair", "Shop").with_arguments([string(), int32()]);

        assert!(same_identity(&a, &b));
        assert!(!same_identity(&a, &swapped));
        assert!(same_qualified_name(&a, &swapped));
    }
}
