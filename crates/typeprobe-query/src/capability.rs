//! Capability probes
//!
//! Queries determining whether a type structurally satisfies a behavioral
//! contract: numeric identity, ordering, enumeration with an element type,
//! an equality override, or user-declared conversion operators. All probes
//! are built from identity matching, generic introspection, optional
//! unwrapping, and hierarchy search.

use crate::{
    NativeType, has_single_argument, is_type, optional_underlying, walk_interfaces,
};
use typeprobe_graph::{Accessibility, MemberKind, MemberNode, TypeHandle, TypeNode};

/// Member names of user-declared conversion operators.
const CONVERSION_OPERATOR_NAMES: [&str; 2] = ["op_Implicit", "op_Explicit"];

/// Generic container interfaces probed for an element type, most specific
/// first. A type often satisfies several of these at once (an ordered list
/// is also a read-only collection); the first match decides the element.
const ELEMENT_INTERFACE_PRIORITY: [&str; 7] = [
    "IList",
    "IReadOnlyList",
    "ISet",
    "IReadOnlySet",
    "ICollection",
    "IReadOnlyCollection",
    "IEnumerable",
];

fn see_through(node: &TypeNode, see_through_optional: bool) -> &TypeNode {
    if see_through_optional {
        if let Some(underlying) = optional_underlying(node) {
            return underlying;
        }
    }
    node
}

/// Returns whether the node is one of the primitive numeric identities.
///
/// No user-defined type qualifies, regardless of the operators it declares.
/// With `see_through_optional`, an optional wrapper around a numeric type
/// also qualifies.
pub fn is_numeric(node: &TypeNode, see_through_optional: bool) -> bool {
    let subject = see_through(node, see_through_optional);
    NativeType::ALL.iter().any(|native| {
        native.is_numeric() && is_type(subject, native.name(), native.namespace(), None)
    })
}

/// Returns whether the node's interface search carries the one-argument
/// ordering interface closed over the node itself.
pub fn is_self_comparable(node: &TypeHandle) -> bool {
    walk_interfaces(node, |interface| {
        is_type(interface, "IComparable", "System", Some(true))
            && has_single_argument(interface, node)
    })
    .is_some()
}

/// Returns whether the node's interface search carries the one-argument
/// equality interface closed over the node itself.
pub fn is_self_equatable(node: &TypeHandle) -> bool {
    walk_interfaces(node, |interface| {
        is_type(interface, "IEquatable", "System", Some(true))
            && has_single_argument(interface, node)
    })
    .is_some()
}

/// Returns whether the node's interface closure contains any instantiation
/// of the ordering interface, generic or not.
///
/// The optional wrapper itself never implements ordering; with
/// `see_through_optional` the underlying type is probed instead. Beware
/// that a positive answer across the optional boundary says nothing about
/// how to invoke the comparison on the wrapper.
pub fn is_comparable(node: &TypeNode, see_through_optional: bool) -> bool {
    let subject = see_through(node, see_through_optional);
    subject
        .interface_closure
        .iter()
        .any(|interface| is_type(interface, "IComparable", "System", None))
}

/// Result of an enumerable probe.
#[derive(Debug, Clone, Copy)]
pub enum Enumerable<'a> {
    /// A generic container interface matched; its sole argument is the element.
    Typed(&'a TypeHandle),
    /// Only the non-generic marker interface matched.
    Untyped,
}

impl<'a> Enumerable<'a> {
    /// The element type, when a generic container interface matched.
    pub fn element(&self) -> Option<&'a TypeHandle> {
        match self {
            Self::Typed(element) => Some(element),
            Self::Untyped => None,
        }
    }
}

/// Returns whether the node is, or implements, the non-generic enumerable
/// marker interface, and if so the element type of the most specific
/// generic container interface it satisfies.
pub fn as_enumerable(node: &TypeHandle) -> Option<Enumerable<'_>> {
    walk_interfaces(node, |interface| {
        is_type(interface, "IEnumerable", "System.Collections", Some(false))
    })?;

    for interface_name in ELEMENT_INTERFACE_PRIORITY {
        let matched = walk_interfaces(node, |interface| {
            is_type(interface, interface_name, "System.Collections.Generic", Some(true))
        });
        if let Some(interface) = matched {
            return match interface.type_arguments.first() {
                Some(element) => Some(Enumerable::Typed(element)),
                None => Some(Enumerable::Untyped),
            };
        }
    }

    Some(Enumerable::Untyped)
}

/// Returns whether the node carries an override of the universal equality
/// method: a non-static, non-generic method named `Equals` taking exactly
/// one parameter of the universal object type and flagged as an override.
///
/// A same-named member that merely shadows without overriding does not
/// count. The scan covers the members the host made visible on the node.
pub fn has_equals_override(node: &TypeNode) -> bool {
    node.members.iter().any(|member| {
        member.kind == MemberKind::Method
            && member.name == "Equals"
            && member.is_override
            && !member.is_static
            && member.generic_arity == 0
            && matches!(
                member.parameter_types.as_slice(),
                [parameter] if is_type(parameter, "Object", "System", None)
            )
    })
}

fn is_public_conversion_operator(member: &MemberNode) -> bool {
    member.kind == MemberKind::Method
        && member.accessibility == Accessibility::Public
        && CONVERSION_OPERATOR_NAMES.contains(&member.name.as_str())
}

/// Returns whether the node declares a publicly accessible conversion
/// operator producing the given identity. A node never converts to itself.
pub fn has_conversion_to(node: &TypeNode, name: &str, namespace: &str) -> bool {
    !is_type(node, name, namespace, None)
        && node.members.iter().any(|member| {
            is_public_conversion_operator(member)
                && member
                    .return_type
                    .as_deref()
                    .is_some_and(|return_type| is_type(return_type, name, namespace, None))
        })
}

/// Returns whether the node declares a publicly accessible conversion
/// operator accepting the given identity as its sole parameter. A node
/// never converts from itself.
pub fn has_conversion_from(node: &TypeNode, name: &str, namespace: &str) -> bool {
    !is_type(node, name, namespace, None)
        && node.members.iter().any(|member| {
            is_public_conversion_operator(member)
                && matches!(
                    member.parameter_types.as_slice(),
                    [parameter] if is_type(parameter, name, namespace, None)
                )
        })
}

/// Enumerates the platform primitives from which the node is convertible,
/// lazily, in the canonical probe order.
///
/// The sequence is finite and restartable: calling again yields a fresh
/// walk over the same snapshot. With `skip_for_system_types`, a node whose
/// namespace is exactly the root platform namespace yields nothing
/// regardless of its actual operators.
pub fn conversions_from_natives(
    node: &TypeNode,
    skip_for_system_types: bool,
) -> impl Iterator<Item = NativeType> + '_ {
    let skip = skip_for_system_types && node.namespace.is_exactly(&["System"]);
    NativeType::ALL
        .into_iter()
        .filter(move |native| !skip && has_conversion_from(node, native.name(), native.namespace()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeprobe_graph::TypeNode;

    fn int32() -> TypeHandle {
        TypeNode::value_type("Int32", "System").into_handle()
    }

    fn nullable_of(underlying: TypeHandle) -> TypeNode {
        TypeNode::value_type("Nullable", "System").with_arguments([underlying])
    }

    #[test]
    fn test_numeric_identities() {
        assert!(is_numeric(&int32(), false));
        assert!(is_numeric(&TypeNode::value_type("Decimal", "System"), false));
        assert!(is_numeric(&TypeNode::value_type("UIntPtr", "System"), false));
        assert!(!is_numeric(&TypeNode::value_type("Boolean", "System"), false));
        assert!(!is_numeric(&TypeNode::value_type("Char", "System"), false));
        assert!(!is_numeric(&TypeNode::class("String", "System"), false));
        // Operators do not make a user-defined type numeric
        assert!(!is_numeric(&TypeNode::value_type("Money", "Shop"), false));
    }

    #[test]
    fn test_numeric_through_optional() {
        let wrapped = nullable_of(int32());
        assert!(!is_numeric(&wrapped, false));
        assert!(is_numeric(&wrapped, true));
    }

    #[test]
    fn test_self_comparable_requires_matching_argument() {
        let money = TypeNode::class("Money", "Shop");
        let comparable_money = TypeNode::interface("IComparable", "System")
            .with_arguments([money.clone().into_handle()])
            .into_handle();
        let comparable_int = TypeNode::interface("IComparable", "System")
            .with_arguments([int32()])
            .into_handle();

        let self_comparable = money.clone().with_interface(comparable_money).into_handle();
        assert!(is_self_comparable(&self_comparable));

        let other_comparable = money.with_interface(comparable_int).into_handle();
        assert!(!is_self_comparable(&other_comparable));
    }

    #[test]
    fn test_self_equatable() {
        let money = TypeNode::class("Money", "Shop");
        let equatable_money = TypeNode::interface("IEquatable", "System")
            .with_arguments([money.clone().into_handle()])
            .into_handle();

        let self_equatable = money.clone().with_interface(equatable_money).into_handle();
        assert!(is_self_equatable(&self_equatable));
        assert!(!is_self_comparable(&self_equatable));
        assert!(!is_self_equatable(&money.into_handle()));
    }

    #[test]
    fn test_equals_override_shape() {
        let object = TypeNode::class("Object", "System").into_handle();

        let overriding = TypeNode::class("Money", "Shop").with_member(
            MemberNode::method("Equals")
                .with_parameter(object.clone())
                .marked_override(),
        );
        assert!(has_equals_override(&overriding));

        // Shadowing without overriding does not count
        let shadowing = TypeNode::class("Money", "Shop")
            .with_member(MemberNode::method("Equals").with_parameter(object.clone()));
        assert!(!has_equals_override(&shadowing));

        // Wrong parameter type does not count
        let unrelated = TypeNode::class("Money", "Shop").with_member(
            MemberNode::method("Equals")
                .with_parameter(int32())
                .marked_override(),
        );
        assert!(!has_equals_override(&unrelated));

        // Static or generic members do not count
        let static_member = TypeNode::class("Money", "Shop").with_member(
            MemberNode::method("Equals")
                .with_parameter(object.clone())
                .marked_override()
                .static_member(),
        );
        assert!(!has_equals_override(&static_member));

        let generic_member = TypeNode::class("Money", "Shop").with_member(
            MemberNode::method("Equals")
                .with_parameter(object)
                .marked_override()
                .with_generic_arity(1),
        );
        assert!(!has_equals_override(&generic_member));
    }

    #[test]
    fn test_conversion_operators() {
        let node = TypeNode::class("Money", "Shop")
            .with_member(
                MemberNode::method("op_Implicit")
                    .with_parameter(int32())
                    .with_return_type(TypeNode::class("Money", "Shop").into_handle()),
            )
            .with_member(
                MemberNode::method("op_Explicit")
                    .with_parameter(TypeNode::class("Money", "Shop").into_handle())
                    .with_return_type(TypeNode::class("String", "System").into_handle()),
            );

        assert!(has_conversion_from(&node, "Int32", "System"));
        assert!(has_conversion_to(&node, "String", "System"));
        assert!(!has_conversion_from(&node, "Int64", "System"));
        // Self-conversion is never reported
        assert!(!has_conversion_to(&node, "Money", "Shop"));
        assert!(!has_conversion_from(&node, "Money", "Shop"));
    }

    #[test]
    fn test_conversion_requires_public_operator() {
        let hidden = TypeNode::class("Money", "Shop").with_member(
            MemberNode::method("op_Implicit")
                .with_parameter(int32())
                .with_accessibility(Accessibility::Internal),
        );
        assert!(!has_conversion_from(&hidden, "Int32", "System"));

        // An ordinary method named differently never counts
        let plain = TypeNode::class("Money", "Shop")
            .with_member(MemberNode::method("From").with_parameter(int32()));
        assert!(!has_conversion_from(&plain, "Int32", "System"));
    }
}
