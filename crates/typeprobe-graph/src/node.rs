//! Symbol-graph nodes
//!
//! Types, members, and attribute applications as supplied by the host
//! front-end. All recursive positions use [`TypeHandle`] so a single node
//! can appear as a base type, an interface instantiation, and a type
//! argument without duplication.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a frozen type node.
///
/// Handles are cheap to clone and safe to query from multiple threads;
/// the node behind a handle is immutable for the lifetime of the snapshot.
pub type TypeHandle = Arc<TypeNode>;

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// Reference type declared as a class
    Class,
    /// Value type declared as a struct
    Struct,
    /// Interface type
    Interface,
    /// Enumeration type
    Enum,
    /// Array type
    Array,
    /// Dynamically typed placeholder
    Dynamic,
}

impl TypeKind {
    /// Get the declaration keyword for this kind.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Array => "array",
            Self::Dynamic => "dynamic",
        }
    }
}

/// Declared accessibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accessibility {
    /// Public access (default)
    #[default]
    Public,
    /// Internal access
    Internal,
    /// Protected access
    Protected,
    /// Protected-or-internal access
    ProtectedInternal,
    /// Private access
    Private,
}

impl Accessibility {
    /// Get the declaration keyword for this accessibility.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::ProtectedInternal => "protected internal",
            Self::Private => "private",
        }
    }
}

/// Ordered namespace segments of a declared type.
///
/// Comparison is ordinal and order-sensitive on whole segments; nothing in
/// the engine performs prefix or suffix matching on namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespacePath {
    segments: SmallVec<[String; 3]>,
}

impl NamespacePath {
    /// Create the global (empty) namespace.
    pub fn global() -> Self {
        Self::default()
    }

    /// Parse a dot-separated namespace string (e.g. "System.Collections").
    pub fn from_dotted(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Create a namespace from explicit segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The path segments in declaration order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this is the global namespace.
    pub fn is_global(&self) -> bool {
        self.segments.is_empty()
    }

    /// Exact full-path comparison against a dotted string, without allocating.
    pub fn matches_dotted(&self, dotted: &str) -> bool {
        if dotted.is_empty() {
            return self.is_global();
        }
        let mut parts = dotted.split('.');
        for segment in &self.segments {
            match parts.next() {
                Some(part) if part == segment => {}
                _ => return false,
            }
        }
        parts.next().is_none()
    }

    /// Exact comparison against explicit segments.
    pub fn is_exactly(&self, segments: &[&str]) -> bool {
        self.segments.len() == segments.len()
            && self.segments.iter().zip(segments).all(|(a, b)| a == b)
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<&str> for NamespacePath {
    fn from(dotted: &str) -> Self {
        Self::from_dotted(dotted)
    }
}

impl From<String> for NamespacePath {
    fn from(dotted: String) -> Self {
        Self::from_dotted(&dotted)
    }
}

/// A declared type in the symbol graph.
///
/// The base-type chain is finite, acyclic, and terminates at the universal
/// root (`System.Object`), which itself has no base type. The interface
/// closure is the transitive closure as flattened by the host; the engine
/// never walks interface-of-interface edges itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeNode {
    /// Simple type name, without namespace or argument list
    pub name: String,
    /// Containing namespace path
    #[serde(default)]
    pub namespace: NamespacePath,
    /// Declaration kind
    pub kind: TypeKind,
    /// Whether the type is generic
    #[serde(default)]
    pub is_generic: bool,
    /// Declared generic-parameter count (independent of the instantiation)
    #[serde(default)]
    pub type_parameters: usize,
    /// Type arguments of a closed instantiation, in declared order
    #[serde(default)]
    pub type_arguments: Vec<TypeHandle>,
    /// Base type, absent for interfaces and for the universal root
    #[serde(default)]
    pub base_type: Option<TypeHandle>,
    /// Transitive interface closure, flattened by the host, order preserved
    #[serde(default)]
    pub interface_closure: Vec<TypeHandle>,
    /// Whether the type is a value type
    #[serde(default)]
    pub is_value_type: bool,
    /// Whether the type is abstract
    #[serde(default)]
    pub is_abstract: bool,
    /// Whether the type is static
    #[serde(default)]
    pub is_static: bool,
    /// Whether the type is a record declaration
    #[serde(default)]
    pub is_record: bool,
    /// Declared accessibility
    #[serde(default)]
    pub accessibility: Accessibility,
    /// Members visible on the type, as flattened by the host
    #[serde(default)]
    pub members: Vec<MemberNode>,
    /// Attribute applications in declaration order
    #[serde(default)]
    pub attributes: Vec<AttributeInstance>,
}

impl TypeNode {
    /// Create a type node of the given kind.
    pub fn new(kind: TypeKind, name: impl Into<String>, namespace: impl Into<NamespacePath>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            is_generic: false,
            type_parameters: 0,
            type_arguments: Vec::new(),
            base_type: None,
            interface_closure: Vec::new(),
            is_value_type: matches!(kind, TypeKind::Struct | TypeKind::Enum),
            is_abstract: false,
            is_static: false,
            is_record: false,
            accessibility: Accessibility::Public,
            members: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Create a class node.
    pub fn class(name: impl Into<String>, namespace: impl Into<NamespacePath>) -> Self {
        Self::new(TypeKind::Class, name, namespace)
    }

    /// Create a struct node.
    pub fn value_type(name: impl Into<String>, namespace: impl Into<NamespacePath>) -> Self {
        Self::new(TypeKind::Struct, name, namespace)
    }

    /// Create an interface node.
    pub fn interface(name: impl Into<String>, namespace: impl Into<NamespacePath>) -> Self {
        Self::new(TypeKind::Interface, name, namespace)
    }

    /// Create an enum node.
    pub fn enumeration(name: impl Into<String>, namespace: impl Into<NamespacePath>) -> Self {
        Self::new(TypeKind::Enum, name, namespace)
    }

    /// Mark the type as an open generic with the given declared parameter count.
    pub fn generic(mut self, type_parameters: usize) -> Self {
        self.is_generic = true;
        self.type_parameters = type_parameters;
        self
    }

    /// Close the generic over the given arguments, in declared order.
    ///
    /// Also records the declared parameter count as the argument count;
    /// call [`TypeNode::generic`] afterwards if the two differ.
    pub fn with_arguments<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = TypeHandle>,
    {
        self.type_arguments = arguments.into_iter().collect();
        self.is_generic = true;
        self.type_parameters = self.type_arguments.len();
        self
    }

    /// Set the base type.
    pub fn with_base(mut self, base: TypeHandle) -> Self {
        self.base_type = Some(base);
        self
    }

    /// Append an interface instantiation to the flattened closure.
    pub fn with_interface(mut self, interface: TypeHandle) -> Self {
        self.interface_closure.push(interface);
        self
    }

    /// Append several interface instantiations to the flattened closure.
    pub fn with_interfaces<I>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = TypeHandle>,
    {
        self.interface_closure.extend(interfaces);
        self
    }

    /// Append a member.
    pub fn with_member(mut self, member: MemberNode) -> Self {
        self.members.push(member);
        self
    }

    /// Append an attribute application.
    pub fn with_attribute(mut self, class: TypeHandle) -> Self {
        self.attributes.push(AttributeInstance::new(class));
        self
    }

    /// Mark the type abstract.
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark the type static.
    pub fn static_type(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the type as a record declaration.
    pub fn record_type(mut self) -> Self {
        self.is_record = true;
        self
    }

    /// Set the declared accessibility.
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Freeze the node into a shared handle.
    pub fn into_handle(self) -> TypeHandle {
        Arc::new(self)
    }

    /// Qualified name without arguments, e.g. `System.Int32`.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_global() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Qualified name including type arguments, recursively, e.g.
    /// `System.Collections.Generic.IList<System.Int32>`.
    pub fn qualified_name_with_arguments(&self) -> String {
        if self.type_arguments.is_empty() {
            return self.qualified_name();
        }
        let arguments: Vec<String> = self
            .type_arguments
            .iter()
            .map(|argument| argument.qualified_name_with_arguments())
            .collect();
        format!("{}<{}>", self.qualified_name(), arguments.join(", "))
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name_with_arguments())
    }
}

/// Kind of a type member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    /// Method member
    Method,
    /// Field member
    Field,
    /// Property member
    Property,
}

/// A member visible on a type node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberNode {
    /// Member name
    pub name: String,
    /// Member kind
    pub kind: MemberKind,
    /// Whether the member is static
    #[serde(default)]
    pub is_static: bool,
    /// Whether the member overrides a base declaration
    #[serde(default)]
    pub is_override: bool,
    /// Generic-parameter count of a method member
    #[serde(default)]
    pub generic_arity: usize,
    /// Parameter types in declared order
    #[serde(default)]
    pub parameter_types: Vec<TypeHandle>,
    /// Return type, absent for void methods and fields without a recorded type
    #[serde(default)]
    pub return_type: Option<TypeHandle>,
    /// Declared accessibility
    #[serde(default)]
    pub accessibility: Accessibility,
}

impl MemberNode {
    fn new(kind: MemberKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            is_static: false,
            is_override: false,
            generic_arity: 0,
            parameter_types: Vec::new(),
            return_type: None,
            accessibility: Accessibility::Public,
        }
    }

    /// Create a method member.
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(MemberKind::Method, name)
    }

    /// Create a field member.
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(MemberKind::Field, name)
    }

    /// Create a property member.
    pub fn property(name: impl Into<String>) -> Self {
        Self::new(MemberKind::Property, name)
    }

    /// Append a parameter type.
    pub fn with_parameter(mut self, parameter: TypeHandle) -> Self {
        self.parameter_types.push(parameter);
        self
    }

    /// Set the return type.
    pub fn with_return_type(mut self, return_type: TypeHandle) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Set the method generic-parameter count.
    pub fn with_generic_arity(mut self, generic_arity: usize) -> Self {
        self.generic_arity = generic_arity;
        self
    }

    /// Mark the member static.
    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the member as an override.
    pub fn marked_override(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Set the declared accessibility.
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }
}

/// A single attribute application attached to a type node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeInstance {
    /// The attribute class
    pub class: TypeHandle,
}

impl AttributeInstance {
    /// Create an attribute application of the given class.
    pub fn new(class: TypeHandle) -> Self {
        Self { class }
    }
}
