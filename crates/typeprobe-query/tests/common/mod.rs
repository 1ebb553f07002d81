//! Shared graph fixtures for integration tests
//!
//! Builds the handful of platform nodes the probes care about. Interface
//! closures are flattened by hand, the way a host front-end would supply
//! them.

use typeprobe_graph::{TypeHandle, TypeNode};

pub fn object() -> TypeHandle {
    TypeNode::class("Object", "System").into_handle()
}

pub fn int32() -> TypeHandle {
    TypeNode::value_type("Int32", "System").into_handle()
}

pub fn string() -> TypeHandle {
    TypeNode::class("String", "System").into_handle()
}

pub fn nullable_of(underlying: TypeHandle) -> TypeHandle {
    TypeNode::value_type("Nullable", "System")
        .with_arguments([underlying])
        .into_handle()
}

pub fn comparable() -> TypeHandle {
    TypeNode::interface("IComparable", "System").into_handle()
}

pub fn comparable_of(argument: TypeHandle) -> TypeHandle {
    TypeNode::interface("IComparable", "System")
        .with_arguments([argument])
        .into_handle()
}

pub fn enumerable_marker() -> TypeHandle {
    TypeNode::interface("IEnumerable", "System.Collections").into_handle()
}

pub fn container_of(name: &str, element: TypeHandle) -> TypeHandle {
    TypeNode::interface(name, "System.Collections.Generic")
        .with_arguments([element])
        .into_handle()
}
