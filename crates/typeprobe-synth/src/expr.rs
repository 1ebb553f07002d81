//! Expression-synthesis decision tables

use typeprobe_graph::TypeNode;
use typeprobe_query::{is_optional, is_type};

/// Default template for accessing a string member. Any `{0}` is replaced
/// by the member name.
pub const DEFAULT_STRING_ACCESS: &str = "this.{0}";

/// Default template for ordinally comparing a string member between
/// "this" and "other".
pub const DEFAULT_STRING_COMPARISON: &str =
    "String.Compare(this.{0}, other.{0}, StringComparison.Ordinal)";

fn apply(template: &str, member_name: &str) -> String {
    template.replace("{0}", member_name)
}

/// Returns the code for a string expression of the given member of "this",
/// using the default string template.
pub fn string_expression(node: &TypeNode, member_name: &str) -> String {
    string_expression_with(node, member_name, DEFAULT_STRING_ACCESS)
}

/// Returns the code for a string expression of the given member of "this".
///
/// Plain value types convert directly; string members use the supplied
/// template; everything else (reference types and optionals) is
/// null-guarded.
pub fn string_expression_with(
    node: &TypeNode,
    member_name: &str,
    string_template: &str,
) -> String {
    if node.is_value_type && !is_optional(node) {
        return format!("this.{member_name}.ToString()");
    }
    if is_type(node, "String", "System", None) {
        return apply(string_template, member_name);
    }
    format!("this.{member_name}?.ToString()")
}

/// Returns the code for a comparison expression on the given member
/// between "this" and "other", using the default string template.
pub fn comparison_expression(node: &TypeNode, member_name: &str) -> String {
    comparison_expression_with(node, member_name, DEFAULT_STRING_COMPARISON)
}

/// Returns the code for a comparison expression on the given member
/// between "this" and "other".
///
/// Optionals and reference types compare null-aware, ordering an absent
/// value before a present one; plain value types compare directly.
pub fn comparison_expression_with(
    node: &TypeNode,
    member_name: &str,
    string_template: &str,
) -> String {
    // Decision order matters: strings are reference types, and the
    // optional wrapper is a value type.
    if is_type(node, "String", "System", None) {
        return apply(string_template, member_name);
    }
    if is_optional(node) {
        return format!(
            "(this.{m} is null || other.{m} is null ? -(this.{m} is null).CompareTo(other.{m} is null) : this.{m}.Value.CompareTo(other.{m}.Value))",
            m = member_name
        );
    }
    if node.is_value_type {
        return format!("this.{member_name}.CompareTo(other.{member_name})");
    }
    format!(
        "(this.{m} is null || other.{m} is null ? -(this.{m} is null).CompareTo(other.{m} is null) : this.{m}.CompareTo(other.{m}))",
        m = member_name
    )
}
