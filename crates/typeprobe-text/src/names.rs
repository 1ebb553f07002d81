//! Identifier and generic-name string helpers

/// Returns the input with its first character converted to uppercase.
pub fn title_case(source: &str) -> String {
    let mut chars = source.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(chars.as_str());
            result
        }
        _ => source.to_string(),
    }
}

/// Strips a trailing generic argument list, e.g. `Map<K, V>` becomes `Map`.
pub fn name_without_generics(class_name: &str) -> &str {
    match class_name.find('<') {
        Some(index) if index > 0 => &class_name[..index],
        _ => class_name,
    }
}

/// Returns whether the name carries a generic argument list.
pub fn has_generic_parameter(class_name: &str) -> bool {
    class_name.contains('<')
}
