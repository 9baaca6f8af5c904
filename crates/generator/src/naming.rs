//! Identifier derivation from descriptor names
//!
//! Every mapping here is a pure function of descriptor fields. No escaping
//! happens beyond the substitutions described on each function; in
//! particular, two full names that differ only in separator placement (for
//! example `a.b_c` and `a.b.c`) map to the same marshaller field name. That
//! collision cannot arise from a well-formed descriptor pool.

use prost_reflect::{FileDescriptor, MessageDescriptor, MethodDescriptor, ServiceDescriptor};

/// Field name of the static marshaller for a message
///
/// `__Marshaller_` plus the message full name with every `.` replaced by `_`,
/// unique per distinct full name.
pub fn marshaller_field_name(message: &MessageDescriptor) -> String {
    format!("__Marshaller_{}", message.full_name().replace('.', "_"))
}

/// Field name of the static per-method descriptor
///
/// Methods are already scoped to one container, so the simple name suffices.
pub fn method_field_name(method: &MethodDescriptor) -> String {
    format!("__Method_{}", method.name())
}

/// Name of the generated container class
pub fn container_class_name(service: &ServiceDescriptor) -> String {
    format!("{}Container", service.name())
}

/// Name of the generated server base class
pub fn server_base_class_name(service: &ServiceDescriptor) -> String {
    format!("{}Base", service.name())
}

/// Fully qualified C# type name of a message
///
/// Nested messages sit under their parent's `Types` class, mirroring the
/// layout the protobuf C# code generator produces.
pub fn message_type_name(message: &MessageDescriptor) -> String {
    let file = message.parent_file();
    let namespace = csharp_namespace(&file);
    let package = file.package_name();

    let full_name = message.full_name();
    let relative = full_name
        .strip_prefix(package)
        .map(|rest| rest.trim_start_matches('.'))
        .unwrap_or(full_name);
    let path = relative.split('.').collect::<Vec<_>>().join(".Types.");

    if namespace.is_empty() {
        format!("global::{}", path)
    } else {
        format!("global::{}.{}", namespace, path)
    }
}

/// Fully qualified C# name of the reflection class generated for a file
///
/// Reflective descriptors are registered per file, so the container's
/// descriptor accessors go through this class.
pub fn reflection_class_name(file: &FileDescriptor) -> String {
    let namespace = csharp_namespace(file);
    let file_name = file.name();
    let stem = file_name
        .rsplit('/')
        .next()
        .unwrap_or(file_name)
        .trim_end_matches(".proto");
    let class_name = format!("{}Reflection", underscores_to_pascal_case(stem));

    if namespace.is_empty() {
        format!("global::{}", class_name)
    } else {
        format!("global::{}.{}", namespace, class_name)
    }
}

/// C# namespace of a file: the `csharp_namespace` option when present,
/// otherwise the Pascal-cased package path
pub fn csharp_namespace(file: &FileDescriptor) -> String {
    let options = file.options();
    if let Some(value) = options.get_field_by_name("csharp_namespace") {
        if let Some(namespace) = value.as_str() {
            if !namespace.is_empty() {
                return namespace.to_owned();
            }
        }
    }

    file.package_name()
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(underscores_to_pascal_case)
        .collect::<Vec<_>>()
        .join(".")
}

/// Convert an underscore- or hyphen-separated name to PascalCase
pub fn underscores_to_pascal_case(input: &str) -> String {
    input
        .split(|c: char| c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
