//! Contract custom-option resolution
//!
//! Services and methods carry their contract semantics as protobuf extension
//! options. Lookups degrade gracefully: a pool compiled without the option
//! definitions simply yields the defaults (no view methods, no ancestors).

use prost_reflect::{MethodDescriptor, ServiceDescriptor};
use std::collections::HashSet;

/// Full name of the bool method option marking a method as read-only
pub const IS_VIEW_EXTENSION: &str = "contract.is_view";

/// Full name of the repeated-string service option naming ancestor proto files
pub const BASE_EXTENSION: &str = "contract.base";

/// Whether a method is classified as a read-only view
///
/// Absent option, or an option definition missing from the pool, both mean
/// the method is a state-mutating action.
pub fn is_view_method(method: &MethodDescriptor) -> bool {
    let pool = method.parent_pool();
    let Some(extension) = pool.get_extension_by_name(IS_VIEW_EXTENSION) else {
        return false;
    };

    method
        .options()
        .get_extension(&extension)
        .as_bool()
        .unwrap_or(false)
}

/// Direct ancestor services of a service
///
/// The `contract.base` option lists proto file paths; every service declared
/// in a named file is an ancestor. Entries naming files absent from the pool
/// are skipped.
pub fn base_services(service: &ServiceDescriptor) -> Vec<ServiceDescriptor> {
    let pool = service.parent_pool();
    let Some(extension) = pool.get_extension_by_name(BASE_EXTENSION) else {
        return Vec::new();
    };

    let options = service.options();
    let value = options.get_extension(&extension);
    let Some(entries) = value.as_list() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.as_str())
        .filter_map(|path| pool.get_file_by_name(path))
        .flat_map(|file| file.services().collect::<Vec<_>>())
        .collect()
}

/// The service's inheritance chain: ancestors first (depth-first), then the
/// service itself, deduplicated by full name
pub fn full_service_chain(service: &ServiceDescriptor) -> Vec<ServiceDescriptor> {
    let mut seen = HashSet::new();
    let mut chain = Vec::new();
    collect_chain(service, &mut seen, &mut chain);
    chain
}

fn collect_chain(
    service: &ServiceDescriptor,
    seen: &mut HashSet<String>,
    chain: &mut Vec<ServiceDescriptor>,
) {
    if !seen.insert(service.full_name().to_owned()) {
        return;
    }

    for base in base_services(service) {
        collect_chain(&base, seen, chain);
    }

    chain.push(service.clone());
}

/// All methods of the service's inheritance chain, flattened in chain order
///
/// This is the method list every generated section iterates; a service
/// without ancestors yields exactly its own methods in declaration order.
pub fn full_method_list(service: &ServiceDescriptor) -> Vec<MethodDescriptor> {
    full_service_chain(service)
        .iter()
        .flat_map(|member| member.methods())
        .collect()
}
