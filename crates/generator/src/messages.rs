//! Used-message collection

use prost_reflect::{MessageDescriptor, MethodDescriptor};
use std::collections::HashSet;

/// Collect the message types referenced by a method list, in first-encounter
/// order with no duplicates
///
/// For each method, the input type is checked before the output type, so a
/// message reused across methods keeps the position of its earliest
/// appearance. Identity is the message full name.
pub fn used_messages(methods: &[MethodDescriptor]) -> Vec<MessageDescriptor> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for method in methods {
        for message in [method.input(), method.output()] {
            if seen.insert(message.full_name().to_owned()) {
                result.push(message);
            }
        }
    }

    result
}
