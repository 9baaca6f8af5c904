//! Container class generation for contract services
//!
//! This crate transforms a reflected service descriptor and a set of
//! generation switches into the C# source text of the service's container
//! class. The transformation is a pure function: descriptors are read-only,
//! each run owns a private output buffer, and equal inputs produce identical
//! text.

mod generator;
mod messages;
pub mod naming;
pub mod plugin;
mod printer;

pub use generator::ContractGenerator;
pub use messages::used_messages;
pub use printer::IndentPrinter;

use contract_gen_common::{GeneratorError, GeneratorOptions, Result};
use prost_reflect::ServiceDescriptor;
use std::fs;
use std::path::Path;

/// Generate the container class for one service (convenience function)
pub fn generate_container(service: ServiceDescriptor, options: GeneratorOptions) -> Option<String> {
    ContractGenerator::new(service, options).generate()
}

/// Generate one `<Name>Container.cs` file per service into a directory
///
/// Returns the written file names in generation order.
pub fn generate_to_directory(
    services: &[ServiceDescriptor],
    options: GeneratorOptions,
    output_dir: &Path,
) -> Result<Vec<String>> {
    fs::create_dir_all(output_dir).map_err(|e| {
        GeneratorError::Generation(format!("Failed to create output directory: {}", e))
    })?;

    let mut written = Vec::new();
    for service in services {
        let Some(content) = generate_container(service.clone(), options) else {
            continue;
        };

        let file_name = format!("{}.cs", naming::container_class_name(service));
        fs::write(output_dir.join(&file_name), content)
            .map_err(|e| GeneratorError::Generation(format!("Failed to write {}: {}", file_name, e)))?;
        written.push(file_name);
    }

    Ok(written)
}
