//! Generation switches
//!
//! The options mirror the switches accepted on the protoc plugin command
//! line. Contract sections are on by default and disabled with `nocontract`;
//! everything else is opt-in.

use serde::{Deserialize, Serialize};

/// Switches controlling which container sections are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Emit the server base class and the BindService registration
    pub generate_contract: bool,
    /// Emit the client stub class
    pub generate_stub: bool,
    /// Emit the reference-state holder class
    pub generate_reference: bool,
    /// Declare the container with `internal` instead of `public` visibility
    pub internal_access: bool,
}

impl GeneratorOptions {
    /// Parse a protoc plugin parameter string
    ///
    /// The parameter is a comma-separated switch list, e.g.
    /// `stub,internal_access`. Unknown switches are ignored.
    ///
    /// # Examples
    /// ```
    /// use contract_gen_common::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::from_parameter("stub,reference");
    /// assert!(options.generate_contract);
    /// assert!(options.generate_stub);
    /// assert!(options.generate_reference);
    /// assert!(!options.internal_access);
    /// ```
    pub fn from_parameter(parameter: &str) -> Self {
        let mut options = GeneratorOptions {
            generate_contract: true,
            ..Default::default()
        };

        for switch in parameter.split(',').map(str::trim) {
            match switch {
                "nocontract" => options.generate_contract = false,
                "stub" => options.generate_stub = true,
                "reference" => options.generate_reference = true,
                "internal_access" => options.internal_access = true,
                _ => {}
            }
        }

        options
    }
}
