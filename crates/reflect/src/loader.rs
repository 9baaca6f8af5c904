//! FileDescriptorSet loading

use contract_gen_common::{GeneratorError, Result};
use prost_reflect::{DescriptorPool, ServiceDescriptor};
use std::fs;
use std::path::Path;

/// Loader for compiled protobuf descriptor sets
///
/// Decodes a `FileDescriptorSet` (compiled `.proto` files) into a descriptor
/// pool. Decoding goes through `DescriptorPool::decode` rather than the typed
/// `prost-types` structs so that custom options on services and methods are
/// preserved as extensions.
pub struct DescriptorSetLoader {
    /// Descriptor pool for reflection
    pool: DescriptorPool,
}

impl DescriptorSetLoader {
    /// Load a FileDescriptorSet from a binary file
    ///
    /// # Example
    /// ```rust,ignore
    /// let loader = DescriptorSetLoader::from_file("service.pb")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read FileDescriptorSet file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_bytes(&bytes)
    }

    /// Decode a FileDescriptorSet from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pool = DescriptorPool::decode(bytes).map_err(|e| {
            GeneratorError::Parse(format!("Failed to decode FileDescriptorSet: {}", e))
        })?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying descriptor pool
    pub fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    /// All services defined in the descriptor set
    pub fn services(&self) -> Vec<ServiceDescriptor> {
        self.pool.services().collect()
    }

    /// Look up a service by its full name
    pub fn service_by_name(&self, full_name: &str) -> Result<ServiceDescriptor> {
        self.pool.get_service_by_name(full_name).ok_or_else(|| {
            GeneratorError::Parse(format!(
                "Service {} not found in descriptor set",
                full_name
            ))
        })
    }
}
