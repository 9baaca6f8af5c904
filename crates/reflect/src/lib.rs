//! Descriptor reflection for contract services
//!
//! This crate wraps `prost-reflect` descriptor pools with the contract-side
//! view of a compiled `.proto` file: loading a `FileDescriptorSet`, looking up
//! services, and resolving the custom options that drive generation.
//!
//! ## Custom options
//! - `contract.is_view` (method option, bool): marks a method as read-only
//! - `contract.base` (service option, repeated string): proto files whose
//!   services are ancestors of the annotated service
//!
//! ## Example
//! ```rust,ignore
//! use contract_gen_reflect::DescriptorSetLoader;
//!
//! let loader = DescriptorSetLoader::from_file("service.pb")?;
//! for service in loader.services() {
//!     println!("{}", service.full_name());
//! }
//! ```

mod loader;
mod options;

pub use loader::DescriptorSetLoader;
pub use options::{
    base_services, full_method_list, full_service_chain, is_view_method, BASE_EXTENSION,
    IS_VIEW_EXTENSION,
};
