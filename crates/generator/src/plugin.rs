//! protoc plugin protocol boundary
//!
//! Translates an encoded `CodeGeneratorRequest` into a
//! `CodeGeneratorResponse` carrying one generated container file per service.
//! Failures become the response `error` field per the protoc plugin
//! convention; the process itself never aborts on a bad request.

use contract_gen_common::{GeneratorError, GeneratorOptions, Result};
use contract_gen_reflect::DescriptorSetLoader;
use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::CodeGeneratorResponse;

use crate::naming;
use crate::ContractGenerator;

/// CodeGeneratorRequest with the file descriptors kept as raw bytes
///
/// prost's typed decode drops extension fields, which would strip the
/// contract options off the descriptors. Message-typed and bytes-typed fields
/// share a wire format, so each `FileDescriptorProto` is captured opaquely
/// and re-wrapped into a `FileDescriptorSet` for prost-reflect to decode.
#[derive(Clone, PartialEq, ::prost::Message)]
struct RawCodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    parameter: Option<String>,
    #[prost(bytes = "vec", repeated, tag = "15")]
    proto_file: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
struct RawFileDescriptorSet {
    #[prost(bytes = "vec", repeated, tag = "1")]
    file: Vec<Vec<u8>>,
}

/// Run the generator against an encoded `CodeGeneratorRequest`
pub fn generate_response(request_bytes: &[u8]) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };

    match run(request_bytes) {
        Ok(files) => response.file = files,
        Err(e) => response.error = Some(e.to_string()),
    }

    response
}

fn run(request_bytes: &[u8]) -> Result<Vec<File>> {
    let request = RawCodeGeneratorRequest::decode(request_bytes).map_err(|e| {
        GeneratorError::Parse(format!("Failed to decode CodeGeneratorRequest: {}", e))
    })?;

    let options = GeneratorOptions::from_parameter(request.parameter.as_deref().unwrap_or(""));

    let set = RawFileDescriptorSet {
        file: request.proto_file,
    };
    let loader = DescriptorSetLoader::from_bytes(&set.encode_to_vec())?;

    let mut files = Vec::new();
    for file_name in &request.file_to_generate {
        let file = loader.pool().get_file_by_name(file_name).ok_or_else(|| {
            GeneratorError::Parse(format!(
                "File {} not found in request descriptors",
                file_name
            ))
        })?;

        for service in file.services() {
            let generator = ContractGenerator::new(service.clone(), options);
            if let Some(content) = generator.generate() {
                files.push(File {
                    name: Some(format!("{}.cs", naming::container_class_name(&service))),
                    content: Some(content),
                    ..Default::default()
                });
            }
        }
    }

    Ok(files)
}
