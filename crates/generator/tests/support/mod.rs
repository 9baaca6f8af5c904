//! In-code descriptor-set fixtures
//!
//! Mirrors of the descriptor.proto messages, declared with prost field
//! attributes so the contract custom options can be encoded without running
//! protoc. Extension fields and the fields of the real option messages share
//! a wire format, which is what lets `RawMethodOptions` carry the
//! `contract.is_view` value under its extension number.

#![allow(dead_code)]

use contract_gen_reflect::DescriptorSetLoader;
use prost::Message;
use prost_reflect::DescriptorPool;

pub const IS_VIEW_NUMBER: i32 = 504001;
pub const BASE_NUMBER: i32 = 504010;

const LABEL_OPTIONAL: i32 = 1;
const LABEL_REPEATED: i32 = 3;
const TYPE_BOOL: i32 = 8;
const TYPE_STRING: i32 = 9;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawFileDescriptorSet {
    #[prost(message, repeated, tag = "1")]
    pub file: Vec<RawFileDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawFileDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(string, repeated, tag = "3")]
    pub dependency: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<RawDescriptorProto>,
    #[prost(message, repeated, tag = "6")]
    pub service: Vec<RawServiceDescriptorProto>,
    #[prost(message, repeated, tag = "7")]
    pub extension: Vec<RawFieldDescriptorProto>,
    #[prost(message, optional, tag = "8")]
    pub options: Option<RawFileOptions>,
    #[prost(string, optional, tag = "12")]
    pub syntax: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub field: Vec<RawFieldDescriptorProto>,
    #[prost(message, repeated, tag = "5")]
    pub extension_range: Vec<RawExtensionRange>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawExtensionRange {
    #[prost(int32, optional, tag = "1")]
    pub start: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub end: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawFieldDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub extendee: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub number: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub label: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub r#type: Option<i32>,
    #[prost(string, optional, tag = "6")]
    pub type_name: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawServiceDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub method: Vec<RawMethodDescriptorProto>,
    #[prost(message, optional, tag = "3")]
    pub options: Option<RawServiceOptions>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawMethodDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub input_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub output_type: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub options: Option<RawMethodOptions>,
}

/// MethodOptions carrying only the contract.is_view extension field
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawMethodOptions {
    #[prost(bool, optional, tag = "504001")]
    pub is_view: Option<bool>,
}

/// ServiceOptions carrying only the contract.base extension field
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawServiceOptions {
    #[prost(string, repeated, tag = "504010")]
    pub base: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawFileOptions {
    #[prost(string, optional, tag = "37")]
    pub csharp_namespace: Option<String>,
}

/// The plugin request, mirrored so fixtures can be embedded directly
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawCodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<RawFileDescriptorProto>,
}

/// descriptor.proto reduced to the option messages the fixtures touch
pub fn descriptor_proto_stub() -> RawFileDescriptorProto {
    let mut file_options = options_message("FileOptions");
    file_options.field.push(RawFieldDescriptorProto {
        name: Some("csharp_namespace".into()),
        number: Some(37),
        label: Some(LABEL_OPTIONAL),
        r#type: Some(TYPE_STRING),
        ..Default::default()
    });

    RawFileDescriptorProto {
        name: Some("google/protobuf/descriptor.proto".into()),
        package: Some("google.protobuf".into()),
        message_type: vec![
            file_options,
            options_message("ServiceOptions"),
            options_message("MethodOptions"),
        ],
        ..Default::default()
    }
}

fn options_message(name: &str) -> RawDescriptorProto {
    RawDescriptorProto {
        name: Some(name.into()),
        extension_range: vec![RawExtensionRange {
            start: Some(1000),
            end: Some(536870912),
        }],
        ..Default::default()
    }
}

/// contract/options.proto: the is_view and base extension declarations
pub fn contract_options_proto() -> RawFileDescriptorProto {
    RawFileDescriptorProto {
        name: Some("contract/options.proto".into()),
        package: Some("contract".into()),
        dependency: vec!["google/protobuf/descriptor.proto".into()],
        extension: vec![
            RawFieldDescriptorProto {
                name: Some("is_view".into()),
                extendee: Some(".google.protobuf.MethodOptions".into()),
                number: Some(IS_VIEW_NUMBER),
                label: Some(LABEL_OPTIONAL),
                r#type: Some(TYPE_BOOL),
                ..Default::default()
            },
            RawFieldDescriptorProto {
                name: Some("base".into()),
                extendee: Some(".google.protobuf.ServiceOptions".into()),
                number: Some(BASE_NUMBER),
                label: Some(LABEL_REPEATED),
                r#type: Some(TYPE_STRING),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

pub fn message(name: &str) -> RawDescriptorProto {
    RawDescriptorProto {
        name: Some(name.into()),
        ..Default::default()
    }
}

pub fn method(name: &str, input: &str, output: &str, is_view: bool) -> RawMethodDescriptorProto {
    RawMethodDescriptorProto {
        name: Some(name.into()),
        input_type: Some(input.into()),
        output_type: Some(output.into()),
        options: is_view.then(|| RawMethodOptions {
            is_view: Some(true),
        }),
    }
}

/// The standard fixture files: stub + options + the given service files
pub fn fixture_files(files: Vec<RawFileDescriptorProto>) -> Vec<RawFileDescriptorProto> {
    let mut all = vec![descriptor_proto_stub(), contract_options_proto()];
    all.extend(files);
    all
}

/// Decode a pool from fixture files, including the option declarations
pub fn load(files: Vec<RawFileDescriptorProto>) -> DescriptorPool {
    load_set(fixture_files(files))
}

/// Decode a pool without the contract option declarations, for exercising
/// the absent-extension fallbacks
pub fn load_without_options(files: Vec<RawFileDescriptorProto>) -> DescriptorPool {
    let mut all = vec![descriptor_proto_stub()];
    all.extend(files);
    load_set(all)
}

fn load_set(files: Vec<RawFileDescriptorProto>) -> DescriptorPool {
    let set = RawFileDescriptorSet { file: files };
    DescriptorSetLoader::from_bytes(&set.encode_to_vec())
        .expect("fixture descriptor set must decode")
        .pool()
        .clone()
}

/// hello_world.proto: one view method and one action method with four
/// distinct messages
pub fn hello_world_file() -> RawFileDescriptorProto {
    RawFileDescriptorProto {
        name: Some("hello_world.proto".into()),
        package: Some("hello".into()),
        dependency: vec!["contract/options.proto".into()],
        message_type: vec![
            message("GetInput"),
            message("GetOutput"),
            message("SetInput"),
            message("SetOutput"),
        ],
        service: vec![RawServiceDescriptorProto {
            name: Some("HelloWorld".into()),
            method: vec![
                method("Get", ".hello.GetInput", ".hello.GetOutput", true),
                method("Set", ".hello.SetInput", ".hello.SetOutput", false),
            ],
            options: None,
        }],
        syntax: Some("proto3".into()),
        ..Default::default()
    }
}

pub fn hello_world_pool() -> DescriptorPool {
    load(vec![hello_world_file()])
}
