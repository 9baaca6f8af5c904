//! protoc plugin entry point
//!
//! protoc invokes this binary with an encoded CodeGeneratorRequest on stdin
//! and expects an encoded CodeGeneratorResponse on stdout. Generation
//! failures are reported inside the response, not as a process error.

use anyhow::{Context, Result};
use prost::Message;
use std::io::{Read, Write};

fn main() -> Result<()> {
    let mut request_bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut request_bytes)
        .context("Failed to read CodeGeneratorRequest from stdin")?;

    let response = contract_gen_generator::plugin::generate_response(&request_bytes);

    let mut response_bytes = Vec::new();
    response
        .encode(&mut response_bytes)
        .context("Failed to encode CodeGeneratorResponse")?;

    std::io::stdout()
        .write_all(&response_bytes)
        .context("Failed to write CodeGeneratorResponse to stdout")?;

    Ok(())
}
