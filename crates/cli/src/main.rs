//! Contract-Gen CLI
//!
//! Command-line interface for generating contract container classes from
//! compiled protobuf descriptor sets.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use contract_gen_common::{GeneratorOptions, MethodKind};
use contract_gen_reflect::{full_method_list, is_view_method, DescriptorSetLoader};
use prost_reflect::ServiceDescriptor;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "contract-gen")]
#[command(version, about = "Generate contract container classes from compiled protobuf service descriptors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a descriptor set and display the services it defines
    #[command(after_help = "EXAMPLES:\n  \
        # List every service in a compiled descriptor set\n  \
        contract-gen parse --descriptor-set service.pb\n\n  \
        # Inspect one service\n  \
        contract-gen parse --descriptor-set service.pb --service hello.HelloWorld")]
    Parse {
        /// Path to the compiled FileDescriptorSet
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Full name of a single service (all services if omitted)
        #[arg(long)]
        service: Option<String>,
    },

    /// Generate container classes from a descriptor set
    #[command(after_help = "EXAMPLES:\n  \
        # Generate containers for every service\n  \
        contract-gen generate --descriptor-set service.pb --output ./generated\n\n  \
        # Generate a stub-only container with internal visibility\n  \
        contract-gen generate \\\n    \
        --descriptor-set service.pb \\\n    \
        --service hello.HelloWorld \\\n    \
        --no-contract --stub --internal-access \\\n    \
        --output ./generated")]
    Generate {
        /// Path to the compiled FileDescriptorSet
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Full name of a single service (all services if omitted)
        #[arg(long)]
        service: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Skip the server base class and BindService registration
        #[arg(long)]
        no_contract: bool,

        /// Emit the client stub class
        #[arg(long)]
        stub: bool,

        /// Emit the reference-state holder class
        #[arg(long)]
        reference: bool,

        /// Declare containers with internal instead of public visibility
        #[arg(long)]
        internal_access: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Parse {
            descriptor_set,
            service,
        } => {
            parse_command(descriptor_set.as_path(), service.as_deref(), cli.verbose)?;
        }
        Commands::Generate {
            descriptor_set,
            service,
            output,
            no_contract,
            stub,
            reference,
            internal_access,
        } => {
            let options = GeneratorOptions {
                generate_contract: !no_contract,
                generate_stub: stub,
                generate_reference: reference,
                internal_access,
            };
            generate_command(
                descriptor_set.as_path(),
                service.as_deref(),
                output.as_path(),
                options,
                cli.verbose,
            )?;
        }
    }

    Ok(())
}

fn parse_command(descriptor_set: &Path, service: Option<&str>, verbose: bool) -> Result<()> {
    println!(
        "{} Loading descriptor set: {}",
        "→".cyan(),
        descriptor_set.display()
    );

    let loader = DescriptorSetLoader::from_file(descriptor_set)
        .context("Failed to load FileDescriptorSet")?;
    let services = selected_services(&loader, service)?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("  Services: {}", services.len());

    for service in &services {
        if verbose {
            println!("  • {}", service.full_name().cyan());
        }
        let methods: Vec<_> = full_method_list(service)
            .iter()
            .map(|method| {
                json!({
                    "name": method.name(),
                    "input": method.input().full_name(),
                    "output": method.output().full_name(),
                    "kind": MethodKind::from_view_flag(is_view_method(method)),
                })
            })
            .collect();
        let summary = json!({
            "service": service.full_name(),
            "file": service.parent_file().name(),
            "methods": methods,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn generate_command(
    descriptor_set: &Path,
    service: Option<&str>,
    output: &Path,
    options: GeneratorOptions,
    verbose: bool,
) -> Result<()> {
    println!(
        "{} Loading descriptor set: {}",
        "→".cyan(),
        descriptor_set.display()
    );

    let loader = DescriptorSetLoader::from_file(descriptor_set)
        .context("Failed to load FileDescriptorSet")?;
    let services = selected_services(&loader, service)?;

    if verbose {
        for service in &services {
            println!("  Generating container for {}", service.full_name());
        }
    }

    let written = contract_gen_generator::generate_to_directory(&services, options, output)
        .context("Failed to generate containers")?;

    for file_name in &written {
        println!("{} {}", "✓".green(), file_name);
    }
    println!(
        "\n{} Generated {} container(s) in {}",
        "✓ Done!".green().bold(),
        written.len(),
        output.display()
    );

    Ok(())
}

fn selected_services(
    loader: &DescriptorSetLoader,
    service: Option<&str>,
) -> Result<Vec<ServiceDescriptor>> {
    match service {
        Some(full_name) => Ok(vec![loader.service_by_name(full_name)?]),
        None => Ok(loader.services()),
    }
}
