use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use miette::Report;

use astreams::models::registry;
use astreams::validation::{DocumentError, DocumentValidator, ObjectError};

#[derive(Parser)]
#[command(
    name = "astreams",
    about = "Validate Activity Streams documents against the vocabulary's attribute rules",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON document
    Validate {
        /// Path to the document
        file: String,
    },

    /// Validate a document and pretty-print the typed object it produces
    Inspect {
        /// Path to the document
        file: String,
    },

    /// List registered types, or the attribute table of one type
    Types {
        /// Type name to describe
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate { file } => validate_command(&file),
        Commands::Inspect { file } => inspect_command(&file),
        Commands::Types { name } => types_command(name.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("astreams=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("astreams=info"), // -v: info messages
        _ => EnvFilter::new("astreams=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn load_document(file: &str) -> Result<Result<astreams::models::TypedObject, DocumentError>> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("Failed to read document: {file}"))?;

    Ok(DocumentValidator::new().from_str(&content))
}

fn validate_command(file: &str) -> Result<()> {
    match load_document(file)? {
        Ok(object) => {
            println!(
                "{} {file} is a valid {} document",
                "✓".green(),
                object.object_type()
            );
            Ok(())
        }
        Err(error) => {
            let malformed = is_malformed(&error);
            eprintln!("{} {file} failed validation", "✗".red());
            eprintln!("{:?}", Report::new(error));

            if malformed {
                anyhow::bail!("Malformed input in {file} (see detailed errors above)");
            }
            anyhow::bail!("Validation failed for {file} (see detailed errors above)");
        }
    }
}

fn inspect_command(file: &str) -> Result<()> {
    match load_document(file)? {
        Ok(object) => {
            object.pretty_print();
            Ok(())
        }
        Err(error) => {
            eprintln!("{:?}", Report::new(error));
            anyhow::bail!("Validation failed for {file} (see detailed errors above)");
        }
    }
}

fn types_command(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let spec =
                registry::spec(name).with_context(|| format!("Unknown type: {name}"))?;

            println!("{}", spec.name);
            if let Some(parent) = spec.parent {
                println!("  parent: {parent}");
            }
            for attribute in registry::attribute_names(name).unwrap_or_default() {
                if let Some(validator) = registry::validator_for(name, attribute) {
                    println!("  {attribute}: {}", validator.name());
                }
            }
        }
        None => {
            for name in registry::type_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

/// Malformed input (bad JSON, broken producer contract) is reported as a
/// more severe failure than an ordinary validation rejection.
fn is_malformed(error: &DocumentError) -> bool {
    matches!(
        error,
        DocumentError::Decode(_)
            | DocumentError::Attribute {
                source: ObjectError::Input(_),
                ..
            }
    )
}
