use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Schemock - example values for OpenAPI/Swagger schemas
#[derive(Parser, Debug, Clone)]
#[command(name = "schemock", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SCHEMOCK_CONFIG", default_value = "schemock.toml", global = true)]
    pub config: PathBuf,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Request timeout in seconds for remote documents
    #[arg(long, env = "SCHEMOCK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Replace placeholder tokens (@email, @integer(10, 100), ...) with generated values
    #[arg(long, num_args = 0..=1, default_missing_value = "true", global = true)]
    pub expand_placeholders: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write sample values into the responses and parameters of an API description
    Annotate {
        /// URL or file path of a Swagger 2.0 / OpenAPI 3 document (JSON or YAML)
        source: String,

        /// Write the annotated document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Media type whose schema is sampled in OpenAPI 3 responses
        #[arg(long)]
        media_type: Option<String>,
    },

    /// Print the sample JSON of a standalone schema document
    Sample {
        /// URL or file path of the schema (JSON or YAML)
        schema: String,
    },
}

impl Cli {
    /// Location of the document the command reads
    pub fn source(&self) -> &str {
        match &self.command {
            Command::Annotate { source, .. } => source,
            Command::Sample { schema } => schema,
        }
    }
}
