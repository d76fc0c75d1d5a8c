mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use formgen::{Config, EmailPattern, FormSchema, OutputFormat};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "formgen")]
#[command(version, about = "formgen CLI - validate form submissions against field schemas", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "formgen.toml")]
    config: PathBuf,

    /// Log compilation and validation details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record against a schema
    Check {
        #[command(flatten)]
        source: SchemaSource,

        /// JSON file with the submitted values
        record: PathBuf,

        /// Output format: text or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Email check: html or simple
        #[arg(long)]
        email_pattern: Option<EmailPattern>,
    },

    /// List the fields of a schema with their parsed rules
    Fields {
        #[command(flatten)]
        source: SchemaSource,
    },

    /// Evaluate a rule string against a single value
    Rule {
        /// Pipe-delimited rules, e.g. "required|min:6"
        rules: String,

        /// Label used in the error message
        #[arg(short, long, default_value = "Value")]
        label: String,

        /// Value to check (absent when omitted)
        #[arg(long)]
        value: Option<String>,

        /// Email check: html or simple
        #[arg(long)]
        email_pattern: Option<EmailPattern>,
    },
}

#[derive(Args)]
struct SchemaSource {
    /// Schema file (TOML, or JSON by extension); defaults to [schema] path in the config
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Use the built-in sign-up form
    #[arg(long, conflicts_with = "schema")]
    example: bool,
}

impl SchemaSource {
    fn load(&self, config: &Config) -> Result<FormSchema> {
        if self.example {
            return Ok(FormSchema::example());
        }

        let path = self
            .schema
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.schema.path));
        FormSchema::load(path)
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    // Execute command
    let passed = match cli.command {
        Commands::Check {
            source,
            record,
            format,
            email_pattern,
        } => {
            let schema = source.load(&config)?;
            commands::check::execute(
                &schema,
                &record,
                format.unwrap_or(config.output.format),
                email_pattern.unwrap_or(config.validation.email_pattern),
            )?
        }
        Commands::Fields { source } => {
            let schema = source.load(&config)?;
            commands::fields::execute(&schema);
            true
        }
        Commands::Rule {
            rules,
            label,
            value,
            email_pattern,
        } => commands::rule::execute(
            &rules,
            &label,
            value.as_deref(),
            email_pattern.unwrap_or(config.validation.email_pattern),
        ),
    };

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    // Logs go to stderr so JSON reports on stdout stay parseable
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
