//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Gable - Declarative static-website delivery on AWS
#[derive(Parser, Debug)]
#[command(name = "gable")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to gable.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version(VersionArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show what the provisioning engine would declare
    Preview(PreviewArgs),

    /// Write the declaration document for the provisioning engine
    Synth(SynthArgs),

    /// Resolve exported values against recorded engine state
    Outputs(OutputsArgs),
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new gable.yaml
    Init(ConfigInitArgs),

    /// Validate the configuration and the declared stack
    Validate(ConfigValidateArgs),

    /// Show the configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Stack name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output file path
    #[arg(short, long, default_value = "gable.yaml")]
    pub output: Utf8PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigValidateArgs {
    /// Pull-request number scoping the hostname (defaults to $PR_NUM)
    #[arg(long)]
    pub pr: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Pull-request number scoping the hostname (defaults to $PR_NUM)
    #[arg(long)]
    pub pr: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Declaration document formats
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

// Synth command
#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Pull-request number scoping the hostname (defaults to $PR_NUM)
    #[arg(long)]
    pub pr: Option<String>,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<Utf8PathBuf>,

    /// Document format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: DocumentFormat,
}

// Outputs command
#[derive(Args, Debug)]
pub struct OutputsArgs {
    /// Engine state file (JSON or YAML) recorded after provisioning
    #[arg(short, long)]
    pub state: Utf8PathBuf,

    /// Pull-request number scoping the hostname (defaults to $PR_NUM)
    #[arg(long)]
    pub pr: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
