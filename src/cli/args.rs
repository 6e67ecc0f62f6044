//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Hide text in the numeric attributes of SVG images
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: svgstego.toml)
    #[arg(short = 'C', long, global = true, default_value = "svgstego.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Hide a message in an SVG file
    #[command(visible_alias = "h")]
    Hide {
        #[command(flatten)]
        args: HideArgs,
    },

    /// Recover hidden messages from SVG files
    #[command(visible_alias = "r")]
    Reveal {
        #[command(flatten)]
        args: RevealArgs,
    },

    /// Report how much text SVG files can carry
    #[command(visible_alias = "c")]
    Capacity {
        #[command(flatten)]
        args: CapacityArgs,
    },
}

/// Hide command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct HideArgs {
    /// Cover image
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Message text. Read from stdin when neither --message nor --file is given
    #[arg(short, long, conflicts_with = "message_file")]
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(short = 'f', long = "file", value_hint = clap::ValueHint::FilePath)]
    pub message_file: Option<PathBuf>,

    /// Output path, `-` for stdout (default: <stem><suffix>.svg)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

/// Reveal command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RevealArgs {
    /// Stego images to read
    #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,

    /// Fail on planted digits other than 0 and 1
    #[arg(short, long)]
    pub strict: bool,
}

/// Capacity command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CapacityArgs {
    /// Images to analyze
    #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,

    /// Print the reports as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

impl HideArgs {
    /// Whether output goes to stdout.
    pub fn to_stdout(&self) -> bool {
        self.output.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}
