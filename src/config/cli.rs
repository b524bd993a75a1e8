use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "card-format")]
#[command(about = "Format payment card number and CVV field values")]
pub struct CliConfig {
    /// Path to a TOML file with field bindings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format a card number value
    CardNumber { value: String },

    /// Format a CVV value
    Cvv { value: String },

    /// Format each stdin line as the named field
    Stream {
        #[arg(short, long, default_value = "card_number")]
        field: String,
    },

    /// Replay TEXT keystroke by keystroke into the named field
    Type {
        #[arg(short, long, default_value = "card_number")]
        field: String,
        text: String,
    },
}
