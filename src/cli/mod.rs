pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "twet")]
#[command(about = "Read local twtxt feeds", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log feed lines that could not be parsed
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List records from all feeds, oldest first
    Records {
        /// twtxt files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show a record and its replies
    Thread {
        /// Hash of the root record, with or without a leading '#'
        hash: String,
        /// twtxt files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Count hashtags across all feeds
    Tags {
        /// twtxt files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
