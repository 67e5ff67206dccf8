use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "presolve",
    about = "Resolve video ids to playable audio stream URLs via mirrored Piped-style APIs",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Per-mirror request timeout in seconds
    #[arg(long, global = true, default_value = "3")]
    pub timeout: u64,

    /// Instance directory URL
    #[arg(long, global = true, env = "PRESOLVE_INSTANCES_URL")]
    pub instances_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a video id to a playable audio URL
    Resolve {
        /// The video id to resolve
        video_id: String,

        /// Output format
        #[arg(short, long, default_value = "plain")]
        output: OutputFormat,
    },

    /// Print the ordered mirror list
    Mirrors {
        /// Output format
        #[arg(short, long, default_value = "plain")]
        output: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Plain,
    Json,
}
