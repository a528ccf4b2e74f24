use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jokko")]
#[command(about = "French/Wolof phrase translator")]
#[command(version)]
pub struct Args {
    /// Phrase to translate (reads one phrase per line from stdin if not provided)
    pub text: Option<String>,

    /// Source language code (fr or wo)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Print results as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode for translation
    Chat {
        /// Source language code (fr or wo)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Simulated translation latency in milliseconds
        #[arg(short = 'l', long)]
        latency_ms: Option<u64>,

        /// Do not touch the system clipboard
        #[arg(long)]
        no_clipboard: bool,
    },
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported languages and directions
    Languages,
    /// List the dictionary phrases of a direction
    Phrases {
        /// Source language code (fr or wo)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,
    },
}
