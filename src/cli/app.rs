use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wtx")]
#[command(about = "WiredTiger catalog and table exploration toolkit")]
#[command(version)]
pub struct Cli {
    /// Control colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactively explore the catalog, collections, and indexes
    Explore {
        /// Path to the WiredTiger `wt` binary
        #[arg(short, long)]
        wt: String,

        /// MongoDB data directory (the `wt -h` home)
        #[arg(short = 'H', long)]
        home: String,

        /// Path to the `ksdecode` keystring decoder (enables index key decoding)
        #[arg(short, long)]
        ksdecode: Option<String>,

        /// Read timestamp: a raw integer or "seconds, increment"
        #[arg(short, long)]
        timestamp: Option<String>,
    },

    /// List catalog entries (namespace, ident, index idents)
    Catalog {
        /// Path to the WiredTiger `wt` binary
        #[arg(short, long)]
        wt: String,

        /// MongoDB data directory (the `wt -h` home)
        #[arg(short = 'H', long)]
        home: String,

        /// Read timestamp: a raw integer or "seconds, increment"
        #[arg(short, long)]
        timestamp: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Dump one table by storage ident
    Dump {
        /// Path to the WiredTiger `wt` binary
        #[arg(short, long)]
        wt: String,

        /// MongoDB data directory (the `wt -h` home)
        #[arg(short = 'H', long)]
        home: String,

        /// Storage ident of the table (e.g. "collection-0" or "_mdb_catalog")
        #[arg(short, long)]
        ident: String,

        /// Read timestamp: a raw integer or "seconds, increment"
        #[arg(short, long)]
        timestamp: Option<String>,

        /// Pass values through as hex instead of decoding them as BSON
        #[arg(short, long)]
        raw: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
