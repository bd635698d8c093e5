use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for vnlocale
#[derive(Debug, Parser)]
#[command(
    name = "vnlocale",
    version,
    about = "Look up and search Vietnam's provinces, districts and wards"
)]
pub struct CliArgs {
    /// Directory holding province.json, district.json and ward.json (default: bundled dataset)
    #[arg(short = 'd', long = "data-dir", global = true, conflicts_with = "snapshot")]
    pub data_dir: Option<PathBuf>,

    /// Binary snapshot written by `vnlocale snapshot`
    #[arg(short = 's', long = "snapshot", global = true)]
    pub snapshot: Option<PathBuf>,

    /// JSON search configuration file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long = "log-level", global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many records are loaded
    Stats,

    /// List all provinces
    Provinces,

    /// List the districts of a province
    Districts {
        /// Province code (e.g. 79)
        province_code: String,
    },

    /// List the wards of a district
    Wards {
        /// District code (e.g. 770)
        district_code: String,

        /// Only wards that also carry this province code
        #[arg(short = 'p', long = "province")]
        province: Option<String>,
    },

    /// Accent-insensitive ranked search
    Search {
        /// province, district or ward
        category: String,

        /// Search text, accents optional
        query: String,

        /// Restrict districts and wards to this province code
        #[arg(short = 'p', long = "province")]
        province: Option<String>,

        /// Restrict wards to this district code
        #[arg(short = 'D', long = "district")]
        district: Option<String>,

        /// Print at most N hits
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,

        /// Print hits as JSON lines
        #[arg(long = "json")]
        json: bool,
    },

    /// Strip Vietnamese diacritics from text
    Fold {
        text: String,

        /// Keep the original casing instead of lowercasing
        #[arg(long = "keep-case")]
        keep_case: bool,
    },

    /// Write the loaded dataset as a binary snapshot
    Snapshot {
        /// Output file
        out: PathBuf,
    },
}
