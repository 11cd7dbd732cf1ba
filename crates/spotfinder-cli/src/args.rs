use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for spotfinder
#[derive(Debug, Parser)]
#[command(
    name = "spotfinder",
    version,
    about = "Search a point-of-interest catalog by text, tags and distance"
)]
pub struct CliArgs {
    /// Path to the catalog (.json, .json.gz or a binary cache built with `build`)
    #[arg(short = 'c', long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Optional JSON file overriding the search configuration (radius bounds, folding, ...)
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Skip the binary cache next to a JSON catalog
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v = info, -vv = debug, -vvv = trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the catalog. Every filter is optional; values are taken as-is
    /// and normalized the same way a web request would be.
    Search {
        /// Free-text query matched against names and descriptions
        #[arg(short = 'q', long = "q")]
        q: Option<String>,

        /// Comma-separated tags; an entry matches if it carries any of them
        #[arg(short = 't', long = "tags")]
        tags: Option<String>,

        /// Latitude of the search center
        #[arg(long = "lat", allow_hyphen_values = true)]
        lat: Option<String>,

        /// Longitude of the search center
        #[arg(long = "lng", allow_hyphen_values = true)]
        lng: Option<String>,

        /// Search radius in kilometres, clamped into the configured bounds
        #[arg(short = 'r', long = "radius-km", allow_hyphen_values = true)]
        radius_km: Option<String>,

        /// Print at most this many results
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,

        /// Also print how many candidates survived each pipeline stage
        #[arg(long = "explain")]
        explain: bool,
    },

    /// Show a summary of the catalog contents
    Stats,

    /// List every distinct tag in the catalog
    Tags,

    /// Great-circle distance between two points, in kilometres
    Distance {
        #[arg(allow_hyphen_values = true)]
        lat1: f64,
        #[arg(allow_hyphen_values = true)]
        lng1: f64,
        #[arg(allow_hyphen_values = true)]
        lat2: f64,
        #[arg(allow_hyphen_values = true)]
        lng2: f64,
    },

    /// Show the pre-filter box used for a search circle
    Bbox {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lng: f64,
        /// Radius in kilometres (clamped like a search radius)
        #[arg(allow_hyphen_values = true)]
        radius_km: f64,
    },

    /// Convert the catalog into a binary cache file
    Build {
        /// Output path for the binary catalog
        #[arg(short = 'o', long = "out")]
        out: PathBuf,

        /// Write the cache without gzip compression
        #[arg(long = "uncompressed")]
        uncompressed: bool,
    },
}
