use clap::{Parser, Subcommand, ValueEnum};
use dinedb_core::SortOrder;
use std::path::PathBuf;

/// CLI arguments for dinedb
#[derive(Debug, Parser)]
#[command(
    name = "dinedb",
    version,
    about = "CLI for searching and inspecting the dinedb restaurant catalog",
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Path to a catalog file (.json, .json.gz, .bin, .bin.gz); defaults to the bundled catalog
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Path to an engine config JSON file (suggestion limit, locate timeout)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// List every restaurant
    List {
        #[arg(short, long, value_enum, default_value_t = SortArg::Catalog)]
        sort: SortArg,
    },

    /// Show one restaurant by id
    Show {
        /// Restaurant id (exact)
        id: String,
    },

    /// Search by text and location, optionally ranked by distance
    Search {
        /// Matched against name, cuisine, location and occasions (case-insensitive)
        #[arg(default_value = "")]
        term: String,

        /// Only keep restaurants whose location contains this text
        #[arg(short, long, default_value = "")]
        location: String,

        /// Latitude of the origin to rank by (requires --lon)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Longitude of the origin to rank by (requires --lat)
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },

    /// Typed completions for a partial query
    Suggest {
        partial: String,

        /// Maximum number of suggestions (overrides the config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Rank the whole catalog by distance from a position
    Near {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },

    /// Restaurants suited to an occasion ("date", "family", "all", ...)
    Occasion {
        tag: String,

        #[arg(short, long, value_enum, default_value_t = SortArg::Catalog)]
        sort: SortArg,
    },

    /// Print the map view (center, zoom, markers) for a search
    Map {
        #[arg(default_value = "")]
        term: String,

        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Catalog,
    Rating,
    Name,
    Occasion,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Catalog => SortOrder::Catalog,
            SortArg::Rating => SortOrder::Rating,
            SortArg::Name => SortOrder::Name,
            SortArg::Occasion => SortOrder::Occasion,
        }
    }
}
