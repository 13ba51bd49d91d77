//! CLI definition using clap

use clap::{Parser, Subcommand};
use density_types::{CalcMode, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "density-calc")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Density and mass calculator with product catalog lookup")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Product catalog file (XLSX, CSV or TOML). Uses config value, then tovar.xlsx, if not specified.
    #[arg(long, short = 'c', global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// The four raw measurement fields; parsed by the calculator so that
/// decimal commas are accepted
#[derive(clap::Args, Debug, Clone)]
pub struct Measurements {
    /// Mass in kg (density mode) or density in kg/m³ (mass mode)
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Length in m
    #[arg(allow_hyphen_values = true)]
    pub length: String,

    /// Width in m
    #[arg(allow_hyphen_values = true)]
    pub width: String,

    /// Height in m
    #[arg(allow_hyphen_values = true)]
    pub height: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute density from mass and dimensions (MASS LENGTH WIDTH HEIGHT)
    Density {
        #[command(flatten)]
        input: Measurements,
    },

    /// Compute mass from density and dimensions (DENSITY LENGTH WIDTH HEIGHT)
    Mass {
        #[command(flatten)]
        input: Measurements,
    },

    /// Compute in the given mode
    Calc {
        /// Calculation mode
        #[arg(long, short = 'm', default_value_t = CalcMode::Density)]
        mode: CalcMode,

        #[command(flatten)]
        input: Measurements,
    },

    /// List density grades, or show the grade a value rounds to
    Grades {
        /// Density in kg/m³ to round
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set catalog file path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Print all catalog rows
    List,

    /// Load the catalog and report problems
    Check,
}
