//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::Config;

/// Parcel valuation and taxation model.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "landgrid", about = "Parcel valuation and taxation model")]
pub struct CliArgs {
    /// RON catalog manifest to load instead of the built-in catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Default view mode (base, tax, zoning).
    #[arg(long, global = true)]
    pub view: Option<String>,

    /// Address to bind the HTTP service to.
    #[arg(long, global = true)]
    pub address: Option<String>,

    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print value and tax figures for every parcel.
    Report,
    /// Show the detail panel for one parcel.
    Parcel { id: String },
    /// Show which parcel, if any, owns a cell.
    At { col: i64, row: i64 },
    /// Draw the grid in the terminal using the view colors.
    Map {
        /// Parcel to highlight as selected.
        #[arg(long)]
        selected: Option<String>,
    },
    /// Assign a zoning category to a parcel and show the result.
    Zone { id: String, category: String },
    /// Serve the model over HTTP until interrupted.
    Serve,
    /// Write the loaded catalog as a RON manifest.
    ExportCatalog { path: PathBuf },
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.catalog {
            self.catalog.path = Some(path.clone());
        }
        if let Some(ref view) = args.view {
            self.view.default_mode = view.clone();
        }
        if let Some(ref addr) = args.address {
            self.server.address = addr.clone();
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
