//! The `landgrid` command-line tool.

mod commands;
mod platform;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use landgrid_config::{CliArgs, Command, Config, ConfigError};
use landgrid_registry::{Catalog, RegistryError};
use landgrid_server::{LandServer, ServerError};
use landgrid_view::{LandModel, ModelError, ViewMode};
use platform::{PlatformDirs, PlatformError};

#[derive(Debug, thiserror::Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("Unknown zoning category '{0}' (expected commercial, agricultural or residential)")]
    UnknownCategory(String),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => PlatformDirs::resolve()?,
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    if let Some(log_file) = landgrid_log::init_logging(Some(&dirs.log_dir), &config) {
        tracing::debug!("Writing JSON log to {}", log_file.display());
    }

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_ron(path)?,
        None => Catalog::standard(),
    };
    let model = LandModel::new(catalog)?;
    let view: ViewMode = config.view.default_mode.parse()?;

    let mut out = std::io::stdout().lock();
    let write_err = |source| AppError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    };

    match args.command.unwrap_or(Command::Report) {
        Command::Report => commands::report(&model, &mut out).map_err(write_err)?,
        Command::Parcel { id } => {
            let panel = model.detail(&id)?;
            commands::print_panel(&panel, &mut out).map_err(write_err)?;
        }
        Command::At { col, row } => {
            let owner = model.parcel_at(col, row)?;
            commands::print_owner(col, row, owner.as_ref(), &mut out).map_err(write_err)?;
        }
        Command::Map { selected } => {
            commands::map(&model, view, selected.as_deref(), &mut out).map_err(write_err)?;
        }
        Command::Zone { id, category } => {
            let panel = commands::zone(&model, &id, &category)?;
            commands::print_panel(&panel, &mut out).map_err(write_err)?;
        }
        Command::Serve => {
            dirs.create_dirs()?;
            let mut server = LandServer::new(config.server.address.clone(), config.server.port);
            server.start(Arc::new(model))?;
            tracing::info!(
                "Listening on http://{}:{} (Ctrl-C to stop)",
                config.server.address,
                server.actual_port()
            );
            server.wait()?;
        }
        Command::ExportCatalog { path } => {
            commands::export_catalog(&model, &path)?;
            tracing::info!("Catalog written to {}", path.display());
        }
    }
    Ok(())
}
