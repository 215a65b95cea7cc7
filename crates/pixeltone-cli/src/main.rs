//! Pixeltone — command-line image adjuster.
//!
//! Loads an image, applies brightness, contrast and color filters through
//! the core editing session, and writes the result.

mod args;
mod config;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use pixeltone_core::{
    CodecError, EditParams, EditorSession, PresetError, SessionError, load_image,
    load_preset, save_preset,
};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands, EditArgs};
use crate::config::CliConfig;

/// Errors surfaced to the user by the front end.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::default();
    init_tracing(&config);

    if let Some(threads) = config.threads
        && let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
    {
        tracing::warn!("could not size thread pool to {threads}: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("invalid PIXELTONE_LOG {:?}: {e}", config.log_filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Apply {
            input,
            out,
            edit,
            save_preset: preset_out,
        } => {
            let params = resolve_params(&edit)?;
            apply(&input, &out, params)?;
            if let Some(path) = preset_out {
                save_preset(&params, &path)?;
            }
            Ok(())
        }
        Commands::Info { input } => {
            let image = load_image(&input)?;
            let (width, height) = image.dimensions();
            println!("{}: {width}x{height} ({} pixels)", input.display(), image.pixels().len());
            Ok(())
        }
    }
}

fn resolve_params(edit: &EditArgs) -> Result<EditParams, PresetError> {
    let base = match &edit.preset {
        Some(path) => load_preset(path)?,
        None => EditParams::default(),
    };
    Ok(edit.apply_to(base))
}

fn apply(input: &Path, out: &Path, params: EditParams) -> Result<(), SessionError> {
    let mut session = EditorSession::with_params(params)?;
    session.open(input)?;
    session.save(out)?;
    tracing::info!(
        "wrote {} (brightness={} contrast={} filters=[{}])",
        out.display(),
        params.tone.brightness,
        params.tone.contrast,
        params
            .filters
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}
