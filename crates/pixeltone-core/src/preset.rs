//! Edit parameter presets stored as JSON files.

use std::fs;
use std::path::Path;

use crate::error::PresetError;
use crate::pipeline::params::EditParams;

/// Read and validate a preset file.
pub fn load_preset(path: &Path) -> Result<EditParams, PresetError> {
    let json = fs::read_to_string(path)?;
    let params = EditParams::from_json(&json)?;
    tracing::info!("loaded preset {}", path.display());
    Ok(params)
}

/// Write `params` to `path` as pretty-printed JSON.
pub fn save_preset(params: &EditParams, path: &Path) -> Result<(), PresetError> {
    params.validate()?;
    fs::write(path, params.to_json()?)?;
    tracing::info!("saved preset {}", path.display());
    Ok(())
}
