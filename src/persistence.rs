// File: src/persistence.rs
use crate::core::config::ResolutionConfig;
use crate::error::PersistenceError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Loads a human-authored dictionary file (JSON). Array order in the file
/// becomes iteration order in the resolver.
pub fn load_json(path: &Path) -> Result<ResolutionConfig, PersistenceError> {
    let reader = BufReader::new(File::open(path)?);
    let config: ResolutionConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    info!(path = %path.display(), phrases = config.phrases.len(), "loaded dictionary JSON");
    Ok(config)
}

/// Writes a compiled bincode snapshot. The file is replaced atomically, so a
/// reader never sees a half-written config.
pub fn save_snapshot(config: &ResolutionConfig, path: &Path) -> Result<(), PersistenceError> {
    config.validate()?;
    let temp_file = write_to_temp(path, |writer| {
        bincode::serialize_into(writer, config).map_err(PersistenceError::from)
    })?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Reads a snapshot written by `save_snapshot`. The whole file is decoded
/// from memory so a corrupt length prefix fails with `Bincode` instead of
/// triggering an allocation of whatever size the prefix claims.
pub fn load_snapshot(path: &Path) -> Result<ResolutionConfig, PersistenceError> {
    let bytes = fs::read(path)?;
    let config: ResolutionConfig = bincode::deserialize(&bytes)?;
    config.validate()?;
    info!(path = %path.display(), phrases = config.phrases.len(), "loaded dictionary snapshot");
    Ok(config)
}

/// Writes pretty JSON, atomically, for hand editing.
pub fn save_json(config: &ResolutionConfig, path: &Path) -> Result<(), PersistenceError> {
    config.validate()?;
    let temp_file = write_to_temp(path, |writer| {
        serde_json::to_writer_pretty(writer, config).map_err(PersistenceError::from)
    })?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Picks the loader by extension: `.json` is authored data, anything else a snapshot.
pub fn load_config(path: &Path) -> Result<ResolutionConfig, PersistenceError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_snapshot(path),
    }
}

fn write_to_temp<F>(path: &Path, write: F) -> Result<NamedTempFile, PersistenceError>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<(), PersistenceError>,
{
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush()?;
    }
    Ok(temp_file)
}
