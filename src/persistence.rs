// File: src/persistence.rs
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk encodings of an `EngineConfig`, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`, meant to be edited by hand.
    Json,
    /// `.bin`, compact bincode.
    Binary,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("bin") => Ok(Self::Binary),
            _ => Err(Error::UnknownFormat(path.to_path_buf())),
        }
    }
}

/// Writes the config atomically: a temp file in the target directory is filled
/// and then renamed over `path`.
pub fn save_to_disk(config: &EngineConfig, path: &Path) -> Result<()> {
    let format = ConfigFormat::from_path(path)?;
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match format {
            ConfigFormat::Json => serde_json::to_writer_pretty(&mut writer, config)?,
            ConfigFormat::Binary => bincode::serialize_into(&mut writer, config)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path)?;
    tracing::debug!(path = %path.display(), ?format, "saved engine config");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<EngineConfig> {
    let format = ConfigFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);

    let config = match format {
        ConfigFormat::Json => serde_json::from_reader(reader)?,
        ConfigFormat::Binary => bincode::deserialize_from(reader)?,
    };
    tracing::debug!(path = %path.display(), ?format, "loaded engine config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::EquivalenceTable;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.json")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("b.bin")).unwrap(), ConfigFormat::Binary);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("b.toml")),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn saves_into_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("engine.bin");

        let mut config = EngineConfig::default();
        config.equivalences = EquivalenceTable::from_pairs([('A', ["a1", "a2"])]).unwrap();
        save_to_disk(&config, &path).unwrap();

        assert_eq!(load_from_disk(&path).unwrap(), config);
    }

    #[test]
    fn json_file_is_readable_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        save_to_disk(&EngineConfig::default(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"equivalences\""));
        assert!(text.contains("nyi"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_disk(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
