use crate::ArtworkSource;
use anyhow::{anyhow, Context};
use artspace_core::ArtworkRecord;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// The encoding of a gallery asset file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AssetFormat {
    /// A JSON array of records.
    Json,
    /// A bincode-encoded `Vec` of records.
    Bincode,
}

impl AssetFormat {
    /// Determines the format from the extension of the provided path.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("bincode") | Some("bin") => Ok(Self::Bincode),
            _ => Err(anyhow!(
                "Unsupported gallery asset format: {}.",
                path.display()
            )),
        }
    }
}

/// The [`ArtworkSource`] for a gallery asset file on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
    format: AssetFormat,
}

impl FileSource {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    /// * `path`: The asset file. The format is derived from its extension (see [`AssetFormat::from_path()`]).
    pub fn new(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let format = AssetFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AssetFormat {
        self.format
    }
}

impl ArtworkSource for FileSource {
    fn load(&self) -> anyhow::Result<Vec<ArtworkRecord>> {
        debug!(
            "Reading gallery asset {} ({:?}).",
            self.path.display(),
            self.format
        );

        let file = File::open(&self.path)
            .with_context(|| format!("Could not open gallery asset {}.", self.path.display()))?;
        let reader = BufReader::new(file);

        let records = match self.format {
            AssetFormat::Json => serde_json::from_reader(reader)?,
            AssetFormat::Bincode => bincode::deserialize_from(reader)?,
        };
        Ok(records)
    }
}

/// Writes the provided records as a bincode gallery asset.
pub fn write_bincode(records: &[ArtworkRecord], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Could not create gallery asset {}.", path.display()))?;
    bincode::serialize_into(file, records)?;
    Ok(())
}
