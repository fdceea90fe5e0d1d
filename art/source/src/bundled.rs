use crate::ArtworkSource;
use anyhow::Context;
use artspace_core::ArtworkRecord;
use log::debug;

/// The read-only gallery asset that ships with the application.
const BUNDLED_GALLERY: &str = include_str!("../resources/gallery.json");

/// The [`ArtworkSource`] for the gallery asset that is compiled into the application.
#[derive(Copy, Clone, Debug, Default)]
pub struct BundledSource;

impl BundledSource {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self
    }
}

impl ArtworkSource for BundledSource {
    fn load(&self) -> anyhow::Result<Vec<ArtworkRecord>> {
        debug!("Reading bundled gallery asset ({} bytes).", BUNDLED_GALLERY.len());
        serde_json::from_str(BUNDLED_GALLERY).context("The bundled gallery asset is malformed.")
    }
}
