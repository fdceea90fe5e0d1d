//! Sources of artwork records.
//!
//! A source supplies the full, ordered list of [`ArtworkRecord`]s exactly once, before a [`Gallery`] is created from it.

use artspace_core::{ArtworkRecord, Gallery};
use log::info;

mod bundled;
mod file;

pub use bundled::BundledSource;
pub use file::{write_bincode, AssetFormat, FileSource};

/// A supplier of artwork records.
pub trait ArtworkSource {
    /// Loads all records in the order in which they are stored.
    fn load(&self) -> anyhow::Result<Vec<ArtworkRecord>>;
}

/// The order in which records are handed to the gallery.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Order {
    /// The order of the asset.
    #[default]
    Stored,
    /// Ascending by year. Records of the same year keep their stored order.
    ByYear,
}

impl Order {
    /// Applies this order to the provided records.
    pub fn apply(self, records: &mut [ArtworkRecord]) {
        match self {
            Order::Stored => {}
            Order::ByYear => records.sort_by_key(|record| record.year()),
        }
    }
}

/// Loads all records from the provided source in the requested order.
pub fn load_records(source: &impl ArtworkSource, order: Order) -> anyhow::Result<Vec<ArtworkRecord>> {
    let mut records = source.load()?;
    order.apply(&mut records);
    info!("Loaded {} artworks ({:?} order).", records.len(), order);
    Ok(records)
}

/// Loads all records from the provided source and creates a [`Gallery`] from them.
///
/// # Errors
/// Any error of the source, or [`artspace_core::GalleryError::InvalidGalleryState`] if the source holds no records.
pub fn load_gallery(source: &impl ArtworkSource, order: Order) -> anyhow::Result<Gallery> {
    let records = load_records(source, order)?;
    Ok(Gallery::new(records)?)
}
