//! Core types for the ArtSpace gallery.
//!
//! * [`artwork`]: The [`ArtworkRecord`](artwork::ArtworkRecord) value type.
//! * [`gallery`]: The [`Gallery`](gallery::Gallery) cursor that steps through a fixed list of records.

pub mod artwork;
pub mod gallery;

pub use artwork::{ArtworkId, ArtworkRecord};
pub use gallery::{Gallery, GalleryError};
