//! A module for artwork records.
//!
//! An [`ArtworkRecord`] describes one piece in the gallery. Records are plain values: once loaded they are never edited, only
//! selected.

macro_rules! primitive_wrapper {
    ($(#[doc = $doc:expr])* $vis:vis $name:ident < $ty:ty >) => {
        $(#[doc = $doc])*
        #[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis struct $name($ty);

        impl $name {
            /// Creates a new instance.
            ///
            /// # Arguments
            /// * `value` the value.
            #[inline(always)]
            $vis fn new(value: $ty) -> Self {
                Self(value)
            }

            /// Retrieves the underlying value.
            #[inline(always)]
            $vis fn value(&self) -> $ty {
                self.0
            }
        }

        impl From<$ty> for $name {
            #[inline(always)]
            fn from(val: $ty) -> Self {
                Self::new(val)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    }
}

primitive_wrapper!(
    /// An explicit key for an [`ArtworkRecord`], as provided by the source of the record.
    pub ArtworkId<u32>
);

/// A single piece of art.
#[cfg_attr(
    feature = "serde_support",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ArtworkRecord {
    /// The explicit key. Records without one are identified by their position in the gallery.
    #[cfg_attr(feature = "serde_support", serde(default))]
    id: Option<ArtworkId>,
    /// The title.
    title: String,
    /// The name of the artist.
    artist: String,
    /// The year the piece was made.
    year: i32,
    /// The image reference (URL or local resource identifier).
    image: String,
}

impl ArtworkRecord {
    /// Creates a new instance without an explicit key.
    ///
    /// # Arguments
    /// * `title`: The title.
    /// * `artist`: The name of the artist.
    /// * `year`: The year the piece was made.
    /// * `image`: The image reference.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: artist.into(),
            year,
            image: image.into(),
        }
    }

    /// Consumes this instance and returns a copy with the provided key.
    pub fn with_id(self, id: impl Into<ArtworkId>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// Retrieves the explicit key, if any.
    pub fn id(&self) -> Option<ArtworkId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}
