use crate::artwork::ArtworkRecord;
use std::fmt::{Display, Formatter};

/// A gallery error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GalleryError {
    /// The gallery can not be constructed from the provided input. The provided string contains a more detailed description of the
    /// problem.
    InvalidGalleryState(String),
}

impl Display for GalleryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::InvalidGalleryState(msg) => write!(f, "Invalid gallery state: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {}

/// A gallery represents a position in a fixed, non-empty list of items.
///
/// The position can be moved forward and backward one step at a time. Moving past either end wraps around to the other end, so the
/// position always refers to a valid item.
///
/// # Generic types
/// * `T`: The item type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Gallery<T = ArtworkRecord> {
    items: Vec<T>,
    position: usize,
}

impl<T> Gallery<T> {
    /// Creates a new instance that starts at the first item.
    ///
    /// # Arguments
    ///
    /// * `items`: The items. This must contain at least one item.
    ///
    /// # Errors
    /// [`GalleryError::InvalidGalleryState`] if `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, GalleryError> {
        Self::with_position(items, 0)
    }

    /// Creates a new instance that starts at the provided position.
    ///
    /// # Arguments
    ///
    /// * `items`: The items. This must contain at least one item.
    /// * `position`: The initial position. This must be a valid index into `items`.
    ///
    /// # Errors
    /// [`GalleryError::InvalidGalleryState`] if `items` is empty or `position` is out of bounds.
    pub fn with_position(items: Vec<T>, position: usize) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::InvalidGalleryState(
                "a gallery requires at least one item".to_string(),
            ));
        }

        if position >= items.len() {
            return Err(GalleryError::InvalidGalleryState(format!(
                "position {} is out of bounds for {} items",
                position,
                items.len()
            )));
        }

        Ok(Self { items, position })
    }

    /// Retrieves the current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Retrieves the number of items. This is never zero.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Retrieves all items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Retrieves the item at the current position.
    pub fn current(&self) -> &T {
        &self.items[self.position]
    }

    /// Moves forward one step, wrapping around to the first item after the last one.
    ///
    /// # Returns
    /// The item at the new position.
    pub fn advance(&mut self) -> &T {
        self.position = if self.position == self.items.len() - 1 {
            0
        } else {
            self.position + 1
        };
        self.current()
    }

    /// Moves backward one step, wrapping around to the last item before the first one.
    ///
    /// # Returns
    /// The item at the new position.
    pub fn retreat(&mut self) -> &T {
        self.position = match self.position {
            0 => self.items.len() - 1,
            position => position - 1,
        };
        self.current()
    }
}

impl<T> TryFrom<Vec<T>> for Gallery<T> {
    type Error = GalleryError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

#[cfg(test)]
mod test_gallery {
    use super::{Gallery, GalleryError};
    use crate::artwork::ArtworkRecord;

    fn scenario_items() -> Vec<ArtworkRecord> {
        vec![
            ArtworkRecord::new("Biomodem", "entropia", 2016, "biomodem.jpg"),
            ArtworkRecord::new("Transgenic organism 02", "entropia", 2016, "transgenic_02.jpg"),
            ArtworkRecord::new("Untitled", "entropia", 2018, "untitled.jpg"),
        ]
    }

    #[test]
    fn test_new_empty() {
        let result = Gallery::<ArtworkRecord>::new(Vec::new());
        assert!(matches!(result, Err(GalleryError::InvalidGalleryState(_))));

        let result = Gallery::<ArtworkRecord>::try_from(Vec::new());
        assert!(matches!(result, Err(GalleryError::InvalidGalleryState(_))));
    }

    #[test]
    fn test_with_position() {
        let gallery = Gallery::with_position(vec![10, 20, 30], 2).unwrap();
        assert_eq!(gallery.position(), 2);
        assert_eq!(*gallery.current(), 30);

        let result = Gallery::with_position(vec![10, 20, 30], 3);
        assert_eq!(
            result,
            Err(GalleryError::InvalidGalleryState(
                "position 3 is out of bounds for 3 items".to_string()
            ))
        );

        let result = Gallery::<u8>::with_position(Vec::new(), 0);
        assert!(matches!(result, Err(GalleryError::InvalidGalleryState(_))));
    }

    #[test]
    fn test_error_display() {
        let err = Gallery::<u8>::new(Vec::new()).unwrap_err();
        assert_eq!(
            "Invalid gallery state: a gallery requires at least one item",
            err.to_string()
        );
    }

    #[test]
    fn test_wrap_forward() {
        let mut gallery = Gallery::with_position(vec![10, 20, 30, 40], 3).unwrap();
        assert_eq!(*gallery.advance(), 10);
        assert_eq!(gallery.position(), 0);
    }

    #[test]
    fn test_wrap_backward() {
        let mut gallery = Gallery::new(vec![10, 20, 30, 40]).unwrap();
        assert_eq!(*gallery.retreat(), 40);
        assert_eq!(gallery.position(), 3);
    }

    #[test]
    fn test_round_trip() {
        let mut gallery = Gallery::with_position(vec![10, 20, 30, 40, 50], 2).unwrap();

        gallery.advance();
        assert_eq!(*gallery.retreat(), 30);
        assert_eq!(gallery.position(), 2);

        gallery.retreat();
        assert_eq!(*gallery.advance(), 30);
        assert_eq!(gallery.position(), 2);

        // Also across the boundaries
        let mut gallery = Gallery::with_position(vec![10, 20, 30], 2).unwrap();
        gallery.advance();
        assert_eq!(*gallery.retreat(), 30);
        let mut gallery = Gallery::new(vec![10, 20, 30]).unwrap();
        gallery.retreat();
        assert_eq!(*gallery.advance(), 10);
    }

    #[test]
    fn test_single_item() {
        let mut gallery = Gallery::new(vec!["only"]).unwrap();
        for _ in 0..5 {
            assert_eq!(*gallery.advance(), "only");
            assert_eq!(gallery.position(), 0);
            assert_eq!(*gallery.retreat(), "only");
            assert_eq!(gallery.position(), 0);
        }
        assert_eq!(*gallery.current(), "only");
    }

    #[test]
    fn test_position_bounds() {
        // A deterministic pseudo-random walk (xorshift) across galleries of several lengths
        let mut state: u32 = 0x2545_f491;
        for len in 1..=7usize {
            let items: Vec<usize> = (0..len).collect();
            let mut gallery = Gallery::new(items).unwrap();
            let mut expected: usize = 0;

            for _ in 0..500 {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;

                let item = if state & 1 == 0 {
                    expected = (expected + 1) % len;
                    *gallery.advance()
                } else {
                    expected = (expected + len - 1) % len;
                    *gallery.retreat()
                };

                assert!(gallery.position() < len);
                assert_eq!(gallery.position(), expected);
                assert_eq!(item, expected);
                assert_eq!(*gallery.current(), expected);
            }
        }
    }

    #[test]
    fn test_scenario() {
        let items = scenario_items();
        let (a, b, c) = (items[0].clone(), items[1].clone(), items[2].clone());
        let mut gallery = Gallery::new(items).unwrap();

        assert_eq!(gallery.current(), &a);
        assert_eq!(gallery.position(), 0);

        assert_eq!(gallery.advance(), &b);
        assert_eq!(gallery.position(), 1);

        assert_eq!(gallery.advance(), &c);
        assert_eq!(gallery.position(), 2);

        assert_eq!(gallery.advance(), &a);
        assert_eq!(gallery.position(), 0);

        assert_eq!(gallery.retreat(), &c);
        assert_eq!(gallery.position(), 2);

        // The items themselves never change
        assert_eq!(gallery.items(), &[a, b, c]);
        assert_eq!(gallery.len(), 3);
    }
}
