/// Shared data structures for the screen state
///
/// These structs are the data model that flows between the
/// controller (reducer) and the UI layer.
use crate::error::AppError;

/// The one image currently on screen
///
/// Remote and local images are mutually exclusive by construction, and
/// "a local image is loaded" is derived from the variant instead of being
/// tracked as a separate flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayedImage {
    #[default]
    None,
    /// URI returned by the random image endpoint
    Remote(String),
    /// URI of an asset chosen with the image picker
    Local(String),
}

/// Coarse screen state derived from the displayed image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Empty,
    ShowingRemote,
    ShowingLocal,
}

/// Everything the renderer needs at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub image: DisplayedImage,
    /// Most recent failure; overwritten by the next one, never cleared on success
    pub last_error: Option<AppError>,
}

impl Snapshot {
    pub fn state(&self) -> ScreenState {
        match self.image {
            DisplayedImage::None => ScreenState::Empty,
            DisplayedImage::Remote(_) => ScreenState::ShowingRemote,
            DisplayedImage::Local(_) => ScreenState::ShowingLocal,
        }
    }

    pub fn remote_image(&self) -> Option<&str> {
        match &self.image {
            DisplayedImage::Remote(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn local_image(&self) -> Option<&str> {
        match &self.image {
            DisplayedImage::Local(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn is_local_image_loaded(&self) -> bool {
        self.local_image().is_some()
    }

    /// ShowingError overlay: can co-occur with any `ScreenState`
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.state(), ScreenState::Empty);
        assert!(!snapshot.is_local_image_loaded());
        assert!(!snapshot.has_error());
    }

    #[test]
    fn test_accessors_follow_variant() {
        let remote = Snapshot {
            image: DisplayedImage::Remote("https://x/dog.jpg".to_string()),
            last_error: None,
        };
        assert_eq!(remote.state(), ScreenState::ShowingRemote);
        assert_eq!(remote.remote_image(), Some("https://x/dog.jpg"));
        assert_eq!(remote.local_image(), None);

        let local = Snapshot {
            image: DisplayedImage::Local("file:///a.png".to_string()),
            last_error: None,
        };
        assert_eq!(local.state(), ScreenState::ShowingLocal);
        assert_eq!(local.remote_image(), None);
        assert!(local.is_local_image_loaded());
    }
}
