/// Device image picker
///
/// This module handles:
/// - The request options the screen always sends
/// - The picker's answer (cancelled, or a list of assets)
/// - The native dialog implementation (native.rs)

pub mod native;

use async_trait::async_trait;

use crate::error::AppResult;

pub use native::NativePicker;

/// Which kinds of media the picker may return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTypes {
    /// Images and videos
    All,
}

/// Options sent with every pick request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions {
    pub media_types: MediaTypes,
    /// In-picker cropping/editing
    pub allows_editing: bool,
    /// Aspect ratio hint (width, height)
    pub aspect: (u32, u32),
    /// Quality hint, 0.0 to 1.0
    pub quality: f32,
}

impl Default for PickerOptions {
    /// Any media, no editing, square hint, maximum quality
    fn default() -> Self {
        Self {
            media_types: MediaTypes::All,
            allows_editing: false,
            aspect: (1, 1),
            quality: 1.0,
        }
    }
}

/// A single user-selected media item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// `file://` URI of the selected item
    pub uri: String,
    pub file_name: String,
}

impl Asset {
    pub fn new(uri: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            file_name: file_name.into(),
        }
    }
}

/// What the picker returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Cancelled,
    /// Ordered selection; only the first asset is used by the screen
    Selected(Vec<Asset>),
}

#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick(&self, options: PickerOptions) -> AppResult<PickOutcome>;
}
