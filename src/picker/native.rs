use async_trait::async_trait;
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

use super::{Asset, ImagePicker, MediaTypes, PickOutcome, PickerOptions};
use crate::error::{AppError, AppResult};

/// Image extensions the dialog offers (and the renderer can draw)
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "ico"];

/// Video extensions the dialog offers for `MediaTypes::All`
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "mkv", "avi"];

/// Native file dialog standing in for the device photo library
///
/// Desktop dialogs have no cropping or compression step, so
/// `allows_editing`, `aspect` and `quality` are accepted and logged but
/// have no effect on the returned file.
#[derive(Debug, Default, Clone)]
pub struct NativePicker;

impl NativePicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImagePicker for NativePicker {
    async fn pick(&self, options: PickerOptions) -> AppResult<PickOutcome> {
        debug!(
            "🖼️  Opening picker: media={:?} editing={} aspect={}:{} quality={}",
            options.media_types,
            options.allows_editing,
            options.aspect.0,
            options.aspect.1,
            options.quality
        );

        let mut dialog = AsyncFileDialog::new().set_title("Select an image");
        for (name, extensions) in filters_for(options.media_types) {
            dialog = dialog.add_filter(name, extensions.as_slice());
        }

        let Some(handle) = dialog.pick_file().await else {
            info!("Picker cancelled");
            return Ok(PickOutcome::Cancelled);
        };

        let asset = asset_from_path(handle.path()).await?;
        info!("📥 Picked {}", asset.uri);

        Ok(PickOutcome::Selected(vec![asset]))
    }
}

/// Dialog filters for a media type request
fn filters_for(media_types: MediaTypes) -> Vec<(&'static str, Vec<&'static str>)> {
    match media_types {
        MediaTypes::All => {
            let all = IMAGE_EXTENSIONS
                .iter()
                .chain(VIDEO_EXTENSIONS)
                .copied()
                .collect();
            vec![
                ("All media", all),
                ("Images", IMAGE_EXTENSIONS.to_vec()),
                ("Videos", VIDEO_EXTENSIONS.to_vec()),
            ]
        }
    }
}

/// Build an asset for a chosen file, failing if it can't be read
async fn asset_from_path(path: &Path) -> AppResult<Asset> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| AppError::Picker(format!("Cannot read {}: {}", path.display(), e)))?;

    if !metadata.is_file() {
        return Err(AppError::Picker(format!("Not a file: {}", path.display())));
    }

    // Dialogs return absolute paths, but be safe with relative ones
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| AppError::Picker(e.to_string()))?
            .join(path)
    };

    let uri = Url::from_file_path(&absolute)
        .map_err(|_| AppError::Picker(format!("Invalid file path: {}", absolute.display())))?;

    let file_name = absolute
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(Asset::new(uri.to_string(), file_name))
}

/// Turn a `file://` URI back into a path the renderer can open
pub fn path_from_uri(uri: &str) -> Option<PathBuf> {
    Url::parse(uri).ok()?.to_file_path().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_media_offers_images_and_videos() {
        let filters = filters_for(MediaTypes::All);
        let (name, extensions) = &filters[0];

        assert_eq!(*name, "All media");
        assert!(extensions.contains(&"png"));
        assert!(extensions.contains(&"mp4"));
    }

    #[test]
    fn test_narrower_filters_follow_combined_one() {
        let filters = filters_for(MediaTypes::All);
        assert_eq!(filters.len(), 3);
        assert!(!filters[1].1.contains(&"mp4"));
        assert!(!filters[2].1.contains(&"png"));
    }

    #[tokio::test]
    async fn test_asset_from_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"not really a png").unwrap();

        let asset = asset_from_path(&file).await.unwrap();

        assert!(asset.uri.starts_with("file://"));
        assert_eq!(asset.file_name, "a.png");
        assert_eq!(path_from_uri(&asset.uri), Some(file));
    }

    #[tokio::test]
    async fn test_asset_from_missing_file_is_picker_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = asset_from_path(&dir.path().join("gone.png")).await;

        assert!(matches!(result, Err(AppError::Picker(_))));
    }

    #[tokio::test]
    async fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = asset_from_path(dir.path()).await;

        assert!(matches!(result, Err(AppError::Picker(_))));
    }

    #[test]
    fn test_remote_uri_has_no_path() {
        assert_eq!(path_from_uri("https://x/dog.jpg"), None);
        assert_eq!(path_from_uri("not a uri"), None);
    }
}
