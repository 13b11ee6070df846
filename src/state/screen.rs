/// Screen transitions
///
/// Each operation reports what happened as an `Event`, and the snapshot is
/// rebuilt from the old one plus that event. Nothing here touches the
/// network, the picker or the store, so every rule is testable without a
/// rendering surface.
use super::data::{DisplayedImage, Snapshot};
use crate::error::AppResult;
use crate::picker::PickOutcome;

/// Outcome of (a step of) one of the screen's operations
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A fetch was requested; any remote image is dropped before the network await
    FetchStarted,
    /// Random image endpoint answered (or failed)
    Fetched(AppResult<String>),
    /// Image picker returned (or failed)
    Picked(AppResult<PickOutcome>),
    /// Store removal for the local image finished (or failed)
    Removed(AppResult<()>),
}

impl Snapshot {
    /// Produce the next snapshot from this one plus an event
    pub fn apply(self, event: Event) -> Snapshot {
        let Snapshot { image, last_error } = self;

        match event {
            Event::FetchStarted => {
                let image = match image {
                    DisplayedImage::Remote(_) => DisplayedImage::None,
                    other => other,
                };
                Snapshot { image, last_error }
            }
            Event::Fetched(Ok(uri)) => Snapshot {
                image: DisplayedImage::Remote(uri),
                last_error,
            },
            Event::Picked(Ok(PickOutcome::Selected(assets))) => match assets.into_iter().next() {
                Some(asset) => Snapshot {
                    image: DisplayedImage::Local(asset.uri),
                    last_error,
                },
                None => Snapshot { image, last_error },
            },
            Event::Picked(Ok(PickOutcome::Cancelled)) => Snapshot { image, last_error },
            Event::Removed(Ok(())) => {
                let image = match image {
                    DisplayedImage::Local(_) => DisplayedImage::None,
                    other => other,
                };
                Snapshot { image, last_error }
            }
            Event::Fetched(Err(err)) | Event::Picked(Err(err)) | Event::Removed(Err(err)) => {
                Snapshot {
                    image,
                    last_error: Some(err),
                }
            }
        }
    }
}
