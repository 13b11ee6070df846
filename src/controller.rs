/// Screen controller
///
/// Owns the current snapshot and the three collaborators. A user action is
/// dispatched into a future that talks to the outside world and resolves
/// to an `Event`; settling that event produces the next snapshot. Futures
/// are never cancelled, so when several are in flight the last one to
/// complete wins.
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::error::AppResult;
use crate::picker::{ImagePicker, PickOutcome, PickerOptions};
use crate::remote::RandomImageSource;
use crate::state::data::Snapshot;
use crate::state::screen::Event;
use crate::state::store::KeyValueStore;

/// User actions, one per button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchRandomImage,
    PickLocalImage,
    /// Carries the URI of the local image currently on screen
    RemoveLocalImage(String),
}

/// External collaborators of the screen
#[derive(Clone)]
pub struct Services {
    pub fetcher: Arc<dyn RandomImageSource>,
    pub picker: Arc<dyn ImagePicker>,
    pub store: Arc<dyn KeyValueStore>,
}

pub struct ScreenController {
    snapshot: Snapshot,
    services: Services,
}

impl ScreenController {
    pub fn new(services: Services) -> Self {
        Self {
            snapshot: Snapshot::default(),
            services,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Start an action.
    ///
    /// Any transition that happens before the first await (a fetch drops
    /// the current remote image) is applied right away. The returned future
    /// resolves to the completion event, to be passed to `settle`.
    pub fn dispatch(&mut self, action: Action) -> impl Future<Output = Event> + Send + 'static {
        info!("👆 {:?}", action);

        if action == Action::FetchRandomImage {
            self.settle(Event::FetchStarted);
        }

        let services = self.services.clone();
        async move {
            match action {
                Action::FetchRandomImage => fetch_random_image(services.fetcher.as_ref()).await,
                Action::PickLocalImage => pick_local_image(services.picker.as_ref()).await,
                Action::RemoveLocalImage(uri) => {
                    remove_local_image(services.store.as_ref(), &uri).await
                }
            }
        }
    }

    /// Apply a completion event to the snapshot
    pub fn settle(&mut self, event: Event) {
        self.snapshot = std::mem::take(&mut self.snapshot).apply(event);
        debug!("🔄 Screen is now {:?}", self.snapshot.state());
    }

    /// Download the bytes of a remote image for display
    pub fn preview(
        &self,
        uri: String,
    ) -> impl Future<Output = (String, AppResult<Vec<u8>>)> + Send + 'static {
        let fetcher = Arc::clone(&self.services.fetcher);
        async move {
            let result = fetcher.download(&uri).await;
            if let Err(err) = &result {
                warn!("⚠️  Could not download {}: {}", uri, err);
            }
            (uri, result)
        }
    }
}

async fn fetch_random_image(fetcher: &dyn RandomImageSource) -> Event {
    let result = fetcher.fetch_random().await;
    if let Err(err) = &result {
        error!("❌ {}", err);
    }
    Event::Fetched(result)
}

async fn pick_local_image(picker: &dyn ImagePicker) -> Event {
    let result = picker.pick(PickerOptions::default()).await;
    match &result {
        Err(err) => error!("❌ {}", err),
        Ok(PickOutcome::Selected(assets)) if assets.is_empty() => {
            warn!("⚠️  Picker returned an empty selection, ignoring")
        }
        Ok(_) => {}
    }
    Event::Picked(result)
}

/// The key was never written by this screen, so the removal is a no-op
/// against the store; on success the image is hidden anyway.
async fn remove_local_image(store: &dyn KeyValueStore, uri: &str) -> Event {
    let result = store.remove(uri).await;
    if let Err(err) = &result {
        error!("❌ {}", err);
    }
    Event::Removed(result)
}
