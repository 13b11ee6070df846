use iced::widget::image;
use iced::{Element, Task, Theme};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod error;
mod picker;
mod remote;
mod state;
mod ui;

use config::Config;
use controller::{Action, ScreenController, Services};
use error::AppResult;
use picker::NativePicker;
use remote::DogApi;
use state::screen::Event;
use state::store::SqliteStore;
use ui::screen::RemotePreview;

/// Main application state
struct DoggyApp {
    /// Snapshot plus the collaborators that change it
    controller: ScreenController,
    /// Downloaded bytes of the remote image on screen, keyed by its URI
    preview: Option<(String, RemotePreview)>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User pressed one of the buttons
    Action(Action),
    /// An operation finished
    Completed(Event),
    /// Remote image bytes arrived (or failed)
    PreviewLoaded(String, AppResult<Vec<u8>>),
}

impl DoggyApp {
    /// Create a new instance of the application
    fn new(services: Services) -> (Self, Task<Message>) {
        (
            DoggyApp {
                controller: ScreenController::new(services),
                preview: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Action(action) => {
                Task::perform(self.controller.dispatch(action), Message::Completed)
            }
            Message::Completed(event) => {
                let fetched = match &event {
                    Event::Fetched(Ok(uri)) => Some(uri.clone()),
                    _ => None,
                };

                self.controller.settle(event);
                if self.controller.snapshot().remote_image().is_none() {
                    self.preview = None;
                }

                // A new remote image needs its bytes before it can be drawn
                if let Some(uri) = fetched {
                    self.preview = Some((uri.clone(), RemotePreview::Loading));
                    return Task::perform(self.controller.preview(uri), |(uri, result)| {
                        Message::PreviewLoaded(uri, result)
                    });
                }

                Task::none()
            }
            Message::PreviewLoaded(uri, result) => {
                // Drop downloads for images that are no longer on screen
                if self.controller.snapshot().remote_image() == Some(uri.as_str()) {
                    let state = match result {
                        Ok(bytes) => RemotePreview::Ready(image::Handle::from_bytes(bytes)),
                        Err(_) => RemotePreview::Failed,
                    };
                    self.preview = Some((uri, state));
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::screen::view(self.controller.snapshot(), self.preview.as_ref())
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Wire up the production collaborators
fn build_services(config: &Config) -> AppResult<Services> {
    let fetcher = DogApi::new(config)?;
    info!("🌐 Random images from {}", fetcher.endpoint());

    Ok(Services {
        fetcher: Arc::new(fetcher),
        picker: Arc::new(NativePicker::new()),
        store: Arc::new(SqliteStore::open(&config.storage_path)?),
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::default();
    let services = match build_services(&config) {
        Ok(services) => services,
        Err(err) => {
            error!("❌ Failed to start DoggyApp: {}", err);
            std::process::exit(1);
        }
    };

    info!("🐶 DoggyApp starting");

    iced::application("DoggyApp", DoggyApp::update, DoggyApp::view)
        .theme(DoggyApp::theme)
        .centered()
        .run_with(move || DoggyApp::new(services))
}
