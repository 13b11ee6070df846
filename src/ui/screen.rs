/// The single DoggyApp screen
///
/// Header, a framed image area and one button per action. Everything is
/// derived from the snapshot plus the downloaded preview of the remote image.
use iced::widget::{button, column, container, image, row, text, Column, Space};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Theme};

use super::palette;
use crate::controller::Action;
use crate::picker::native::path_from_uri;
use crate::state::data::Snapshot;
use crate::Message;

/// Download state of the remote image on screen
#[derive(Debug, Clone)]
pub enum RemotePreview {
    Loading,
    Ready(image::Handle),
    Failed,
}

/// Preview for `uri`, if the one we hold belongs to it
pub fn matching_preview<'a>(
    uri: &str,
    preview: Option<&'a (String, RemotePreview)>,
) -> Option<&'a RemotePreview> {
    preview
        .filter(|(preview_uri, _)| preview_uri == uri)
        .map(|(_, state)| state)
}

/// Build the whole screen
pub fn view<'a>(
    snapshot: &'a Snapshot,
    preview: Option<&'a (String, RemotePreview)>,
) -> Element<'a, Message> {
    let header = container(text("DoggyApp").size(40).color(Color::WHITE))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(75.0))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::COLOR_1)),
            ..container::Style::default()
        });

    let mut buttons = Column::new()
        .spacing(30)
        .push(action_button("Get random doggy", Action::FetchRandomImage))
        .push(action_button("Upload image", Action::PickLocalImage));

    if snapshot.is_local_image_loaded() {
        let uri = snapshot.local_image().unwrap_or_default();
        buttons = buttons.push(action_button(
            "Delete image",
            Action::RemoveLocalImage(uri.to_string()),
        ));
    }

    let body = column![image_area(snapshot, preview), buttons]
        .height(Length::Fill)
        .spacing(30)
        .padding(30)
        .align_x(Alignment::Center);

    // Center the body at 80% of the window width
    let centered = row![
        Space::with_width(Length::FillPortion(1)),
        container(body)
            .width(Length::FillPortion(8))
            .height(Length::Fill),
        Space::with_width(Length::FillPortion(1)),
    ];

    container(column![header, centered])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::COLOR_2)),
            ..container::Style::default()
        })
        .into()
}

/// One thing drawn inside the image area
#[derive(Debug)]
enum AreaItem<'a> {
    ErrorText(String),
    Remote(&'a str, Option<&'a RemotePreview>),
    Local(&'a str),
}

/// What the image area shows, top to bottom
fn area_items<'a>(
    snapshot: &'a Snapshot,
    preview: Option<&'a (String, RemotePreview)>,
) -> Vec<AreaItem<'a>> {
    let mut items = Vec::new();

    if snapshot.has_error() {
        if let Some(err) = &snapshot.last_error {
            items.push(AreaItem::ErrorText(err.to_string()));
        }
    }

    if let Some(uri) = snapshot.remote_image() {
        items.push(AreaItem::Remote(uri, matching_preview(uri, preview)));
    }

    if let Some(uri) = snapshot.local_image() {
        items.push(AreaItem::Local(uri));
    }

    items
}

/// White framed box holding the error text and the current image
fn image_area<'a>(
    snapshot: &'a Snapshot,
    preview: Option<&'a (String, RemotePreview)>,
) -> Element<'a, Message> {
    let content = area_items(snapshot, preview).into_iter().fold(
        Column::new()
            .spacing(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center),
        |content, item| match item {
            AreaItem::ErrorText(message) => content.push(text(message).color(palette::COLOR_5)),
            AreaItem::Remote(uri, state) => content.push(remote_image(uri, state)),
            AreaItem::Local(uri) => content.push(local_image(uri)),
        },
    );

    container(content)
        .width(Length::Fill)
        .height(Length::FillPortion(1))
        .padding(10)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                color: Color::BLACK,
                width: 5.0,
                radius: 25.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn remote_image<'a>(uri: &'a str, preview: Option<&'a RemotePreview>) -> Element<'a, Message> {
    match preview {
        Some(RemotePreview::Ready(handle)) => fitted(handle.clone()),
        Some(RemotePreview::Failed) => text(format!("Could not load {}", uri)).into(),
        Some(RemotePreview::Loading) | None => text("Fetching doggy...").into(),
    }
}

fn local_image<'a>(uri: &'a str) -> Element<'a, Message> {
    match path_from_uri(uri) {
        Some(path) => fitted(image::Handle::from_path(path)),
        None => text(uri).into(),
    }
}

fn fitted<'a>(handle: image::Handle) -> Element<'a, Message> {
    image(handle)
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Rounded white pill button
fn action_button<'a>(label: &'a str, action: Action) -> Element<'a, Message> {
    button(container(text(label).size(25)).center_x(Length::Fill))
        .on_press(Message::Action(action))
        .width(Length::Fill)
        .height(Length::Fixed(50.0))
        .padding(5)
        .style(|_theme: &Theme, status: button::Status| {
            let background = match status {
                button::Status::Hovered => palette::COLOR_4,
                button::Status::Pressed => palette::COLOR_3,
                _ => Color::WHITE,
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color: Color::BLACK,
                border: Border {
                    color: palette::COLOR_1,
                    width: 5.0,
                    radius: 25.0.into(),
                },
                ..button::Style::default()
            }
        })
        .into()
}
