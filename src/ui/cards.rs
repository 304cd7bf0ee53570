use iced::widget::{button, column, horizontal_space, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::{card, picture};
use crate::config::Config;
use crate::state::catalog::Catalog;
use crate::state::context::{DAILY_CHALLENGE, PERSONA};
use crate::state::upload::UploadState;
use crate::Message;

const OUTFIT_IMAGE_HEIGHT: f32 = 160.0;

pub fn persona<'a>() -> Element<'a, Message> {
    let body = row![
        text("◉").size(32),
        text(PERSONA),
        horizontal_space(),
        button("Change")
            .on_press(Message::ChangePersona)
            .style(button::secondary),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    card("Your Style Persona", body)
}

/// "Today's Outfit Suggestions" from the outfit catalog
pub fn suggestions<'a>(catalog: &Catalog, config: &Config) -> Element<'a, Message> {
    let outfits: Vec<Element<Message>> = catalog
        .outfits
        .iter()
        .map(|outfit| {
            column![
                picture(
                    &config.resolve_image(&outfit.image_ref),
                    &outfit.label,
                    OUTFIT_IMAGE_HEIGHT,
                ),
                text(outfit.label.clone()),
            ]
            .spacing(6)
            .width(Length::Fixed(200.0))
            .align_x(Alignment::Center)
            .into()
        })
        .collect();

    card(
        "Today’s Outfit Suggestions",
        Wrap::with_elements(outfits).spacing(16.0).line_spacing(16.0),
    )
}

pub fn upload<'a>(upload: &UploadState) -> Element<'a, Message> {
    let body = row![
        button("Choose Files…").on_press(Message::PickWardrobeImages),
        text(upload.status()),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    card("Upload Your Wardrobe", body)
}

pub fn challenge<'a>() -> Element<'a, Message> {
    let body = column![
        text(DAILY_CHALLENGE),
        button("Submit My Look").on_press(Message::SubmitLook),
    ]
    .spacing(8);

    card("Style Challenge of the Day", body)
}
