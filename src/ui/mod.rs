/// User interface module
///
/// Each card on the Style Coach screen is a pure function from state to
/// an `Element`. Interaction flows back to `update` as a `Message`.
///
/// - `builder.rs` - outfit builder slots and the style tip
/// - `closet.rs` - virtual closet grid with filter and favorites
/// - `context.rs` - weather / schedule tabs
/// - `cards.rs` - persona, suggestions, upload and challenge cards

pub mod builder;
pub mod cards;
pub mod closet;
pub mod context;

use iced::widget::{column, container, image, text};
use iced::{Alignment, Element, Length};
use std::path::Path;

use crate::Message;

const CARD_PADDING: u16 = 16;
const CARD_TITLE_SIZE: u16 = 20;

/// Rounded card with a heading
fn card<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        column![text(title).size(CARD_TITLE_SIZE), body.into()].spacing(10),
    )
    .padding(CARD_PADDING)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

/// Catalog image, or the label when the file is missing
fn picture<'a>(path: &Path, label: &str, height: f32) -> Element<'a, Message> {
    if path.is_file() {
        image(image::Handle::from_path(path))
            .height(Length::Fixed(height))
            .into()
    } else {
        container(text(label.to_string()).size(14))
            .height(Length::Fixed(height))
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(container::bordered_box)
            .into()
    }
}
