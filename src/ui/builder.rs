use iced::font::{self, Font};
use iced::widget::{column, row, text, Row};
use iced::{Alignment, Element, Length};

use super::{card, picture};
use crate::config::Config;
use crate::state::data::Category;
use crate::state::selection::SelectionState;
use crate::Message;

const SLOT_IMAGE_HEIGHT: f32 = 96.0;

/// "Build an Outfit": one column per slot, then the style tip
pub fn view<'a>(selection: &SelectionState, config: &Config) -> Element<'a, Message> {
    let slots: Row<Message> = row(Category::ALL.into_iter().map(|category| {
        let content: Element<Message> = match selection.outfit.slot(category) {
            Some(item) => picture(
                &config.resolve_image(&item.image_ref),
                &item.label,
                SLOT_IMAGE_HEIGHT,
            ),
            None => text(category.slot_prompt()).into(),
        };

        column![text(category.title()).size(16), content]
            .spacing(6)
            .width(Length::FillPortion(1))
            .align_x(Alignment::Center)
            .into()
    }))
    .spacing(16);

    let tip = text(selection.style_tip()).font(Font {
        style: font::Style::Italic,
        ..Font::default()
    });

    card("Build an Outfit", column![slots, tip].spacing(16))
}
