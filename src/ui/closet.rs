use iced::widget::{button, column, container, horizontal_space, mouse_area, pick_list, row, text};
use iced::{Element, Length, Theme};
use iced_aw::Wrap;

use super::{card, picture};
use crate::config::Config;
use crate::state::data::{Filter, WardrobeItem};
use crate::state::planner::Planner;
use crate::Message;

const ITEM_WIDTH: f32 = 160.0;
const ITEM_IMAGE_HEIGHT: f32 = 128.0;

/// "Your Virtual Closet": filter selector and the filtered item grid
pub fn view<'a>(planner: &Planner, config: &Config) -> Element<'a, Message> {
    let selection = planner.selection();

    let header = row![
        horizontal_space(),
        pick_list(Filter::ALL, Some(selection.active_filter), Message::FilterChanged),
    ];

    let items: Vec<Element<Message>> = planner
        .filtered_wardrobe()
        .into_iter()
        .map(|item| item_card(item, selection.is_favorite(item.id), config))
        .collect();

    let grid: Element<Message> = if items.is_empty() {
        text("Nothing in this category yet").into()
    } else {
        Wrap::with_elements(items)
            .spacing(12.0)
            .line_spacing(12.0)
            .into()
    };

    card("Your Virtual Closet", column![header, grid].spacing(10))
}

fn item_card<'a>(item: &WardrobeItem, favorite: bool, config: &Config) -> Element<'a, Message> {
    // Clicking the picture puts the item into its outfit slot
    let image = mouse_area(picture(
        &config.resolve_image(&item.image_ref),
        &item.label,
        ITEM_IMAGE_HEIGHT,
    ))
    .on_press(Message::SelectForOutfit(item.id));

    let heart_style: fn(&Theme, button::Status) -> button::Style = if favorite {
        button::danger
    } else {
        button::secondary
    };

    let heart = button(text("♥").size(14))
        .on_press(Message::ToggleFavorite(item.id))
        .style(heart_style)
        .padding([2, 8]);

    container(
        column![
            row![horizontal_space(), heart],
            image,
            text(item.label.clone()).size(14),
        ]
        .spacing(4),
    )
    .padding(8)
    .width(Length::Fixed(ITEM_WIDTH))
    .style(container::bordered_box)
    .into()
}
