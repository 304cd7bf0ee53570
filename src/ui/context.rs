use iced::widget::{button, column, container, row, text, Row};
use iced::{Element, Length, Theme};

use crate::state::context::{Context, ContextTab};
use crate::Message;

/// Weather / schedule tab card
pub fn view<'a>(context: &Context) -> Element<'a, Message> {
    let tabs: Row<Message> = row(ContextTab::ALL.into_iter().map(|tab| {
        let style: fn(&Theme, button::Status) -> button::Style = if tab == context.active_tab {
            button::primary
        } else {
            button::text
        };

        button(text(tab.label()))
            .on_press(Message::ContextTabSelected(tab))
            .style(style)
            .width(Length::FillPortion(1))
            .into()
    }))
    .spacing(4);

    let body: Element<Message> = match context.active_tab {
        ContextTab::Weather => row![
            text("☀").size(40),
            column![
                text(context.weather.summary).size(16),
                text(context.weather.advice),
            ]
            .spacing(4),
        ]
        .spacing(16)
        .into(),
        ContextTab::Schedule => column![
            text(context.schedule.heading()).size(16),
            text(context.schedule.hint()).size(13),
        ]
        .spacing(8)
        .into(),
    };

    container(column![tabs, body].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
