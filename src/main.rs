use env_logger::{Builder, Env};
use iced::widget::{column, container, scrollable, text, Column};
use iced::{Element, Length, Task, Theme};
use std::path::PathBuf;

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use state::context::{Context, ContextTab};
use state::data::Filter;
use state::planner::Planner;
use state::upload::UploadState;

const ENV_LOG: &str = "STYLE_COACH_LOG";
const ENV_LOG_STYLE: &str = "STYLE_COACH_LOG_STYLE";

/// Main application state
struct StyleCoach {
    /// Catalogs plus filter, favorites and outfit slots
    planner: Planner,
    /// Weather / schedule tabs
    context: Context,
    /// Files picked for upload
    upload: UploadState,
    config: Config,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Closet filter changed
    FilterChanged(Filter),
    /// Heart button on a closet item
    ToggleFavorite(i64),
    /// Closet item picture clicked
    SelectForOutfit(i64),
    ContextTabSelected(ContextTab),
    /// User clicked "Choose Files…"
    PickWardrobeImages,
    /// File picker closed
    WardrobeImagesPicked(Vec<PathBuf>),
    ChangePersona,
    SubmitLook,
}

impl StyleCoach {
    fn new() -> (Self, Task<Message>) {
        let config = Config::load_or_default();
        let planner = Planner::new(state::catalog::Catalog::builtin(), config.default_filter);

        log::info!(
            "style coach ready: {} outfits, {} wardrobe items, assets in {}",
            planner.catalog().outfits.len(),
            planner.catalog().wardrobe.len(),
            config.asset_dir().display()
        );

        (
            StyleCoach {
                planner,
                context: Context::new(),
                upload: UploadState::default(),
                config,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterChanged(filter) => {
                self.planner.set_filter(filter);
            }
            Message::ToggleFavorite(id) => {
                if let Err(err) = self.planner.toggle_favorite(id) {
                    log::warn!("favorite ignored: {}", err);
                }
            }
            Message::SelectForOutfit(id) => {
                if let Err(err) = self.planner.select_for_outfit(id) {
                    log::warn!("selection ignored: {}", err);
                }
            }
            Message::ContextTabSelected(tab) => {
                self.context.select_tab(tab);
            }
            Message::PickWardrobeImages => {
                return Task::perform(
                    state::upload::pick_wardrobe_images(),
                    Message::WardrobeImagesPicked,
                );
            }
            Message::WardrobeImagesPicked(files) => {
                log::info!("{} wardrobe photos picked", files.len());
                self.upload.record(files);
            }
            Message::ChangePersona => {
                log::debug!("persona change requested");
            }
            Message::SubmitLook => {
                log::debug!("challenge look submitted");
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content: Column<Message> = column![
            text("Style Coach").size(32),
            ui::cards::persona(),
            ui::builder::view(self.planner.selection(), &self.config),
            ui::cards::suggestions(self.planner.catalog(), &self.config),
            ui::context::view(&self.context),
            ui::cards::upload(&self.upload),
            ui::closet::view(&self.planner, &self.config),
            ui::cards::challenge(),
        ]
        .spacing(24)
        .padding(16);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        self.config.theme.to_theme()
    }
}

fn main() -> iced::Result {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    iced::application("Style Coach", StyleCoach::update, StyleCoach::view)
        .theme(StyleCoach::theme)
        .centered()
        .run_with(StyleCoach::new)
}
