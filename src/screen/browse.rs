use crate::dexbase::detail::{Capture, GameCapture, Locations, SeriesCapture};
use crate::dexbase::evolution::Link;
use crate::dexbase::pokemon;
use crate::dexbase::search;
use crate::dexbase::selection::ViewMode;
use crate::dexbase::series::{self, Generation};
use crate::dexbase::{Database, Detail, Selection, Series};
use crate::widget::{self, Labeled, badge};

use iced::widget::{
    button, center, column, container, space, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Center, Element, Fill};

pub struct Browse {
    selection: Selection,
}

#[derive(Debug, Clone)]
pub enum Message {
    ModeSelected(ViewMode),
    GenerationSelected(Generation),
    SeriesSelected(series::Id),
    SearchChanged(String),
    PokemonSelected(pokemon::Number),
}

impl Browse {
    pub fn new(database: &Database) -> Self {
        Self {
            selection: Selection::initial(&database.catalog),
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ModeSelected(mode) => {
                self.selection.mode = mode;
            }
            Message::GenerationSelected(generation) => {
                self.selection.generation = generation;
            }
            Message::SeriesSelected(series) => {
                self.selection.series = series;
            }
            Message::SearchChanged(search) => {
                self.selection.search = search;
            }
            Message::PokemonSelected(number) => {
                self.selection.selected = Some(number);
            }
        }

        log::debug!("{:?}", self.selection);
    }

    pub fn view<'a>(&'a self, database: &'a Database) -> Element<'a, Message> {
        let groups = database.groups(&self.selection);

        let header = row![
            text(database.tr("appTitle")).size(24),
            text(database.tr("appSubtitle")).size(14),
        ]
        .spacing(15)
        .align_y(Center);

        let controls = {
            let modes: Vec<_> = ViewMode::ALL
                .iter()
                .map(|mode| Labeled::new(*mode, database.tr(mode.key())))
                .collect();

            let selected_mode = modes
                .iter()
                .find(|mode| mode.value == self.selection.mode)
                .cloned();

            let mode = pick_list(modes, selected_mode, |mode| {
                Message::ModeSelected(mode.value)
            })
            .padding([5, 10])
            .text_size(12);

            let generations: Vec<_> = database
                .catalog
                .generations()
                .into_iter()
                .map(|generation| {
                    Labeled::new(
                        generation,
                        format!("{generation}{}", database.tr("generation")),
                    )
                })
                .collect();

            let selected_generation = generations
                .iter()
                .find(|generation| generation.value == self.selection.generation)
                .cloned();

            let generation = pick_list(generations, selected_generation, |generation| {
                Message::GenerationSelected(generation.value)
            })
            .padding([5, 10])
            .text_size(12);

            let series = pick_list(
                &database.catalog.games[..],
                database.catalog.series(&self.selection.series),
                |series: Series| Message::SeriesSelected(series.id),
            )
            .padding([5, 10])
            .text_size(12);

            let search = text_input(database.tr("searchPlaceholder"), &self.selection.search)
                .on_input(Message::SearchChanged)
                .padding(10);

            row![
                control(database.tr("viewMode"), mode),
                control(database.tr("generation"), generation),
                control(database.tr("series"), series),
                search,
            ]
            .spacing(20)
            .align_y(Center)
        };

        let legend = row(groups.iter().enumerate().map(|(index, series)| {
            badge(
                series.label.clone(),
                widget::color(database.color_of(series, index)),
            )
        }))
        .spacing(5);

        let list = {
            let entries = database.visible(&self.selection, &groups);

            let items = entries.into_iter().map(|entry| {
                let is_selected = self.selection.selected == Some(entry.pokemon.number);

                item(entry, is_selected)
            });

            pane(
                database.tr("pokemonList"),
                scrollable(column(items).spacing(5)).height(Fill).into(),
            )
        };

        let (details, captures) = match database.detail(&self.selection, &groups) {
            Some(detail) => (
                pane(database.tr("dexInfo"), info(&detail, database)),
                pane(
                    database.tr("captureInfo"),
                    scrollable(capture(&detail.capture, database))
                        .height(Fill)
                        .into(),
                ),
            ),
            None => (
                pane(database.tr("dexInfo"), prompt(database.tr("selectPrompt"))),
                pane(
                    database.tr("captureInfo"),
                    prompt(database.tr("capturePrompt")),
                ),
            ),
        };

        column![
            header,
            controls,
            legend,
            row![list, details, captures].spacing(10).height(Fill),
        ]
        .spacing(15)
        .padding(20)
        .into()
    }
}

fn control<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(label).size(12), input.into()]
        .spacing(5)
        .into()
}

fn pane<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(18), content].spacing(10))
        .padding(10)
        .width(Fill)
        .height(Fill)
        .style(container::bordered_box)
        .into()
}

fn prompt(message: &str) -> Element<'_, Message> {
    center(text(message).size(14)).into()
}

fn item(entry: search::Entry<'_>, is_selected: bool) -> Element<'_, Message> {
    let number = entry.pokemon.number;

    let badges = row(entry.badges.into_iter().map(|tag| {
        let color = widget::color(tag.color);

        badge(
            format!("{}:{}", tag.series.label, tag.status),
            if tag.status.is_available() {
                color
            } else {
                color.scale_alpha(0.4)
            },
        )
    }))
    .spacing(5);

    button(
        column![
            text!("#{number} {name}", name = entry.pokemon.name()).size(14),
            badges
        ]
        .spacing(5),
    )
    .on_press(Message::PokemonSelected(number))
    .width(Fill)
    .padding([8, 10])
    .style(move |theme, status| {
        if is_selected {
            let palette = theme.extended_palette();

            button::Style {
                background: Some(palette.background.strong.color.into()),
                text_color: palette.background.strong.text,
                ..button::text(theme, status)
            }
        } else {
            button::text(theme, status)
        }
    })
    .into()
}

fn info<'a>(detail: &Detail<'a>, database: &'a Database) -> Element<'a, Message> {
    let pokemon = detail.pokemon;
    let stats = pokemon.base_stats;

    let facts = column![
        text!("#{} {}", pokemon.number, pokemon.name()).size(20),
        text!("{}: {}", database.tr("type"), pokemon.types.join(", ")),
        text!("{}: {}", database.tr("ability"), pokemon.abilities.join(", ")),
        text!(
            "{}: {}m  {}: {}kg",
            database.tr("height"),
            pokemon.height_m,
            database.tr("weight"),
            pokemon.weight_kg
        ),
    ]
    .spacing(8);

    let stats = row(
        [
            ("hp", stats.hp),
            ("atk", stats.atk),
            ("def", stats.def),
            ("spa", stats.spa),
            ("spd", stats.spd),
            ("spe", stats.spe),
        ]
        .into_iter()
        .map(|(key, value)| {
            container(text!("{} {value}", database.tr(key)).size(12))
                .padding(5)
                .style(container::bordered_box)
                .into()
        }),
    )
    .spacing(5);

    let evolution = row![
        evolution(detail.evolution.prev, database.tr("preEvolution"), database),
        evolution(detail.evolution.next, database.tr("nextEvolution"), database),
    ]
    .spacing(10);

    column![facts, stats, space::horizontal().height(10), evolution]
        .spacing(10)
        .into()
}

fn evolution<'a>(link: Option<Link>, label: &'a str, database: &'a Database) -> Element<'a, Message> {
    let Some(link) = link else {
        return button(text!("{label}: {}", database.tr("notAvailable")).size(12))
            .padding([5, 10])
            .style(button::secondary)
            .into();
    };

    let name = database
        .catalog
        .pokemon(link.number)
        .map(|pokemon| pokemon.name())
        .unwrap_or_default();

    let is_available = link.available;

    button(text!("{label}: #{} {name}", link.number).size(12))
        .on_press(Message::PokemonSelected(link.number))
        .padding([5, 10])
        .style(move |theme, status| {
            if is_available {
                button::success(theme, status)
            } else {
                button::secondary(theme, status)
            }
        })
        .into()
}

fn capture<'a>(capture: &Capture<'a>, database: &'a Database) -> Element<'a, Message> {
    match capture {
        Capture::NoData => text(database.tr("noCapture")).size(14).into(),
        Capture::Series(series) => column(
            series
                .iter()
                .map(|capture| series_capture(capture, database)),
        )
        .spacing(10)
        .into(),
    }
}

fn series_capture<'a>(capture: &SeriesCapture<'a>, database: &'a Database) -> Element<'a, Message> {
    container(
        column![
            text(capture.series.label.as_str())
                .size(16)
                .color(widget::color(capture.color)),
            text(database.tr("mapText")).size(11),
            column(capture.games.iter().map(|game| game_capture(game, database))).spacing(10),
        ]
        .spacing(8),
    )
    .padding(10)
    .width(Fill)
    .style(container::bordered_box)
    .into()
}

fn game_capture<'a>(capture: &GameCapture<'a>, database: &'a Database) -> Element<'a, Message> {
    let color = widget::color(capture.color);

    let methods: Element<'a, Message> = if capture.special_methods.is_empty() {
        text("-").size(11).into()
    } else {
        row(capture
            .special_methods
            .iter()
            .map(|method| badge(method.clone(), color)))
        .spacing(5)
        .into()
    };

    let locations: Element<'a, Message> = match capture.locations {
        Locations::Known(locations) => column(
            locations
                .iter()
                .map(|location| text!("· {location}").size(12).into()),
        )
        .spacing(2)
        .into(),
        Locations::Unknown => text(database.tr("captureUnknown")).size(12).into(),
    };

    column![
        row![
            badge(
                format!("{}:{}", capture.game.label, capture.status),
                color
            ),
            methods,
        ]
        .spacing(10)
        .align_y(Center),
        locations,
    ]
    .spacing(5)
    .into()
}
