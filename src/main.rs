use dexbase;

mod screen;
mod widget;

use crate::dexbase::{Config, Database, Error};
use crate::screen::browse;

use iced::widget::{center, column, text};
use iced::{Center, Element, Task, Theme};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .theme(Pokedex::theme)
        .window_size((1500.0, 950.0))
        .run()
}

struct Pokedex {
    state: State,
}

enum State {
    Loading,
    Ready {
        database: Database,
        browse: screen::Browse,
    },
    Failed(Error),
}

#[derive(Debug, Clone)]
enum Message {
    Loaded(Result<Database, Error>),
    Browse(browse::Message),
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();

        (
            Self {
                state: State::Loading,
            },
            Task::perform(Database::load(&config), Message::Loaded),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(database)) => {
                let browse = screen::Browse::new(&database);

                self.state = State::Ready { database, browse };

                Task::none()
            }
            Message::Loaded(Err(error)) => {
                log::error!("{error}");

                self.state = State::Failed(error);

                Task::none()
            }
            Message::Browse(message) => {
                let State::Ready { browse, .. } = &mut self.state else {
                    return Task::none();
                };

                browse.update(message);

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.state {
            State::Loading => center(text("Loading...")).into(),
            State::Ready { database, browse } => browse.view(database).map(Message::Browse),
            State::Failed(error) => center(
                column![
                    text("The Pokédex could not be loaded").size(20),
                    text(error.to_string()).size(12),
                ]
                .spacing(10)
                .align_x(Center),
            )
            .into(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}
