use crate::dexbase;

use iced::widget::{container, text};
use iced::{Color, Element};

use std::fmt;

pub fn color(color: dexbase::Color) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

/// A small colored tag, like the ones marking a series or a capture method.
pub fn badge<'a, Message: 'a>(label: String, background: Color) -> Element<'a, Message> {
    container(text(label).size(11).color(Color::WHITE))
        .padding([2, 6])
        .style(move |_theme| container::Style::default().background(background))
        .into()
}

/// A value shown with a translated label in a pick list.
#[derive(Debug, Clone)]
pub struct Labeled<T> {
    pub value: T,
    pub label: String,
}

impl<T> Labeled<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<T: PartialEq> PartialEq for Labeled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Display for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_values_compare_by_value() {
        let one = Labeled::new(1, "1세대");
        let renamed = Labeled::new(1, "Generation 1");

        assert_eq!(one, renamed);
        assert_ne!(one, Labeled::new(2, "1세대"));
        assert_eq!(one.to_string(), "1세대");
    }

    #[test]
    fn palette_colors_convert() {
        let converted = color(dexbase::Color::from_hex(0xff0000));

        assert_eq!(converted, Color::from_rgb8(255, 0, 0));
    }
}
