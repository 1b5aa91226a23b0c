use crate::utils::any::Any;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct Spec {
    #[serde(default, deserialize_with = "Spec::deserialize_color")]
    pub fg: Color,

    #[serde(default, deserialize_with = "Spec::deserialize_color")]
    pub bg: Color,

    #[serde(default)]
    pub bold: bool,
}

impl Spec {
    fn deserialize_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let color = Color::deserialize(deserializer)?;
        let Color::Rgb(r, g, b) = color else { return color.ok() };
        let index = ansi_colours::ansi256_from_rgb((r, g, b));

        Color::Indexed(index).ok()
    }

    pub fn style(&self) -> Style {
        let style = Style::new().fg(self.fg).bg(self.bg);

        if self.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ColorScheme {
    pub title: Spec,
    pub label: Spec,
    pub input: Spec,
    pub focused_input: Spec,
    pub placeholder: Spec,
    pub summary: Spec,
    pub loading: Spec,
    pub error: Spec,
    pub card: Spec,
    pub cover: Spec,
    pub pager: Spec,
    pub disabled: Spec,
    pub footer: Spec,
}
