//! Jungle-green palette.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub footer: Style,
    pub heading: Style,
    pub subheading: Style,
    pub card_title: Style,
    pub body: Style,
    pub emphasis: Style,
    pub muted: Style,
    pub panel_border: Style,
    pub panel_title: Style,
    pub user_bubble: Style,
    pub bot_bubble: Style,
    pub typing: Style,
    pub input: Style,
    pub input_disabled: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::jungle()
    }
}

impl Theme {
    pub fn jungle() -> Self {
        let green = Color::Rgb(22, 101, 52);
        let light_green = Color::Rgb(21, 128, 61);
        Self {
            header: Style::default()
                .bg(green)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(Color::Rgb(20, 83, 45)).fg(Color::White),
            heading: Style::default().fg(green).add_modifier(Modifier::BOLD),
            subheading: Style::default()
                .fg(light_green)
                .add_modifier(Modifier::BOLD),
            card_title: Style::default()
                .fg(green)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            body: Style::default(),
            emphasis: Style::default().add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            panel_border: Style::default().fg(light_green),
            panel_title: Style::default()
                .bg(light_green)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            user_bubble: Style::default().fg(Color::White).bg(Color::Rgb(22, 163, 74)),
            bot_bubble: Style::default().fg(Color::Rgb(31, 41, 55)).bg(Color::Rgb(229, 231, 235)),
            typing: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::SLOW_BLINK),
            input: Style::default(),
            input_disabled: Style::default().fg(Color::DarkGray),
        }
    }
}
