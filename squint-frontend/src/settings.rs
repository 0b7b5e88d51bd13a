use std::path::PathBuf;

use ratatui::style::{Color, Style};

pub const MIN_HEADER_HEIGHT: u16 = 6;

#[derive(Debug)]
pub struct Settings {
    pub footer_height: u16,
    pub header_height: u16,
    pub path: PathBuf,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            footer_height: 0,
            header_height: MIN_HEADER_HEIGHT,
            path: PathBuf::new(),
            theme: Theme::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub default: Style,
    pub diagnostic: Style,
    pub header: Style,
    pub selected: Style,
    pub text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            default: Style::default().fg(Color::White).bg(Color::Black),
            diagnostic: Style::default().bg(Color::Red),
            header: Style::default().fg(Color::White).bg(Color::DarkGray),
            selected: Style::default().fg(Color::Black).bg(Color::Red),
            text: Style::default().fg(Color::White).bg(Color::Black),
        }
    }
}
