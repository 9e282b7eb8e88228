//! Note color labels → terminal styles.
//!
//! The palette labels are soft pastel backgrounds with black text. Labels
//! outside the palette go through ratatui's own parser (`"lightcyan"`,
//! `"#ffcc00"`, ...). Anything else renders on the default background.

use ratatui::style::{Color, Style};
use std::str::FromStr;

pub fn background(label: &str) -> Option<Color> {
    let color = match label.trim().to_ascii_lowercase().as_str() {
        "white" => Color::Rgb(255, 255, 255),
        "red" => Color::Rgb(242, 139, 130),
        "orange" => Color::Rgb(251, 188, 4),
        "yellow" => Color::Rgb(255, 244, 117),
        "green" => Color::Rgb(204, 255, 144),
        "teal" => Color::Rgb(167, 255, 235),
        "blue" => Color::Rgb(203, 240, 248),
        "darkblue" => Color::Rgb(174, 203, 250),
        "purple" => Color::Rgb(215, 174, 251),
        "pink" => Color::Rgb(253, 207, 232),
        "brown" => Color::Rgb(230, 201, 168),
        "gray" | "grey" => Color::Rgb(232, 234, 237),
        other => return Color::from_str(other).ok(),
    };
    Some(color)
}

/// Card style for a note color: tinted background with readable text.
pub fn card_style(label: &str) -> Style {
    match background(label) {
        Some(bg) => Style::default().bg(bg).fg(Color::Black),
        None => Style::default(),
    }
}
