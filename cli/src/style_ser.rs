// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reads terminal styles from config strings like `"bold yellow"` or
//! `"dimmed on 236"`.

use std::fmt;

use ansi_term::{Colour, Style};
use serde::{
    de::{Error, Unexpected, Visitor},
    Deserializer,
};

struct StyleVisitor;

impl<'de> Visitor<'de> for StyleVisitor {
    type Value = Style;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a style string such as \"bold red\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        parse_style(v).map_err(|word| E::invalid_value(Unexpected::Str(word), &self))
    }
}

pub fn parse_color(input: &str) -> Option<Colour> {
    match input {
        "black" => Some(Colour::Black),
        "red" => Some(Colour::Red),
        "green" => Some(Colour::Green),
        "yellow" => Some(Colour::Yellow),
        "blue" => Some(Colour::Blue),
        "purple" | "magenta" => Some(Colour::Purple),
        "cyan" => Some(Colour::Cyan),
        "white" => Some(Colour::White),
        _ => {
            if let Ok(value) = input.parse::<u8>() {
                Some(Colour::Fixed(value))
            } else if let Some(hex) = input.strip_prefix('#') {
                if hex.len() != 6 {
                    return None;
                }
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Colour::RGB((value >> 16) as u8, (value >> 8) as u8, value as u8))
            } else {
                None
            }
        }
    }
}

/// Parses a space-separated list of attributes and colors. A color
/// after `on` sets the background. Returns the offending word on
/// failure.
pub fn parse_style(input: &str) -> Result<Style, &str> {
    let mut style = Style::new();
    let mut background = false;
    for word in input.split_whitespace() {
        match word {
            "bold" => style = style.bold(),
            "italic" => style = style.italic(),
            "dimmed" | "dim" => style = style.dimmed(),
            "underline" => style = style.underline(),
            "on" => background = true,
            "plain" | "default" => (),
            _ => {
                let color = parse_color(word).ok_or(word)?;
                if background {
                    style = style.on(color);
                } else {
                    style = style.fg(color);
                }
            }
        }
    }
    Ok(style)
}

pub fn deserialize<'de, D>(des: D) -> Result<Style, D::Error>
where
    D: Deserializer<'de>,
{
    des.deserialize_str(StyleVisitor)
}
