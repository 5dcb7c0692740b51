// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::style_ser;
use ansi_term::{Colour, Style};
use color_eyre::Result;
use eyre::{eyre, WrapErr};
use serde_derive::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::PathBuf;

pub fn config_path(filename: &str) -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
    path.push("keycalc");
    path.push(filename);
    Ok(path)
}

pub fn history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|mut path| {
        path.push("keycalc");
        path.push("history.txt");
        path
    })
}

#[derive(Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub keycalc: Keycalc,
    pub colors: Colors,
    pub themes: HashMap<String, Theme>,
    #[serde(skip)]
    default_theme: Theme,
    #[serde(skip)]
    disabled_theme: Theme,
}

#[derive(Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Keycalc {
    /// Which prompt to render when run interactively.
    pub prompt: String,
    /// Keep line history between interactive sessions.
    pub history: bool,
}

#[derive(Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    /// Whether colored output is enabled. Unset means on unless
    /// `NO_COLOR` is present.
    pub enabled: Option<bool>,
    /// The name of the current theme.
    pub theme: String,
}

#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    #[serde(deserialize_with = "style_ser::deserialize")]
    pub display: Style,
    #[serde(deserialize_with = "style_ser::deserialize")]
    pub history: Style,
    #[serde(deserialize_with = "style_ser::deserialize")]
    pub partial: Style,
    #[serde(deserialize_with = "style_ser::deserialize")]
    pub error: Style,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keycalc: Default::default(),
            colors: Default::default(),
            themes: Default::default(),
            default_theme: Theme {
                display: Style::new().bold(),
                history: Style::new().fg(Colour::Cyan),
                partial: Style::new().fg(Colour::Cyan).dimmed(),
                error: Style::new().fg(Colour::Red),
            },
            disabled_theme: Theme::default(),
        }
    }
}

impl Default for Keycalc {
    fn default() -> Self {
        Keycalc {
            prompt: "> ".to_owned(),
            history: true,
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            enabled: None,
            theme: "default".to_owned(),
        }
    }
}

impl Config {
    pub fn get_theme(&self) -> &Theme {
        let default_enable_colors = env::var("NO_COLOR") == Err(env::VarError::NotPresent);
        let colors_enabled = self.colors.enabled.unwrap_or(default_enable_colors);

        if colors_enabled {
            let name = &self.colors.theme;
            let theme = self.themes.get(name);
            theme.unwrap_or(&self.default_theme)
        } else {
            &self.disabled_theme
        }
    }
}

pub fn read_config(override_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = override_path {
        PathBuf::from(path)
    } else {
        config_path("config.toml")?
    };
    match read_to_string(path) {
        // Hard fail if the file has invalid TOML.
        Ok(result) => toml::from_str(&result).wrap_err("While parsing config.toml"),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if let Some(override_path) = override_path {
                // Hard fail if user-provided config path doesn't exist
                Err(eyre!(err).wrap_err(format!(
                    "Failed to read provided config file `{}`",
                    override_path
                )))
            } else {
                Ok(Config::default())
            }
        }
        Err(err) => Err(eyre!(err).wrap_err("Failed to read config.toml")),
    }
}
