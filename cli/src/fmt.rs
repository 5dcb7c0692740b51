// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ansi_term::{ANSIString, ANSIStrings};

use crate::config::Config;
use crate::session::Session;

fn to_ansi(config: &Config, session: &Session) -> Vec<ANSIString<'static>> {
    let theme = config.get_theme();
    let mut strings = vec![];
    let history = session.history();
    if !history.is_empty() {
        let style = if session.is_partial() {
            theme.partial
        } else {
            theme.history
        };
        strings.push(style.paint(history));
        strings.push("\n".into());
    }
    strings.push(theme.display.paint(session.display()));
    strings
}

/// The history line (when there is one) above the display value.
pub fn to_ansi_string(config: &Config, session: &Session) -> String {
    let strings = to_ansi(config, session);
    ANSIStrings(&strings).to_string()
}

pub fn error_string(config: &Config, err: &eyre::Report) -> String {
    config
        .get_theme()
        .error
        .paint(format!("{:#}", err))
        .to_string()
}
