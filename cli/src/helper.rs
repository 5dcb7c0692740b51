// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Helper,
};
use rustyline::{Context as LineContext, Result};

use keycalc_core::OperatorTable;

use crate::keys::key_names;
use crate::repl::COMMANDS;

/// Completes key names and REPL commands.
pub struct KeycalcHelper {
    names: Vec<&'static str>,
}

impl KeycalcHelper {
    pub fn new(table: &OperatorTable) -> KeycalcHelper {
        let mut names = key_names(table);
        names.extend(COMMANDS);
        KeycalcHelper { names }
    }

    pub fn candidates<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.names
            .iter()
            .copied()
            .filter(move |name| !prefix.is_empty() && name.starts_with(prefix))
    }
}

impl Completer for KeycalcHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &LineContext) -> Result<(usize, Vec<Pair>)> {
        let start = line[..pos].rfind(' ').map(|i| i + 1).unwrap_or(0);
        let prefix = &line[start..pos];

        let results = self
            .candidates(prefix)
            .map(|name| Pair {
                display: name.to_owned(),
                replacement: name.to_owned(),
            })
            .collect();

        Ok((start, results))
    }
}

impl Helper for KeycalcHelper {}

impl Validator for KeycalcHelper {}

impl Highlighter for KeycalcHelper {}

impl Hinter for KeycalcHelper {
    type Hint = String;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn completes_prefixes() {
        let helper = KeycalcHelper::new(&OperatorTable::builtin());
        let found: Vec<_> = helper.candidates("sq").collect();
        assert_eq!(found, vec!["sqrt", "sq"]);
        assert!(helper.candidates("sa").any(|name| name == "save"));
        assert_eq!(helper.candidates(":").collect::<Vec<_>>(), vec![":q"]);
        assert_eq!(helper.candidates("").count(), 0);
    }
}
