// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::keypad::Keypad;
use crate::keys::{parse_line, Key};
use eyre::{Result, WrapErr};
use keycalc_core::{history_line, number, Calculator, Program};
use std::fs::{read_to_string, write};
use std::path::Path;
use tracing::debug;

/// Sign key label in the operator table.
const NEGATE: &str = "⁺/₋";

/// A calculator plus the number currently being typed.
#[derive(Debug, Clone, Default)]
pub struct Session {
    calc: Calculator,
    keypad: Keypad,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    pub fn press(&mut self, key: &Key) {
        match *key {
            Key::Number(ref word) => {
                // Each number word is a new entry.
                self.keypad.clear();
                let digits = word.strip_prefix('-');
                for digit in digits.unwrap_or(word).chars() {
                    self.keypad.press_digit(digit);
                }
                if digits.is_some() {
                    self.keypad.change_sign();
                }
            }
            Key::Backspace => self.keypad.backspace(),
            Key::ChangeSign => {
                if !self.keypad.change_sign() {
                    self.operate(NEGATE);
                }
            }
            Key::Clear => {
                self.keypad.clear();
                self.calc.reset();
            }
            Key::Operation(ref symbol) => self.operate(symbol),
            Key::Unknown(ref word) => debug!(word = word.as_str(), "ignoring unknown key"),
        }
    }

    /// Commits the typed number, if any, then applies the operator.
    fn operate(&mut self, symbol: &str) {
        if let Some(value) = self.keypad.commit() {
            self.calc.set_operand(value);
        }
        self.calc.perform_operation(symbol);
    }

    pub fn run_line(&mut self, line: &str) {
        for key in parse_line(self.calc.table(), line) {
            self.press(&key);
        }
    }

    /// What the main display shows: the number being typed, or the
    /// current result.
    pub fn display(&self) -> String {
        if self.keypad.is_typing() {
            self.keypad.text().to_owned()
        } else {
            number::format(self.calc.result())
        }
    }

    /// The expression line above the display, with its `...` or `=`
    /// suffix. Empty after a reset.
    pub fn history(&self) -> String {
        history_line(&self.calc)
    }

    pub fn is_partial(&self) -> bool {
        self.calc.is_partial_result()
    }

    pub fn program_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.calc.export_program())
            .wrap_err("Failed to serialize program")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.program_json()?;
        write(path, json).wrap_err_with(|| format!("Failed to write `{}`", path.display()))
    }

    /// Replaces the session with the program stored at `path`.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let text = read_to_string(path)
            .wrap_err_with(|| format!("Failed to read `{}`", path.display()))?;
        let program: Program = serde_json::from_str(&text)
            .wrap_err_with(|| format!("`{}` is not a saved program", path.display()))?;
        self.keypad.clear();
        self.calc.import_program(&program);
        Ok(())
    }
}
