// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Turns typed words into key presses.

use keycalc_core::OperatorTable;

#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A whole number, typed digit by digit. A leading `-` presses the
    /// sign key after the digits.
    Number(String),
    Backspace,
    ChangeSign,
    Clear,
    /// An operator symbol from the table.
    Operation(String),
    Unknown(String),
}

/// ASCII spellings for keys whose labels are hard to type.
pub const ALIASES: &[(&str, &str)] = &[
    ("*", "×"),
    ("x", "×"),
    ("/", "÷"),
    ("-", "−"),
    ("^", "xʸ"),
    ("pow", "xʸ"),
    ("root", "ʸ√"),
    ("sqrt", "√"),
    ("cbrt", "∛"),
    ("sq", "x²"),
    ("cube", "x³"),
    ("pi", "π"),
];

const BACKSPACE: &[&str] = &["back", "⌫"];
const CHANGE_SIGN: &[&str] = &["neg", "±"];
const CLEAR: &[&str] = &["C", "clear"];

pub fn alias(word: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, symbol)| *symbol)
}

fn is_number(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_one_of(names: &[&str], word: &str) -> bool {
    names.iter().any(|name| *name == word)
}

pub fn parse_key(table: &OperatorTable, word: &str) -> Key {
    if is_number(word) {
        Key::Number(word.to_owned())
    } else if is_one_of(BACKSPACE, word) {
        Key::Backspace
    } else if is_one_of(CHANGE_SIGN, word) || word == "⁺/₋" {
        Key::ChangeSign
    } else if is_one_of(CLEAR, word) {
        Key::Clear
    } else if table.contains(word) {
        Key::Operation(word.to_owned())
    } else if let Some(symbol) = alias(word) {
        Key::Operation(symbol.to_owned())
    } else {
        Key::Unknown(word.to_owned())
    }
}

pub fn parse_line(table: &OperatorTable, line: &str) -> Vec<Key> {
    line.split_whitespace()
        .map(|word| parse_key(table, word))
        .collect()
}

/// Every word [`parse_key`] understands besides numbers, for
/// completion and help.
pub fn key_names(table: &OperatorTable) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = table.symbols().collect();
    names.extend(ALIASES.iter().map(|(name, _)| *name));
    names.extend(BACKSPACE);
    names.extend(CHANGE_SIGN);
    names.extend(CLEAR);
    names
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_words() {
        let table = OperatorTable::builtin();
        assert_eq!(
            parse_line(&table, "12.5 * -3 = sqrt ∆"),
            vec![
                Key::Number("12.5".to_owned()),
                Key::Operation("×".to_owned()),
                Key::Number("-3".to_owned()),
                Key::Operation("=".to_owned()),
                Key::Operation("√".to_owned()),
                Key::Unknown("∆".to_owned()),
            ]
        );
    }

    #[test]
    fn special_keys() {
        let table = OperatorTable::builtin();
        assert_eq!(parse_key(&table, "back"), Key::Backspace);
        assert_eq!(parse_key(&table, "±"), Key::ChangeSign);
        assert_eq!(parse_key(&table, "⁺/₋"), Key::ChangeSign);
        assert_eq!(parse_key(&table, "C"), Key::Clear);
        assert_eq!(parse_key(&table, "-"), Key::Operation("−".to_owned()));
        assert_eq!(parse_key(&table, "e"), Key::Operation("e".to_owned()));
    }

    #[test]
    fn aliases_point_into_table() {
        let table = OperatorTable::builtin();
        for (name, symbol) in ALIASES {
            assert!(table.contains(symbol), "{} -> {}", name, symbol);
        }
    }
}
