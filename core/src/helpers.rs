// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::Calculator;

/// Suffix shown after a description while an operator waits for its
/// second operand.
pub const PARTIAL_SUFFIX: &str = " ...";
/// Suffix shown after a completed description.
pub const COMPLETE_SUFFIX: &str = " =";

/// Feeds whitespace-separated keys into the calculator. Words that
/// parse as numbers become operands, everything else is treated as an
/// operator symbol.
pub fn feed(calc: &mut Calculator, line: &str) {
    for word in line.split_whitespace() {
        match parse_operand(word) {
            Some(value) => calc.set_operand(value),
            None => calc.perform_operation(word),
        }
    }
}

/// Only plain decimal numbers count as operands, so that symbols like
/// `e` or `inf` aren't mistaken for numbers.
fn parse_operand(word: &str) -> Option<f64> {
    let digits = word.strip_prefix('-').unwrap_or(word);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    word.parse().ok()
}

/// The description with the `...` or `=` suffix a display shows, or an
/// empty string when nothing has been entered.
pub fn history_line(calc: &Calculator) -> String {
    let description = calc.description();
    if description.is_empty() {
        return description;
    }
    let suffix = if calc.is_partial_result() {
        PARTIAL_SUFFIX
    } else {
        COMPLETE_SUFFIX
    };
    description + suffix
}

/// Runs a line of keys on a fresh calculator and returns the history
/// line followed by the result.
pub fn one_line(line: &str) -> String {
    let mut calc = Calculator::new();
    feed(&mut calc, line);
    let history = history_line(&calc);
    let result = crate::number::format(calc.result());
    if history.is_empty() {
        result
    } else {
        format!("{} {}", history, result)
    }
}

/// Returns `env!("CARGO_PKG_VERSION")`, a string in `x.y.z` format.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
