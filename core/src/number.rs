// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text helpers shared by the operator renderings and the description
//! engine.

/// Integers below this magnitude print without a fractional part.
const INTEGER_LIMIT: f64 = 1e15;

/// Renders a value the way it is shown on the display and in the
/// expression description.
pub fn format(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGER_LIMIT {
        // Avoids printing `-0`.
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// True if `text` is one parenthesized group spanning the whole string.
pub fn is_group(text: &str) -> bool {
    if !text.starts_with('(') || !text.ends_with(')') {
        return false;
    }
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && i != text.len() - 1 {
                    return false;
                }
            }
            _ => (),
        }
    }
    depth == 0
}

/// True if `text` can be used as an operand without parentheses.
pub fn is_atomic(text: &str) -> bool {
    is_group(text) || (!text.is_empty() && text.chars().all(|c| c.is_alphanumeric() || c == '.'))
}

/// Wraps `text` in parentheses unless it already is a single group.
pub fn group(text: &str) -> String {
    if is_group(text) {
        text.to_owned()
    } else {
        format!("({})", text)
    }
}

/// Wraps `text` only when it is not atomic.
pub fn operand(text: &str) -> String {
    if is_atomic(text) {
        text.to_owned()
    } else {
        format!("({})", text)
    }
}

/// Function-call rendering, `name(text)`, without doubled parentheses.
pub fn call(name: &str, text: &str) -> String {
    format!("{}{}", name, group(text))
}
