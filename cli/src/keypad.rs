// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Digit entry. The number being typed lives here until an operator
//! key commits it to the calculator.

#[derive(Debug, Clone, PartialEq)]
pub struct Keypad {
    text: String,
    typing: bool,
}

impl Default for Keypad {
    fn default() -> Self {
        Keypad::new()
    }
}

impl Keypad {
    pub fn new() -> Keypad {
        Keypad {
            text: "0".to_owned(),
            typing: false,
        }
    }

    /// True while the user is in the middle of typing a number.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends a digit or the decimal point. Only one decimal point is
    /// accepted per number.
    pub fn press_digit(&mut self, digit: char) {
        if self.typing {
            if digit != '.' || !self.text.contains('.') {
                self.text.push(digit);
            }
        } else {
            self.text = if digit == '.' {
                "0.".to_owned()
            } else {
                digit.to_string()
            };
            self.typing = true;
        }
    }

    /// Removes the last typed character. Removing the last digit goes
    /// back to `0`.
    pub fn backspace(&mut self) {
        if !self.typing {
            return;
        }
        self.text.pop();
        if self.text.is_empty() || self.text == "-" {
            self.clear();
        }
    }

    /// Toggles the sign of the number being typed. Returns false when
    /// nothing is being typed, in which case the caller should negate
    /// the result instead.
    pub fn change_sign(&mut self) -> bool {
        if !self.typing {
            return false;
        }
        if let Some(positive) = self.text.strip_prefix('-') {
            self.text = positive.to_owned();
        } else {
            self.text.insert(0, '-');
        }
        true
    }

    /// Ends typing and returns the typed value, if any.
    pub fn commit(&mut self) -> Option<f64> {
        if !self.typing {
            return None;
        }
        self.typing = false;
        self.text.parse().ok()
    }

    pub fn clear(&mut self) {
        self.text = "0".to_owned();
        self.typing = false;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn typed(digits: &str) -> Keypad {
        let mut keypad = Keypad::new();
        for digit in digits.chars() {
            keypad.press_digit(digit);
        }
        keypad
    }

    #[test]
    fn digits_accumulate() {
        let keypad = typed("125");
        assert!(keypad.is_typing());
        assert_eq!(keypad.text(), "125");
    }

    #[test]
    fn single_decimal_point() {
        assert_eq!(typed("1.2.5").text(), "1.25");
        assert_eq!(typed(".5").text(), "0.5");
        assert_eq!(typed("..").text(), "0.");
    }

    #[test]
    fn backspace() {
        let mut keypad = typed("42");
        keypad.backspace();
        assert_eq!(keypad.text(), "4");
        keypad.backspace();
        assert_eq!(keypad.text(), "0");
        assert!(!keypad.is_typing());
        keypad.backspace();
        assert_eq!(keypad.text(), "0");
    }

    #[test]
    fn change_sign_while_typing() {
        let mut keypad = typed("7");
        assert!(keypad.change_sign());
        assert_eq!(keypad.text(), "-7");
        keypad.backspace();
        assert!(!keypad.is_typing());
        assert!(!keypad.change_sign());
    }

    #[test]
    fn commit() {
        let mut keypad = typed("3.");
        assert_eq!(keypad.commit(), Some(3.0));
        assert!(!keypad.is_typing());
        assert_eq!(keypad.commit(), None);
        // Typing after a commit starts a new number.
        keypad.press_digit('9');
        assert_eq!(keypad.text(), "9");
    }
}
