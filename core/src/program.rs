// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The program log: every key that reached the calculator since the
//! last reset, in the order it was entered.

use crate::number;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;
use std::slice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[serde(tag = "type")]
pub enum Token {
    Operand { value: f64 },
    Symbol { symbol: String },
}

impl Token {
    pub fn operand(value: f64) -> Token {
        Token::Operand { value }
    }

    pub fn symbol(symbol: &str) -> Token {
        Token::Symbol {
            symbol: symbol.to_owned(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Operand { value } => write!(fmt, "{}", number::format(value)),
            Token::Symbol { ref symbol } => write!(fmt, "{}", symbol),
        }
    }
}

/// Append-only token log. The only edit besides appending is
/// overwriting the last token, used when a pending operator is
/// swapped for another one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Overwrites the most recent token. Returns the token that was
    /// replaced, or `None` if the log is empty.
    pub fn replace_last(&mut self, token: Token) -> Option<Token> {
        let last = self.tokens.last_mut()?;
        Some(std::mem::replace(last, token))
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for Program {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Program {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Token>> for Program {
    fn from(tokens: Vec<Token>) -> Self {
        Program { tokens }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                write!(fmt, " ")?;
            }
            write!(fmt, "{}", token)?;
            first = false;
        }
        Ok(())
    }
}
