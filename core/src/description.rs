// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rebuilds the infix text of a program by replaying its log.
//!
//! The replay mirrors the evaluation engine step for step, but over
//! text fragments instead of numbers. Nothing is cached between
//! replays, so the same log always renders to the same text.

use crate::number;
use crate::operator::{BinaryOperation, Operation, OperatorTable, Precedence, UnaryOperation};
use crate::program::{Program, Token};

/// Rendered text together with how tightly its outermost operator
/// binds.
#[derive(Debug, Clone, PartialEq)]
struct Fragment {
    text: String,
    precedence: Precedence,
}

impl Fragment {
    fn empty() -> Fragment {
        Fragment {
            text: String::new(),
            precedence: Precedence::ATOM,
        }
    }

    fn number(value: f64) -> Fragment {
        let text = number::format(value);
        let precedence = if text.starts_with('-') {
            Precedence::UNARY
        } else {
            Precedence::ATOM
        };
        Fragment { text, precedence }
    }

    fn constant(symbol: &str) -> Fragment {
        Fragment {
            text: symbol.to_owned(),
            precedence: Precedence::ATOM,
        }
    }

    fn group(&self) -> Fragment {
        Fragment {
            text: number::group(&self.text),
            precedence: Precedence::ATOM,
        }
    }
}

/// The text-side twin of the pending binary operation.
#[derive(Debug, Clone)]
struct PendingDescription {
    /// Left operand as it was before this operator was applied,
    /// without any grouping the operator may require.
    first: Fragment,
    operation: BinaryOperation,
    /// `None` until an operand, constant or unary result follows the
    /// operator.
    second: Option<Fragment>,
}

impl PendingDescription {
    fn left_text(&self) -> String {
        if self.operation.needs_group(self.first.precedence) {
            number::group(&self.first.text)
        } else {
            self.first.text.clone()
        }
    }

    fn right_text(&self) -> String {
        match self.second {
            Some(ref second) => second.text.clone(),
            // Same as `=` reusing the accumulator as the second operand.
            None if self.first.precedence.is_atom() => self.first.text.clone(),
            None => number::group(&self.first.text),
        }
    }

    fn resolve(self) -> Fragment {
        Fragment {
            text: (self.operation.format)(&self.left_text(), &self.right_text()),
            precedence: self.operation.precedence,
        }
    }

    fn partial_text(&self) -> String {
        match self.second {
            Some(_) => (self.operation.format)(&self.left_text(), &self.right_text()),
            None => format!("{} {}", self.left_text(), self.operation.symbol),
        }
    }
}

struct Describer<'a> {
    table: &'a OperatorTable,
    current: Fragment,
    pending: Option<PendingDescription>,
}

impl<'a> Describer<'a> {
    fn new(table: &'a OperatorTable) -> Describer<'a> {
        Describer {
            table,
            current: Fragment::empty(),
            pending: None,
        }
    }

    fn feed(&mut self, token: &Token) {
        match *token {
            Token::Operand { value } => self.set_operand(Fragment::number(value)),
            Token::Symbol { ref symbol } => {
                let table = self.table;
                match table.get(symbol) {
                    Some(&Operation::Constant(_)) => self.set_operand(Fragment::constant(symbol)),
                    Some(&Operation::Unary(ref op)) => self.apply_unary(op),
                    Some(&Operation::Binary(op)) => {
                        if self.awaiting_operand() {
                            self.replace_pending_operator(op)
                        } else {
                            self.open_pending(op)
                        }
                    }
                    Some(&Operation::Equals) => self.equals(),
                    None => (),
                }
            }
        }
    }

    fn awaiting_operand(&self) -> bool {
        match self.pending {
            Some(ref pending) => pending.second.is_none(),
            None => false,
        }
    }

    /// Operands go to the right-hand side of an open operator, or start
    /// a new expression.
    fn set_operand(&mut self, fragment: Fragment) {
        match self.pending {
            Some(ref mut pending) => pending.second = Some(fragment),
            None => self.current = fragment,
        }
    }

    /// Unary results fold into the pending right-hand side instead of
    /// starting an independent expression.
    fn apply_unary(&mut self, op: &UnaryOperation) {
        let target = match self.pending {
            Some(ref pending) => pending.second.as_ref().unwrap_or(&pending.first),
            None => &self.current,
        };
        let result = Fragment {
            text: (op.format)(&target.text),
            precedence: op.precedence,
        };
        self.set_operand(result);
    }

    fn open_pending(&mut self, operation: BinaryOperation) {
        if let Some(pending) = self.pending.take() {
            self.current = pending.resolve();
        }
        self.pending = Some(PendingDescription {
            first: self.current.clone(),
            operation,
            second: None,
        });
    }

    /// Operator pressed again before any operand: keep the first
    /// operand, swap the operator.
    fn replace_pending_operator(&mut self, operation: BinaryOperation) {
        if let Some(pending) = self.pending.take() {
            self.current = pending.first;
        }
        self.open_pending(operation);
    }

    fn equals(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.current = pending.resolve();
        }
        self.current = self.current.group();
    }

    fn finish(self) -> String {
        match self.pending {
            Some(ref pending) => pending.partial_text(),
            None => self.current.text,
        }
    }
}

/// Renders the infix text of `program`. Symbols missing from `table`
/// are skipped.
pub fn describe(table: &OperatorTable, program: &Program) -> String {
    let mut describer = Describer::new(table);
    for token in program {
        describer.feed(token);
    }
    describer.finish()
}
