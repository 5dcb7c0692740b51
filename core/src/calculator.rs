// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::description::describe;
use crate::operator::{BinaryOperation, Operation, OperatorTable};
use crate::program::{Program, Token};
use tracing::{debug, trace};

/// A binary operator waiting for its second operand.
#[derive(Debug, Clone, Copy)]
struct PendingBinaryOperation {
    operation: BinaryOperation,
    first_operand: f64,
}

impl PendingBinaryOperation {
    fn resolve(self, second_operand: f64) -> f64 {
        (self.operation.apply)(self.first_operand, second_operand)
    }
}

/// The evaluation engine. Keys are fed in one at a time through
/// [`Calculator::set_operand`] and [`Calculator::perform_operation`],
/// and every key is recorded in the program log so the expression text
/// can be rebuilt with [`Calculator::description`].
#[derive(Debug, Clone)]
pub struct Calculator {
    table: OperatorTable,
    accumulator: f64,
    pending: Option<PendingBinaryOperation>,
    /// The last input produced a value no binary operator has consumed.
    fresh_operand: bool,
    program: Program,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::with_table(OperatorTable::builtin())
    }

    pub fn with_table(table: OperatorTable) -> Calculator {
        Calculator {
            table,
            accumulator: 0.0,
            pending: None,
            fresh_operand: false,
            program: Program::new(),
        }
    }

    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    pub fn set_operand(&mut self, value: f64) {
        self.accumulator = value;
        self.fresh_operand = true;
        self.program.push(Token::operand(value));
    }

    /// Applies the key `symbol`. Keys that aren't in the operator table
    /// are ignored, like a calculator ignoring a bad keypress.
    pub fn perform_operation(&mut self, symbol: &str) {
        let operation = match self.table.get(symbol) {
            Some(operation) => *operation,
            None => {
                debug!(symbol, "ignoring unknown operator");
                return;
            }
        };

        if self.program.is_empty() && !matches!(operation, Operation::Constant(_)) {
            // Make the implicit starting value part of the log.
            self.set_operand(self.accumulator);
        }

        match operation {
            Operation::Constant(value) => {
                self.accumulator = value;
                self.fresh_operand = true;
            }
            Operation::Unary(op) => {
                self.accumulator = (op.apply)(self.accumulator);
                self.fresh_operand = true;
            }
            Operation::Binary(op) => {
                if !self.fresh_operand && self.pending.is_some() {
                    self.replace_pending_operator(op);
                    return;
                }
                self.resolve_pending();
                self.open_pending(op);
            }
            Operation::Equals => self.resolve_pending(),
        }
        self.program.push(Token::symbol(symbol));
    }

    fn resolve_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.accumulator = pending.resolve(self.accumulator);
        }
    }

    fn open_pending(&mut self, operation: BinaryOperation) {
        self.pending = Some(PendingBinaryOperation {
            operation,
            first_operand: self.accumulator,
        });
        self.fresh_operand = false;
    }

    /// A second operator before any operand replaces the first one, both
    /// in the pending operation and in the log.
    fn replace_pending_operator(&mut self, operation: BinaryOperation) {
        if let Some(ref mut pending) = self.pending {
            trace!(
                from = pending.operation.symbol,
                to = operation.symbol,
                "replacing pending operator"
            );
            pending.operation = operation;
        }
        let replaced = self.program.replace_last(Token::symbol(operation.symbol));
        debug_assert!(matches!(replaced, Some(Token::Symbol { .. })));
    }

    /// The value on the display.
    pub fn result(&self) -> f64 {
        self.accumulator
    }

    /// True while a binary operator is waiting for its second operand.
    pub fn is_partial_result(&self) -> bool {
        self.pending.is_some()
    }

    /// Infix text of everything entered since the last reset. The
    /// caller decides whether to suffix it with `=` or `...`.
    pub fn description(&self) -> String {
        describe(&self.table, &self.program)
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.fresh_operand = false;
        self.program.clear();
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn export_program(&self) -> Program {
        self.program.clone()
    }

    /// Resets, then replays `program` key by key.
    pub fn import_program(&mut self, program: &Program) {
        debug!(tokens = program.len(), "importing program");
        self.reset();
        for token in program {
            match *token {
                Token::Operand { value } => self.set_operand(value),
                Token::Symbol { ref symbol } => self.perform_operation(symbol),
            }
        }
    }
}
