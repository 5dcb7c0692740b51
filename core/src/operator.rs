// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fixed registry of keys the calculator understands.

use crate::number::{call, operand};
use std::collections::BTreeMap;
use std::f64::consts;
use std::fmt;

/// Binding strength of a rendered expression. Higher binds tighter.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
pub struct Precedence(pub u8);

impl Precedence {
    /// Power and root, the loosest binding level.
    pub const POWER: Precedence = Precedence(1);
    pub const SUM: Precedence = Precedence(2);
    pub const PRODUCT: Precedence = Precedence(3);
    /// Prefix negation and postfix powers.
    pub const UNARY: Precedence = Precedence(4);
    /// Text that never needs parentheses: numbers, constants,
    /// function calls and completed groups.
    pub const ATOM: Precedence = Precedence(u8::MAX);

    pub fn is_atom(self) -> bool {
        self == Precedence::ATOM
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    /// Neither side may be regrouped, e.g. powers.
    None,
}

#[derive(Clone, Copy)]
pub struct UnaryOperation {
    pub symbol: &'static str,
    pub apply: fn(f64) -> f64,
    pub precedence: Precedence,
    pub format: fn(&str) -> String,
}

#[derive(Clone, Copy)]
pub struct BinaryOperation {
    pub symbol: &'static str,
    pub apply: fn(f64, f64) -> f64,
    pub precedence: Precedence,
    pub format: fn(&str, &str) -> String,
    pub associativity: Associativity,
}

impl BinaryOperation {
    /// Whether a left operand rendered at `left` has to be wrapped in
    /// parentheses before this operator is applied to it.
    pub fn needs_group(&self, left: Precedence) -> bool {
        match self.associativity {
            Associativity::Left => left < self.precedence,
            Associativity::None => !left.is_atom(),
        }
    }
}

#[derive(Clone, Copy)]
pub enum Operation {
    Constant(f64),
    Unary(UnaryOperation),
    Binary(BinaryOperation),
    Equals,
}

impl fmt::Debug for UnaryOperation {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("UnaryOperation")
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .finish()
    }
}

impl fmt::Debug for BinaryOperation {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("BinaryOperation")
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .field("associativity", &self.associativity)
            .finish()
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operation::Constant(value) => write!(fmt, "Constant({})", value),
            Operation::Unary(ref op) => write!(fmt, "Unary({})", op.symbol),
            Operation::Binary(ref op) => write!(fmt, "Binary({})", op.symbol),
            Operation::Equals => write!(fmt, "Equals"),
        }
    }
}

/// Maps key symbols to operations. Built once, never modified.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    operations: BTreeMap<&'static str, Operation>,
}

impl OperatorTable {
    /// The calculator's built-in keys.
    pub fn builtin() -> OperatorTable {
        let mut table = OperatorTable {
            operations: BTreeMap::new(),
        };

        table.binary("×", |a, b| a * b, Precedence::PRODUCT, Associativity::Left, |a, b| {
            format!("{} × {}", a, b)
        });
        table.binary("÷", |a, b| a / b, Precedence::PRODUCT, Associativity::Left, |a, b| {
            format!("{} ÷ {}", a, b)
        });
        table.binary("+", |a, b| a + b, Precedence::SUM, Associativity::Left, |a, b| {
            format!("{} + {}", a, b)
        });
        table.binary("−", |a, b| a - b, Precedence::SUM, Associativity::Left, |a, b| {
            format!("{} − {}", a, b)
        });
        table.binary("xʸ", f64::powf, Precedence::POWER, Associativity::None, |a, b| {
            format!("{}^{}", a, b)
        });
        table.binary(
            "ʸ√",
            |a, b| a.powf(1.0 / b),
            Precedence::POWER,
            Associativity::None,
            |a, b| format!("{}√{}", b, a),
        );

        table.unary("x²", |a| a.powi(2), Precedence::UNARY, |a| {
            format!("{}^2", operand(a))
        });
        table.unary("x³", |a| a.powi(3), Precedence::UNARY, |a| {
            format!("{}^3", operand(a))
        });
        table.unary("√", f64::sqrt, Precedence::ATOM, |a| format!("√{}", operand(a)));
        table.unary("∛", f64::cbrt, Precedence::ATOM, |a| format!("∛{}", operand(a)));
        table.unary("cos", f64::cos, Precedence::ATOM, |a| call("cos", a));
        table.unary("sin", f64::sin, Precedence::ATOM, |a| call("sin", a));
        table.unary("tan", f64::tan, Precedence::ATOM, |a| call("tan", a));
        table.unary("⁺/₋", |a| -a, Precedence::UNARY, |a| format!("-{}", operand(a)));

        table.operations.insert("π", Operation::Constant(consts::PI));
        table.operations.insert("e", Operation::Constant(consts::E));
        table.operations.insert("=", Operation::Equals);

        table
    }

    fn unary(
        &mut self,
        symbol: &'static str,
        apply: fn(f64) -> f64,
        precedence: Precedence,
        format: fn(&str) -> String,
    ) {
        let op = UnaryOperation {
            symbol,
            apply,
            precedence,
            format,
        };
        self.operations.insert(symbol, Operation::Unary(op));
    }

    fn binary(
        &mut self,
        symbol: &'static str,
        apply: fn(f64, f64) -> f64,
        precedence: Precedence,
        associativity: Associativity,
        format: fn(&str, &str) -> String,
    ) {
        let op = BinaryOperation {
            symbol,
            apply,
            precedence,
            format,
            associativity,
        };
        self.operations.insert(symbol, Operation::Binary(op));
    }

    pub fn get(&self, symbol: &str) -> Option<&Operation> {
        self.operations.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }

    /// All registered symbols, in a stable order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.keys().copied()
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        OperatorTable::builtin()
    }
}
