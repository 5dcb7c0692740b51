// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! keycalc is a one-operation-at-a-time calculator, the kind driven by
//! button presses. `keycalc_core` is the engine that the front ends
//! use.
//!
//! Keys are fed in one by one: operands through
//! [`Calculator::set_operand`] and operator symbols through
//! [`Calculator::perform_operation`]. At any point the calculator can
//! report the current result, and a precedence-correct infix rendering
//! of everything entered so far. The rendering is never parsed from
//! text; it is rebuilt from the program log, the ordered record of
//! every key since the last reset.
//!
//! ## Example
//!
//! ```rust
//! use keycalc_core::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.set_operand(2.0);
//! calc.perform_operation("+");
//! calc.set_operand(3.0);
//! assert!(calc.is_partial_result());
//! assert_eq!(calc.description(), "2 + 3");
//!
//! calc.perform_operation("×");
//! calc.set_operand(4.0);
//! calc.perform_operation("=");
//! assert_eq!(calc.result(), 20.0);
//! assert_eq!(calc.description(), "((2 + 3) × 4)");
//! ```
//!
//! ## Save and restore
//!
//! The program log can be exported, serialized with serde, and
//! replayed into another calculator.
//!
//! ```rust
//! # use keycalc_core::Calculator;
//! let mut calc = Calculator::new();
//! keycalc_core::feed(&mut calc, "9 √ + 1 =");
//! let program = calc.export_program();
//!
//! let mut restored = Calculator::new();
//! restored.import_program(&program);
//! assert_eq!(restored.result(), 4.0);
//! assert_eq!(restored.description(), calc.description());
//! ```
//!
//! Unknown symbols are ignored, and numeric domain errors show up as
//! `NaN` or infinity in the result. There is no error path.

pub mod calculator;
pub mod description;
pub mod number;
pub mod operator;
pub mod program;

mod helpers;

pub use crate::calculator::Calculator;
pub use crate::operator::{Operation, OperatorTable, Precedence};
pub use crate::program::{Program, Token};
pub use helpers::{
    feed, history_line, one_line, version, COMPLETE_SUFFIX, PARTIAL_SUFFIX,
};
