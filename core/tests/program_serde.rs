// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use assert_json_diff::assert_json_eq;
use keycalc_core::{feed, Calculator, Program, Token};
use serde_json::{json, to_value};

#[test]
fn check_simple() {
    let mut calc = Calculator::new();
    feed(&mut calc, "2.5 + π =");
    assert_json_eq!(
        to_value(calc.export_program()).unwrap(),
        json!([
            { "type": "operand", "value": 2.5 },
            { "type": "symbol", "symbol": "+" },
            { "type": "symbol", "symbol": "π" },
            { "type": "symbol", "symbol": "=" },
        ])
    )
}

#[test]
fn check_empty() {
    assert_json_eq!(to_value(Program::new()).unwrap(), json!([]));
}

#[test]
fn check_restore_from_json() {
    let text = r#"[
        {"type": "operand", "value": 6},
        {"type": "symbol", "symbol": "×"},
        {"type": "operand", "value": 7},
        {"type": "symbol", "symbol": "="}
    ]"#;
    let program: Program = serde_json::from_str(text).unwrap();
    assert_eq!(program.len(), 4);
    assert_eq!(program.tokens()[0], Token::operand(6.0));

    let mut calc = Calculator::new();
    calc.import_program(&program);
    assert_eq!(calc.result(), 42.0);
    assert_eq!(calc.description(), "(6 × 7)");
}

#[test]
fn check_import_normalizes_program() {
    // Two operators in a row collapse into one, and unknown symbols are
    // dropped, exactly as if the keys had been pressed.
    let program: Program = vec![
        Token::operand(5.0),
        Token::symbol("+"),
        Token::symbol("∆"),
        Token::symbol("−"),
        Token::operand(3.0),
        Token::symbol("="),
    ]
    .into_iter()
    .collect();

    let mut calc = Calculator::new();
    calc.import_program(&program);
    assert_eq!(calc.result(), 2.0);
    assert_eq!(calc.export_program().to_string(), "5 − 3 =");
}

#[test]
fn check_json_round_trip_preserves_state() {
    let mut calc = Calculator::new();
    feed(&mut calc, "3 x² + 4 x² = √ ÷");
    let text = serde_json::to_string(&calc.export_program()).unwrap();

    let mut restored = Calculator::new();
    restored.import_program(&serde_json::from_str(&text).unwrap());
    assert_eq!(restored.result(), 5.0);
    assert!(restored.is_partial_result());
    assert_eq!(restored.description(), calc.description());
    assert_eq!(restored.description(), "√(3^2 + 4^2) ÷");
}

#[test]
fn check_rejects_unknown_entries() {
    let text = r#"[{"type": "memory", "slot": 1}]"#;
    assert!(serde_json::from_str::<Program>(text).is_err());
}
