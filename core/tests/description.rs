// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use keycalc_core::description::describe;
use keycalc_core::{OperatorTable, Program, Token};
use similar_asserts::assert_eq;

fn program(keys: &str) -> Program {
    keys.split_whitespace()
        .map(|key| match key.parse::<f64>() {
            Ok(value) if key != "inf" && key != "NaN" => Token::operand(value),
            _ => Token::symbol(key),
        })
        .collect()
}

fn check(keys: &str, expected: &str) {
    let table = OperatorTable::builtin();
    let program = program(keys);
    let first = describe(&table, &program);
    assert_eq!(first, expected);
    // Replaying the same log must give the same text.
    assert_eq!(describe(&table, &program), first);
}

#[test]
fn lower_precedence_fed_into_higher() {
    check("2 + 3 × 4 =", "((2 + 3) × 4)");
    check("1 − 2 ÷ 4", "(1 − 2) ÷ 4");
}

#[test]
fn higher_precedence_fed_into_lower() {
    check("2 × 3 + 4 =", "(2 × 3 + 4)");
    check("2 ÷ 3 − 4 × 5 =", "((2 ÷ 3 − 4) × 5)");
}

#[test]
fn strict_comparison_for_equal_precedence() {
    check("2 − 3 + 4", "2 − 3 + 4");
    check("1 × 2 ÷ 3 × 4 =", "(1 × 2 ÷ 3 × 4)");
}

#[test]
fn non_associative_operators_group_left_operand() {
    check("2 xʸ 3 xʸ 4", "(2^3)^4");
    check("2 + 1 ʸ√ 3 =", "(3√(2 + 1))");
    check("π xʸ 2", "π^2");
    check("2 x² xʸ 3", "(2^2)^3");
}

#[test]
fn power_results_group_under_other_operators() {
    check("2 xʸ 3 + 1 =", "((2^3) + 1)");
}

#[test]
fn unary_text() {
    check("4 √", "√4");
    check("4 √ √", "√(√4)");
    check("1 + 3 = x³", "(1 + 3)^3");
    check("2 ⁺/₋ ⁺/₋", "-(-2)");
    check("π sin", "sin(π)");
    check("2 × π = cos", "cos(2 × π)");
}

#[test]
fn unary_with_pending_operator() {
    check("10 − 4 √", "10 − √4");
    check("10 − 4 √ =", "(10 − √4)");
    check("10 − √", "10 − √10");
    check("10 − 4 + √", "10 − 4 + √(10 − 4)");
}

#[test]
fn operator_without_second_operand() {
    check("3 +", "3 +");
    check("3 + =", "(3 + 3)");
    check("1 + 2 × =", "((1 + 2) × (1 + 2))");
    check("2 xʸ", "2 xʸ");
}

#[test]
fn replacement_regroups_first_operand() {
    // `×` would need parentheses around `1 + 2`, `−` doesn't.
    check("1 + 2 × − 3", "1 + 2 − 3");
}

#[test]
fn numbers() {
    check("0.5 + 0.25 =", "(0.5 + 0.25)");
    check("-3 × 2", "-3 × 2");
    check("-3 xʸ 2", "(-3)^2");
}
