//! Fuzzing tests to ensure the parser and evaluator handle malformed input gracefully

use semio_expression::{EmptyContext, Engine, Error};
use std::mem::discriminant;

/// Test that malformed expressions fail with the expected error kind
#[test]
fn test_malformed_expressions_fail_cleanly() {
    let engine = Engine::default();
    let syntax = discriminant(&Error::SyntaxError(String::new()));
    let evaluation = discriminant(&Error::EvaluationError(String::new()));
    let incompatible = discriminant(&Error::IncompatibleUnits {
        from: String::new(),
        to: String::new(),
    });

    let malformed = [
        ("", syntax),                      // Empty
        ("(", syntax),                     // Unclosed paren
        (")", syntax),                     // Unmatched closing paren
        ("'", syntax),                     // Unterminated literal
        ("''", syntax),                    // Empty literal
        ("' m'", syntax),                  // Missing number
        ("sum (", syntax),                 // Unclosed call
        ("sum ( ( '1' ) )", syntax),       // Bare parens
        ("sum ( '1' ) extra", syntax),     // Trailing input
        ("sum ( 'x' )", syntax),           // Non-numeric literal
        ("power ( '2' '1e9' )", syntax),   // Exponent notation
        ("'1 m'\u{0}", syntax),           // Control character
        ("divide ( '1 m' '0' )", evaluation),
        ("sqrt ( '-1 m' )", evaluation),
        ("power ( '2' '99999999999' )", evaluation),
        ("sum ( '1 m' '1 √' )", incompatible),
    ];

    for (expr, expected) in malformed {
        for target in ["", "m", "(", "√("] {
            let err = engine
                .evaluate_expr(expr, &EmptyContext, target)
                .expect_err(expr);
            assert_eq!(
                discriminant(&err),
                expected,
                "Expression '{}' with target '{}' failed with {:?}",
                expr,
                target,
                err
            );
        }
    }
}

/// Test that very wide expressions are handled
#[test]
fn test_very_wide_expressions() {
    let engine = Engine::default();

    let mut expr = "sum (".to_string();
    for i in 0..2000 {
        expr.push_str(if i % 2 == 0 { " '1 m'" } else { " '100 cm'" });
    }
    expr.push_str(" )");

    let result = engine.evaluate_expr(&expr, &EmptyContext, "km").unwrap();
    assert!((result.magnitude - 2.0).abs() < 1e-9);
}

/// Test that nesting near the limit evaluates and beyond it fails cleanly
#[test]
fn test_deep_nesting_limits() {
    let engine = Engine::default();
    let max_depth = engine.options().max_depth;

    let nest = |depth: usize| {
        format!(
            "{}'1 m'{}",
            "negate ( ".repeat(depth),
            " )".repeat(depth)
        )
    };

    let result = engine
        .evaluate_expr(&nest(max_depth), &EmptyContext, "")
        .unwrap();
    assert_eq!(result.to_string(), "'1 m'");

    assert_eq!(
        engine.evaluate_expr(&nest(max_depth + 1), &EmptyContext, ""),
        Err(Error::TooDeep(max_depth))
    );
}
