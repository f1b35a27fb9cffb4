//! Property-based tests using QuickCheck

use quickcheck::{QuickCheck, TestResult};
use semio_expression::{EmptyContext, Expression, Quantity};
use semio_units::format_magnitude;

fn calc(text: &str, target: &str) -> Quantity {
    Expression::deserialize(text)
        .and_then(|e| e.calculate(&EmptyContext, target))
        .unwrap_or_else(|e| panic!("'{text}' failed: {e}"))
}

fn lit(x: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("'{}'", format_magnitude(x))
    } else {
        format!("'{} {}'", format_magnitude(x), unit)
    }
}

fn usable(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && v.abs() < 1e12)
}

/// Property: serialize then deserialize evaluates to the same quantity
#[test]
fn prop_round_trip_preserves_value() {
    fn prop(a: f64, b: f64, c: f64) -> TestResult {
        if !usable(&[a, b, c]) {
            return TestResult::discard();
        }
        let text = format!(
            "sum ( {} multiply ( {} {} ) )",
            lit(a, "m"),
            lit(b, "ft"),
            lit(c, "")
        );
        let expr = Expression::deserialize(&text).unwrap();
        let again = Expression::deserialize(&expr.serialize()).unwrap();

        for target in ["", "m", "ft", "cm"] {
            let lhs = expr.calculate(&EmptyContext, target).unwrap();
            let rhs = again.calculate(&EmptyContext, target).unwrap();
            if lhs != rhs {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(f64, f64, f64) -> TestResult);
}

/// Property: literal magnitudes survive formatting exactly
#[test]
fn prop_literal_magnitude_is_exact() {
    fn prop(x: f64) -> TestResult {
        if !x.is_finite() {
            return TestResult::discard();
        }
        let q = calc(&lit(x, "kg"), "");
        TestResult::from_bool(q.magnitude == x || (x == 0.0 && q.magnitude == 0.0))
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(f64) -> TestResult);
}

/// Property: sum is commutative for operands in the same unit
#[test]
fn prop_sum_commutative() {
    fn prop(a: f64, b: f64) -> TestResult {
        if !usable(&[a, b]) {
            return TestResult::discard();
        }
        let ab = calc(&format!("sum ( {} {} )", lit(a, "m"), lit(b, "m")), "");
        let ba = calc(&format!("sum ( {} {} )", lit(b, "m"), lit(a, "m")), "");
        TestResult::from_bool(ab == ba)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(f64, f64) -> TestResult);
}

/// Property: sum over mixed units agrees once both are expressed in one unit
#[test]
fn prop_sum_commutative_across_units() {
    fn prop(a: f64, b: f64) -> TestResult {
        if !usable(&[a, b]) {
            return TestResult::discard();
        }
        let ab = calc(&format!("sum ( {} {} )", lit(a, "m"), lit(b, "ft")), "m");
        let ba = calc(&format!("sum ( {} {} )", lit(b, "ft"), lit(a, "m")), "m");
        let tolerance = 1e-9 * ab.magnitude.abs().max(a.abs()).max(b.abs()).max(1.0);
        TestResult::from_bool(
            (ab.magnitude - ba.magnitude).abs() <= tolerance && ab.unit == ba.unit,
        )
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(f64, f64) -> TestResult);
}

/// Property: multiply magnitudes commute even though unit order differs
#[test]
fn prop_multiply_magnitude_commutative() {
    fn prop(a: f64, b: f64) -> TestResult {
        if !usable(&[a, b]) {
            return TestResult::discard();
        }
        let ab = calc(&format!("multiply ( {} {} )", lit(a, "m"), lit(b, "kg")), "");
        let ba = calc(&format!("multiply ( {} {} )", lit(b, "kg"), lit(a, "m")), "");
        TestResult::from_bool(ab.magnitude == ba.magnitude)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(f64, f64) -> TestResult);
}

/// Property: abs(negate(x)) == abs(x) and negate(negate(x)) == x
#[test]
fn prop_abs_negate_idempotence() {
    fn prop(x: f64) -> TestResult {
        if !x.is_finite() {
            return TestResult::discard();
        }
        let literal = lit(x, "ft");
        let abs_neg = calc(&format!("abs ( negate ( {literal} ) )"), "");
        let abs = calc(&format!("abs ( {literal} )"), "");
        let neg_neg = calc(&format!("negate ( negate ( {literal} ) )"), "");
        let plain = calc(&literal, "");
        TestResult::from_bool(abs_neg == abs && neg_neg == plain)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(f64) -> TestResult);
}
