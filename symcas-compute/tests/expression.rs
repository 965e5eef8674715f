//! End-to-end tests: source string in, rendered result out.

use pretty_assertions::assert_eq;
use symcas_compute::{Error, Expression};

/// Parses, simplifies, and renders the given source.
fn eval(source: &str) -> String {
    Expression::new(source).unwrap().to_string()
}

#[test]
fn arithmetic() {
    assert_eq!(eval("2+2*2"), "6");
    assert_eq!(eval("2^10"), "1024");
    assert_eq!(eval("1/2+1/3"), "5/6");
}

#[test]
fn decimals_are_exact() {
    assert_eq!(eval("0.001-0.002"), "-1/1000");
    assert_eq!(eval("0.1+0.2"), "3/10");
}

#[test]
fn binomial_expansion() {
    assert_eq!(eval("(a+b)^2"), "a^2+b^2+2*a*b");
    assert_eq!(eval("(a+b)^3"), "a^3+b^3+3*a^2*b+3*b^2*a");
    assert_eq!(eval("(a+b)^4"), "a^4+b^4+4*a^3*b+4*b^3*a+6*a^2*b^2");
}

#[test]
fn fractions_are_preserved() {
    assert_eq!(eval("(a+3)/(b+2)"), "(a+3)/(b+2)");
    assert_eq!(eval("a/b"), "a/b");
    assert_eq!(eval("a^-3"), "a^(-3)");
}

#[test]
fn like_factors_cancel_across_fractions() {
    assert_eq!(eval("(a+b)*(a+b)/(a+b)"), "a+b");
    assert_eq!(eval("(a+b)^2/(a+b)"), "a+b");
    assert_eq!(eval("1/((a+b)*(a+b))"), "(a+b)^(-2)");
}

#[test]
fn power_towers_associate_right() {
    assert_eq!(eval("2^2^2^2"), "65536");
    assert_eq!(eval("2^3^2"), "512");
}

#[test]
fn rendered_output_is_stable() {
    for source in ["(a+b)^3", "x^2-3*x+2", "(a+3)/(b+2)", "a^-3", "sqrt(x)"] {
        let once = eval(source);
        assert_eq!(eval(&once), once, "`{}` is not stable", source);
    }
}

#[test]
fn exact_function_values() {
    assert_eq!(eval("sqrt144"), "12");
    assert_eq!(eval("sqrt(144)"), "12");
    assert_eq!(eval("log(2, 256)"), "8");
    assert_eq!(eval("5!"), "120");
    assert_eq!(eval("5!!"), "15");
    assert_eq!(eval("ln(1)"), "0");
}

#[test]
fn equations_normalize_to_zero() {
    assert_eq!(eval("x = 1"), "x-1 = 0");
    assert_eq!(eval("x^2+2 = x"), "x^2-x+2 = 0");
    assert_eq!(eval("x < 5"), "x-5 < 0");
}

#[test]
fn numeric_comparisons_evaluate_to_truth_values() {
    assert_eq!(eval("1 = 1"), "1");
    assert_eq!(eval("2 < 1"), "0");
}

#[test]
fn precision_rendering() {
    let expr = Expression::new("10^10000").unwrap();
    assert_eq!(expr.to_string_precision(8), "1*10^10000");

    let expr = Expression::new("9^10000").unwrap();
    assert_eq!(expr.to_string_precision(8), "2.6613034*10^9542");
}

#[test]
fn transcendental_values() {
    let expr = Expression::new("sin(e)").unwrap();
    assert_eq!(expr.to_string_precision(16), "0.4107812905029087");

    let expr = Expression::new("sin(sin(e))").unwrap();
    assert_eq!(
        expr.to_string_precision(30),
        "0.39932574404189139297067052142",
    );
}

#[test]
fn precise_expressions_stay_symbolic() {
    let expr = Expression::new_precise("sin(2)").unwrap();
    assert_eq!(expr.to_string(), "sin(2)");

    let expr = Expression::new_precise("2*pi").unwrap();
    assert_eq!(expr.to_string(), "2*pi");
}

#[test]
fn parse_errors() {
    for source in ["", "1+", "(1+2", "1+2)", "sqrt(1, 2)", "lncossine"] {
        assert!(
            matches!(Expression::new(source), Err(Error::Invalid(_))),
            "`{}` should fail to parse",
            source,
        );
    }
}

#[test]
fn undefined_operations() {
    for source in [
        "1/0",
        "0^0",
        "0^(-1)",
        "sqrt(-1)",
        "ln(0)",
        "lb(-1)",
        "lg(-1)",
        "(-1)^(2/3)",
        "tan(pi/2)",
        "tan(3/2*pi)",
        "cot(0)",
        "cot(2*pi)",
        "coth(0)",
        "asin(2)",
        "acos(2)",
        "e!",
        "1 < x < 2",
    ] {
        assert!(
            matches!(Expression::new(source), Err(Error::Undefined(_))),
            "`{}` should be undefined",
            source,
        );
    }
}
