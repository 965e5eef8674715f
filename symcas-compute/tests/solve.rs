//! End-to-end tests for equation solving.

use pretty_assertions::assert_eq;
use symcas_compute::Expression;

fn solved(source: &str) -> String {
    Expression::new(source).unwrap().solve()
}

#[test]
fn linear_equations() {
    assert_eq!(solved("x = 1"), "x in {1}");
    assert_eq!(solved("2*x+4 = 0"), "x in {-2}");
    assert_eq!(solved("3*x = 1"), "x in {1/3}");
    assert_eq!(solved("x/2 = 3"), "x in {6}");
}

#[test]
fn quadratic_equations() {
    assert_eq!(solved("x^2 = 4"), "x in {-2,2}");
    assert_eq!(solved("x^2-3*x+2 = 0"), "x in {1,2}");
    assert_eq!(solved("x^2-2*x+1 = 0"), "x in {1}");
}

#[test]
fn equations_solve_after_rearranging() {
    // both sides carry the variable before simplification
    assert_eq!(solved("x^2+x = x+9"), "x in {-3,3}");
}

#[test]
fn irrational_roots_are_approximated() {
    let expr = Expression::new("x^2 = 2").unwrap();
    assert_eq!(expr.solve_precision(5), "x in {-1.4142,1.4142}");
}

#[test]
fn no_real_roots_echoes_the_equation() {
    assert_eq!(solved("x^2+1 = 0"), "x^2+1 = 0");
}

#[test]
fn unsupported_equations_echo() {
    assert_eq!(solved("x^3 = 1"), "x^3-1 = 0");
    assert_eq!(solved("x+y = 1"), "x+y-1 = 0");
    assert_eq!(solved("sin(x) = 0"), "sin(x) = 0");
    assert_eq!(solved("x < 1"), "x-1 < 0");
    assert_eq!(solved("a+b"), "a+b");
}
