//! Numeric implementations of the builtin functions.
//!
//! Each function first tries an exact path, producing an [`Integer`](rug::Integer) or
//! [`Rational`](rug::Rational) result when the mathematics allows it. When only an approximate
//! result exists, the `precise` flag decides what happens: `false` evaluates the function with
//! [`Float`](rug::Float) arithmetic, while `true` returns `Ok(None)` to keep the call symbolic.
//!
//! Domain failures, such as `sqrt(-1)` or `tan(pi/2)`, are reported as [`MathError`]s regardless
//! of the `precise` flag.

pub mod combinatoric;
pub mod hyperbolic;
pub mod logarithm;
pub mod power;
pub mod trigonometry;

use rug::Float;
use symcas_parser::parser::registry::FuncKind;
use crate::error::MathError;
use crate::number::Number;
use crate::primitive::PRECISION;

/// Exponent below which a [`Float`] is considered a rounding artifact of zero.
///
/// Evaluating `sin(pi)` with a 512-bit approximation of pi leaves a residue on the order of
/// 2^-512. Anything this small can only have come from such cancellation, so it is snapped to
/// zero before further use.
const ZERO_EXP: i32 = -(PRECISION as i32) + 64;

/// Replaces a [`Float`] that is indistinguishable from cancellation residue with exact zero.
pub(crate) fn snap(value: Float) -> Float {
    match value.get_exp() {
        Some(exp) if exp < ZERO_EXP => Float::with_val(value.prec(), 0),
        _ => value,
    }
}

/// Evaluates a builtin function over numeric arguments.
///
/// Returns `Ok(None)` when `precise` is set and the result cannot be represented exactly.
pub fn eval(kind: FuncKind, args: &[Number], precise: bool) -> Result<Option<Number>, MathError> {
    match kind {
        FuncKind::Sqrt => power::sqrt(&args[0], precise),
        FuncKind::Exp => power::exp(&args[0], precise),
        FuncKind::Log => logarithm::log(&args[0], &args[1], precise),
        FuncKind::Ln => logarithm::ln(&args[0], precise),
        FuncKind::Lb => logarithm::lb(&args[0], precise),
        FuncKind::Lg => logarithm::lg(&args[0], precise),
        FuncKind::Sin => trigonometry::sin(&args[0], precise),
        FuncKind::Cos => trigonometry::cos(&args[0], precise),
        FuncKind::Tan => trigonometry::tan(&args[0], precise),
        FuncKind::Cot => trigonometry::cot(&args[0], precise),
        FuncKind::Asin => trigonometry::asin(&args[0], precise),
        FuncKind::Acos => trigonometry::acos(&args[0], precise),
        FuncKind::Atan => trigonometry::atan(&args[0], precise),
        FuncKind::Acot => trigonometry::acot(&args[0], precise),
        FuncKind::Sinh => hyperbolic::sinh(&args[0], precise),
        FuncKind::Cosh => hyperbolic::cosh(&args[0], precise),
        FuncKind::Tanh => hyperbolic::tanh(&args[0], precise),
        FuncKind::Coth => hyperbolic::coth(&args[0], precise),
        FuncKind::Abs => Ok(Some(args[0].clone().abs())),
        FuncKind::Factorial => combinatoric::factorial(&args[0]).map(Some),
        FuncKind::DoubleFactorial => combinatoric::double_factorial(&args[0]).map(Some),
    }
}

/// Builds the [`MathError`] for a function applied outside of its domain.
pub(crate) fn undefined(name: &'static str, args: &[&Number]) -> MathError {
    MathError::UndefinedFunction {
        name,
        args: args.iter().map(|arg| arg.to_string()).collect(),
    }
}
