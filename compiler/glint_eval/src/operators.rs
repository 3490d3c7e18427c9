//! Binary operator implementations.
//!
//! Operands are plain [`Value`]s; only numbers take part in arithmetic, which
//! follows IEEE 754 double precision.

use glint_ir::BinaryOp;

use crate::errors::{division_by_zero, not_numeric, EvalResult, Operand};
use crate::Value;

/// Apply `op` to two evaluated operands.
///
/// The returned error carries no span; the caller knows which node failed.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let Some(a) = left.as_number() else {
        return Err(not_numeric(op, Operand::Left, left));
    };
    let Some(b) = right.as_number() else {
        return Err(not_numeric(op, Operand::Right, right));
    };

    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            a / b
        }
    };
    Ok(Value::Number(result))
}
