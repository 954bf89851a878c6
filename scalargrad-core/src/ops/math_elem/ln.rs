// src/ops/math_elem/ln.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

// --- Forward Operation ---

impl Value {
    /// Natural logarithm (base e).
    ///
    /// Fails with `DomainError` for non-positive input. The check runs
    /// before any node is constructed, so the caller never observes a node
    /// for the invalid operation, nor a silent NaN or -inf.
    pub fn ln(&self) -> Result<Value, ScalarGradError> {
        ln_op(self)
    }
}

/// See [`Value::ln`].
pub fn ln_op(a: &Value) -> Result<Value, ScalarGradError> {
    let x = a.data();
    if x <= 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "ln".to_string(),
            value: x,
        });
    }
    Ok(apply_unary_op(a, f64::ln, Op::Ln, |input, _output| {
        Rc::new(LnBackward { input })
    }))
}

// --- Backward Operation ---

/// Backward rule for `out = ln(a)`: the operand receives `grad_output / a`.
/// The input value is needed here, so the operand handle doubles as the
/// stored context.
#[derive(Debug)]
struct LnBackward {
    input: Value,
}

impl BackwardOp for LnBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output / self.input.data()]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
