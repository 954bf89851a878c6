// src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

// --- Forward Operation ---

impl Value {
    /// Raises this node to a construction-time real constant.
    ///
    /// See [`pow_op`] for the exponent restrictions.
    pub fn powf(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Convenience for integer exponents.
    pub fn powi(&self, exponent: i32) -> Result<Value, ScalarGradError> {
        pow_op(self, f64::from(exponent))
    }
}

/// Raises a node to a construction-time real constant.
///
/// The exponent is a plain `f64`, never another node: the engine does not
/// differentiate with respect to exponents. A non-finite exponent is
/// rejected with `InvalidArgument` before any node is created.
pub fn pow_op(a: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidArgument {
            operation: "pow".to_string(),
            reason: format!("exponent {exponent} is not a finite real constant"),
        });
    }
    Ok(pow_unchecked(a, exponent))
}

/// `pow` without the exponent check, for internal call sites that pass a
/// literal constant (`div` builds `b^-1` this way).
pub(crate) fn pow_unchecked(a: &Value, exponent: f64) -> Value {
    let grad_fn = PowBackward {
        base: a.clone(),
        exponent,
    };
    Value::from_op(a.data().powf(exponent), Op::Pow, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward rule for `out = base^k`: the base receives
/// `k * base^(k-1) * grad_output`.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let k = self.exponent;
        vec![k * self.base.data().powf(k - 1.0) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
