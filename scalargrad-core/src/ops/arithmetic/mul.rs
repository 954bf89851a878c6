// src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;
use std::ops::Mul;
use std::rc::Rc;

// --- Forward Operation ---

/// Multiplies two nodes, producing a new node.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    mul_with_op(a, b, Op::Mul)
}

/// Shared constructor for the operations defined through multiplication:
/// `neg` is `a * -1` and `div` is `a * b^-1`. The tag only affects
/// diagnostics; the backward rule is always `MulBackward`.
pub(crate) fn mul_with_op(a: &Value, b: &Value, op: Op) -> Value {
    let grad_fn = MulBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(a.data() * b.data(), op, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward rule for `out = lhs * rhs`: each operand receives the output
/// gradient scaled by the other operand's forward value.
#[derive(Debug)]
struct MulBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![
            self.rhs.data() * grad_output,
            self.lhs.data() * grad_output,
        ]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator sugar ---

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        mul_op(&self, &rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        mul_op(self, &Value::from(rhs))
    }
}

impl Mul<f64> for Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        mul_op(&self, &Value::from(rhs))
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul_op(&Value::from(self), rhs)
    }
}

impl Mul<Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        mul_op(&Value::from(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
