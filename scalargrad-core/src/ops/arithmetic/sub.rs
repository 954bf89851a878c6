// src/ops/arithmetic/sub.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;
use std::ops::Sub;
use std::rc::Rc;

// --- Forward Operation ---

/// Subtracts `b` from `a`, producing a new node.
///
/// The backward rule uses the closed-form derivative of `a - b`: the left
/// operand receives the output gradient, the right operand its negation.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    let grad_fn = SubBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(a.data() - b.data(), Op::Sub, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward rule for `out = lhs - rhs`.
#[derive(Debug)]
struct SubBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, -grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator sugar ---
// Subtraction is not commutative: the reflected form coerces the scalar
// into a leaf on the left.

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        sub_op(&self, &rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(self, &Value::from(rhs))
    }
}

impl Sub<f64> for Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(&self, &Value::from(rhs))
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        sub_op(&Value::from(self), rhs)
    }
}

impl Sub<Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        sub_op(&Value::from(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
