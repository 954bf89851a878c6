// src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;
use std::ops::Add;
use std::rc::Rc;

// --- Forward Operation ---

/// Adds two nodes, producing a new node that records the chain-rule
/// contribution back to both operands.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let grad_fn = AddBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(a.data() + b.data(), Op::Add, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward rule for `out = lhs + rhs`: both operands receive the output
/// gradient unchanged.
#[derive(Debug)]
struct AddBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator sugar ---

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add_op(self, rhs)
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        add_op(&self, &rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        add_op(self, &Value::from(rhs))
    }
}

impl Add<f64> for Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        add_op(&self, &Value::from(rhs))
    }
}

impl Add<&Value> for f64 {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add_op(&Value::from(self), rhs)
    }
}

impl Add<Value> for f64 {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        add_op(&Value::from(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
