//! # Scalar Operations Module (`ops`)
//!
//! Central hub for the differentiable operations on `Value` nodes,
//! categorized into submodules.
//!
//! ## Structure:
//!
//! - **`_op` functions:** each operation has a core function (named
//!   `xxx_op`) that computes the forward scalar and wires up the backward
//!   rule on the output node. Methods on `Value` and the `std::ops`
//!   operator impls are thin wrappers over these.
//! - **`Backward` structs:** each operation has a corresponding struct
//!   (e.g. `AddBackward`) implementing the
//!   [`BackwardOp`](crate::autograd::BackwardOp) trait. It stores the
//!   operand handles (and, where needed, the forward output) required to
//!   compute gradient contributions during backpropagation.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow, abs.
//! - [`activation`]: relu, tanh, sigmoid.
//! - [`math_elem`]: element-wise math functions (ln).

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

/// Applies a unary operation to a node.
///
/// Computes the forward value and attaches the backward rule built by
/// `backward_builder`, which receives the operand handle and the forward
/// output (several activations phrase their derivative in terms of the
/// output). Domain checks belong to the caller: when such a check fails, no
/// node may exist yet.
pub(crate) fn apply_unary_op<F, B>(a: &Value, forward: F, op: Op, backward_builder: B) -> Value
where
    F: FnOnce(f64) -> f64,
    B: FnOnce(Value, f64) -> Rc<dyn BackwardOp>,
{
    let output = forward(a.data());
    let grad_fn = backward_builder(a.clone(), output);
    Value::from_op(output, op, grad_fn)
}
