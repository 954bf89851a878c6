// src/value_data.rs

use crate::autograd::BackwardOp;
use std::rc::Rc;

/// Which operation produced a node.
///
/// Diagnostic only: the backward rule is carried by `grad_fn`, never
/// dispatched on this tag. Operations defined in terms of another (`neg`,
/// `div`) keep their own tag while reusing the underlying rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pow,
    Relu,
    Tanh,
    Sigmoid,
    Ln,
}

/// Internal storage and autograd metadata for a `Value`.
///
/// This struct holds the forward scalar, the gradient accumulator, and the
/// link back to the operation that produced the node. It is wrapped in
/// `Rc<RefCell<ValueData>>` by the `Value` handle to allow shared ownership
/// across the graph (one node may be the operand of many downstream nodes)
/// and interior mutability of the gradient.
#[derive(Debug)]
pub struct ValueData {
    /// The forward-computed scalar. Fixed at construction; only leaf
    /// parameters are ever rewritten (through `Value::set_data`) between
    /// propagation runs.
    pub(crate) data: f64,
    /// Accumulated gradient d(root)/d(this node). Starts at 0.0 and only
    /// receives `+=` contributions during a backward pass.
    pub(crate) grad: f64,
    /// Diagnostic tag naming the producing operation.
    pub(crate) op: Op,
    /// The backward rule of the operation that produced this node, holding
    /// the operand handles. Leaf nodes have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
    /// Optional diagnostic name. No semantic weight.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Payload for a leaf node: no operands, no backward rule.
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            grad_fn: None,
            label: None,
        }
    }

    /// Payload for a node produced by an operation.
    pub(crate) fn from_op(data: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            grad_fn: Some(grad_fn),
            label: None,
        }
    }
}
