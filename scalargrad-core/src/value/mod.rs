pub mod autograd_methods;
pub mod debug;

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::{Op, ValueData};
use std::cell::RefCell;
use std::iter::Sum;
use std::rc::Rc;

/// A shared handle to one scalar node of the computation graph.
///
/// Cloning is cheap (reference-counted) and clones alias the same node: an
/// operation recording a `Value` as an operand and a caller keeping a handle
/// to read the gradient later both observe the same payload. A node lives as
/// long as any handle or any downstream node referencing it.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node with the given scalar, no operands, and no
    /// backward rule.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates a labeled leaf node. The label carries no semantic weight and
    /// only shows up in diagnostics.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.data.borrow_mut().label = Some(label.into());
        value
    }

    /// Wraps the forward result of an operation together with its backward
    /// rule. Only the op constructors build non-leaf nodes.
    pub(crate) fn from_op(data: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, op, grad_fn))),
        }
    }

    /// The forward-computed scalar.
    pub fn data(&self) -> f64 {
        self.data.borrow().data
    }

    /// Rewrites the stored scalar.
    ///
    /// Intended for leaf parameters between optimization steps; derived
    /// nodes are rebuilt by a fresh forward pass rather than updated in
    /// place.
    pub fn set_data(&self, data: f64) {
        self.data.borrow_mut().data = data;
    }

    /// Diagnostic tag of the operation that produced this node.
    pub fn op(&self) -> Op {
        self.data.borrow().op
    }

    /// Diagnostic label, if one was attached.
    pub fn label(&self) -> Option<String> {
        self.data.borrow().label.clone()
    }

    /// Stable identity of this node: the address of the shared payload.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Clone of the backward rule node, if this is not a leaf.
    pub(crate) fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.data.borrow().grad_fn.clone()
    }
}

impl<T: Into<f64>> From<T> for Value {
    /// Coerces a raw scalar into a leaf node, so mixed scalar/node
    /// expressions work transparently.
    fn from(data: T) -> Self {
        Value::new(data.into())
    }
}

impl Sum for Value {
    /// Folds an iterator of values with `add`; the empty sum is a fresh
    /// zero leaf.
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, value| &acc + &value),
            None => Value::new(0.0),
        }
    }
}
