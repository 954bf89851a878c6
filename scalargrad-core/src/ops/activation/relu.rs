use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

// --- Forward Operation ---

impl Value {
    /// Applies the Rectified Linear Unit activation: `relu(x) = max(0, x)`.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

/// See [`Value::relu`].
pub fn relu_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        |x| if x >= 0.0 { x } else { 0.0 },
        Op::Relu,
        |input, output| Rc::new(ReluBackward { input, output }),
    )
}

// --- Backward Operation ---

/// Backward rule for relu, phrased on the output's sign: the output
/// gradient passes through where the output is positive and is blocked
/// elsewhere.
#[derive(Debug)]
struct ReluBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![if self.output > 0.0 { grad_output } else { 0.0 }]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---
