use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

// --- Forward Operation ---

impl Value {
    /// Applies the hyperbolic tangent activation.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

/// See [`Value::tanh`].
pub fn tanh_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        |x| {
            let e2x = (2.0 * x).exp();
            (e2x - 1.0) / (e2x + 1.0)
        },
        Op::Tanh,
        |input, output| Rc::new(TanhBackward { input, output }),
    )
}

// --- Backward Operation ---

/// Backward rule for tanh: `1 - tanh(x)^2`, computed from the output value.
#[derive(Debug)]
struct TanhBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![(1.0 - self.output * self.output) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---
