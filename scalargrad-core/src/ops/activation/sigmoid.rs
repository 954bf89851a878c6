use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

// --- Forward Operation ---

impl Value {
    /// Applies the logistic sigmoid activation: `1 / (1 + e^-x)`.
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

/// See [`Value::sigmoid`].
pub fn sigmoid_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        |x| 1.0 / (1.0 + (-x).exp()),
        Op::Sigmoid,
        |input, output| Rc::new(SigmoidBackward { input, output }),
    )
}

// --- Backward Operation ---

/// Backward rule for sigmoid: `out * (1 - out)`, computed from the output
/// value.
#[derive(Debug)]
struct SigmoidBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for SigmoidBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.output * (1.0 - self.output) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_sigmoid_at_zero() {
        let x = Value::new(0.0);
        let y = x.sigmoid();
        assert_eq!(y.data(), 0.5);
        y.backward();
        // 0.5 * (1 - 0.5)
        assert_eq!(x.grad(), 0.25);
    }

    #[test]
    fn test_sigmoid_saturates() {
        assert_relative_eq!(Value::new(10.0).sigmoid().data(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(Value::new(-10.0).sigmoid().data(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_sigmoid_backward_matches_closed_form() {
        let x = Value::new(1.5);
        let y = x.sigmoid();
        y.backward();
        let s = 1.0 / (1.0 + (-1.5_f64).exp());
        assert_relative_eq!(x.grad(), s * (1.0 - s), max_relative = 1e-12);
    }
}
