use crate::activation::Activation;
use crate::init::init_weight;
use crate::module::Module;
use rand::Rng;
use scalargrad_core::{ScalarGradError, Value};

/// A single unit: `activation(sum(w_i * x_i) + b)`.
///
/// Weights are leaf nodes drawn by the scheme matched to the activation;
/// the bias starts at zero. The same parameter nodes persist across forward
/// passes, so gradients accumulate into them until reset.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `fan_in` randomly initialized weights and a
    /// zero bias.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        fan_in: usize,
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        if fan_in == 0 {
            return Err(ScalarGradError::InvalidArgument {
                operation: "Neuron::new".to_string(),
                reason: "fan_in must be at least 1".to_string(),
            });
        }
        let weights = (0..fan_in)
            .map(|_| Value::from(init_weight(rng, fan_in, activation)))
            .collect();
        Ok(Neuron {
            weights,
            bias: Value::with_label(0.0, "bias"),
            activation,
        })
    }

    /// Weighted sum of the inputs plus bias, passed through the activation.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InvalidArgument {
                operation: "Neuron::forward".to_string(),
                reason: format!(
                    "expected {} inputs, got {}",
                    self.weights.len(),
                    inputs.len()
                ),
            });
        }
        let pre_activation = inputs
            .iter()
            .zip(&self.weights)
            .fold(self.bias.clone(), |acc, (x, w)| &acc + &(x * w));
        Ok(self.activation.apply(&pre_activation))
    }

    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Value> {
        let mut parameters = self.weights.clone();
        parameters.push(self.bias.clone());
        parameters
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
