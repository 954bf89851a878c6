use crate::activation::Activation;
use crate::layers::neuron::Neuron;
use crate::module::Module;
use rand::Rng;
use scalargrad_core::{ScalarGradError, Value};

/// A fully-connected layer: `fan_out` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Dense {
    neurons: Vec<Neuron>,
    fan_in: usize,
}

impl Dense {
    /// Creates a layer of `fan_out` neurons, each with `fan_in` inputs and
    /// the same activation.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        fan_in: usize,
        fan_out: usize,
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        if fan_out == 0 {
            return Err(ScalarGradError::InvalidArgument {
                operation: "Dense::new".to_string(),
                reason: "fan_out must be at least 1".to_string(),
            });
        }
        let neurons = (0..fan_out)
            .map(|_| Neuron::new(rng, fan_in, activation))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dense { neurons, fan_in })
    }

    /// Runs every neuron over the same inputs.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    pub fn fan_in(&self) -> usize {
        self.fan_in
    }

    pub fn fan_out(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Dense {
    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
