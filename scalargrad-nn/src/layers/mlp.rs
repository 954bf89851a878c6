use crate::activation::Activation;
use crate::layers::dense::Dense;
use crate::module::Module;
use rand::Rng;
use scalargrad_core::{ScalarGradError, Value};

/// A multi-layer perceptron built from `(width, activation)` layer
/// definitions; each layer's output width becomes the next layer's input
/// width.
///
/// `Mlp::new(rng, 2, &[(16, Relu), (16, Relu), (1, Sigmoid)])` builds a
/// 2-16-16-1 network.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Dense>,
}

impl Mlp {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        fan_in: usize,
        layer_defs: &[(usize, Activation)],
    ) -> Result<Self, ScalarGradError> {
        if layer_defs.is_empty() {
            return Err(ScalarGradError::InvalidArgument {
                operation: "Mlp::new".to_string(),
                reason: "at least one layer is required".to_string(),
            });
        }
        let mut layers = Vec::with_capacity(layer_defs.len());
        let mut width = fan_in;
        for &(fan_out, activation) in layer_defs {
            layers.push(Dense::new(rng, width, fan_out, activation)?);
            width = fan_out;
        }
        let mlp = Mlp { layers };
        log::debug!(
            "constructed MLP with {} layers and {} parameters",
            mlp.layers.len(),
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    /// Feeds the inputs through every layer in order.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
