use scalargrad_core::{ScalarGradError, Value};
use std::str::FromStr;

/// Activation a neuron applies to its weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Relu,
    Tanh,
    Sigmoid,
}

impl Activation {
    /// Applies this activation to a node, producing a new node.
    pub fn apply(&self, value: &Value) -> Value {
        match self {
            Activation::Relu => value.relu(),
            Activation::Tanh => value.tanh(),
            Activation::Sigmoid => value.sigmoid(),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "relu" => Ok(Activation::Relu),
            "tanh" => Ok(Activation::Tanh),
            "sigmoid" => Ok(Activation::Sigmoid),
            _ => Err(ScalarGradError::InvalidArgument {
                operation: "activation".to_string(),
                reason: format!("unknown activation '{name}'"),
            }),
        }
    }
}
