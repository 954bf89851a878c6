// Composition layer over scalargrad-core: activation selection, random
// weight initialization, neuron/layer/network stacking, losses, and
// optimizers. Everything here consumes the engine through its public API
// only (leaf construction, op composition, backward, gradient access).

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod optim;

// Re-export the common building blocks.
pub use activation::Activation;
pub use layers::dense::Dense;
pub use layers::mlp::Mlp;
pub use layers::neuron::Neuron;
pub use module::Module;
