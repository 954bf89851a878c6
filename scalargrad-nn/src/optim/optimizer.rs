/// Common interface for optimizers.
///
/// An optimizer holds handles to leaf parameter nodes and updates their
/// payloads in place between passes; the graph of derived nodes is rebuilt
/// by the next forward pass.
pub trait Optimizer {
    /// Applies one update step from the currently accumulated gradients.
    fn step(&mut self);

    /// Clears the accumulated gradients on every managed parameter. Must be
    /// called between backward passes; gradients only ever accumulate.
    fn zero_grad(&self);
}
