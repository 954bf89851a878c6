use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Accumulated gradient d(root)/d(self) from the most recent backward
    /// pass.
    pub fn grad(&self) -> f64 {
        self.data.borrow().grad
    }

    /// Resets this node's gradient accumulator to zero.
    ///
    /// Training loops must call this on every retained leaf between
    /// propagation runs; backward only ever adds.
    pub fn zero_grad(&self) {
        self.data.borrow_mut().grad = 0.0;
    }

    /// Zeroes the gradient of every node reachable from `self`, making the
    /// same graph safe to propagate through again.
    pub fn zero_grad_all(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.data.borrow_mut().grad = grad;
    }

    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.data.borrow_mut().grad += contribution;
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Computes d(self)/d(n) for every node `n` reachable from `self`
    /// (d(self)/d(self) is 1). The graph is ordered once, topologically,
    /// then walked in reverse so a node's backward rule runs exactly once,
    /// after every consumer of that node (including through diamond-shaped
    /// reuse) has contributed to its gradient.
    ///
    /// Gradients accumulate into whatever state the reachable nodes
    /// currently hold; re-running on the same graph requires a reset
    /// (`zero_grad_all`) first.
    pub fn backward(&self) {
        let ordering = topological_sort(self);
        log::debug!("backward: propagating through {} nodes", ordering.len());

        self.set_grad(1.0);
        for node in ordering.iter().rev() {
            if let Some(grad_fn) = node.grad_fn() {
                let grad_output = node.grad();
                let contributions = grad_fn.backward(grad_output);
                let operands = grad_fn.inputs();
                debug_assert_eq!(
                    contributions.len(),
                    operands.len(),
                    "backward rule returned a gradient per operand"
                );
                for (operand, contribution) in operands.iter().zip(contributions) {
                    operand.accumulate_grad(contribution);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
