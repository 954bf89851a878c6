use crate::optim::optimizer::Optimizer;
use scalargrad_core::Value;

/// Plain stochastic gradient descent: `p <- p - lr * p.grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
}

impl Sgd {
    /// Creates an optimizer over the given parameter handles.
    pub fn new(params: Vec<Value>, lr: f64) -> Self {
        if lr <= 0.0 || !lr.is_finite() {
            log::warn!("SGD constructed with non-positive learning rate {lr}");
        }
        Sgd { params, lr }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr
    }

    /// Adjusts the learning rate for subsequent steps (manual scheduling).
    pub fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) {
        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!("skipping SGD update for a parameter with non-finite gradient {grad}");
                continue;
            }
            param.set_data(param.data() - self.lr * grad);
        }
    }

    fn zero_grad(&self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
