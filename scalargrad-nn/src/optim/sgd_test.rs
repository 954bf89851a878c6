// src/optim/sgd_test.rs

#[cfg(test)]
mod tests {
    use crate::optim::{Optimizer, Sgd};
    use approx::assert_relative_eq;
    use scalargrad_core::Value;

    #[test]
    fn test_step_moves_against_the_gradient() {
        let p = Value::new(2.0);
        let root = &p * &p;
        root.backward();
        assert_eq!(p.grad(), 4.0);

        let mut sgd = Sgd::new(vec![p.clone()], 0.1);
        sgd.step();
        assert_relative_eq!(p.data(), 2.0 - 0.1 * 4.0);
    }

    #[test]
    fn test_zero_grad_clears_parameters() {
        let p = Value::new(1.0);
        let root = &p * 3.0;
        root.backward();
        assert_eq!(p.grad(), 3.0);

        let sgd = Sgd::new(vec![p.clone()], 0.1);
        sgd.zero_grad();
        assert_eq!(p.grad(), 0.0);
    }

    #[test]
    fn test_descends_a_quadratic() {
        // Minimize (x - 3)^2 by rebuilding the graph each step.
        let x = Value::new(0.0);
        let mut sgd = Sgd::new(vec![x.clone()], 0.1);

        for _ in 0..100 {
            let residual = &x - 3.0;
            let loss = residual.powf(2.0).unwrap();
            sgd.zero_grad();
            loss.backward();
            sgd.step();
        }
        assert_relative_eq!(x.data(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_non_finite_gradient_is_skipped() {
        let p = Value::new(1.0);
        // 1/0 gives an infinite forward value and a non-finite gradient.
        let root = &p / 0.0;
        root.backward();
        assert!(!p.grad().is_finite());

        let mut sgd = Sgd::new(vec![p.clone()], 0.1);
        sgd.step();
        assert_eq!(p.data(), 1.0);
    }
}
