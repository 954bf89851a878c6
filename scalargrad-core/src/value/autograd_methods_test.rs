// src/value/autograd_methods_test.rs

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_root_gradient_is_seeded_to_one() {
        let a = Value::new(2.0);
        let root = &a * 3.0;
        root.backward();
        assert_eq!(root.grad(), 1.0);
    }

    #[test]
    fn test_multiplicative_chain() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = Value::new(4.0);
        let root = &(&a * &b) + &c;

        assert_eq!(root.data(), 10.0);
        root.backward();
        assert_eq!(a.grad(), 3.0);
        assert_eq!(b.grad(), 2.0);
        assert_eq!(c.grad(), 1.0);
    }

    #[test]
    fn test_additive_identity() {
        let a = Value::new(5.0);
        let root = &a + 0.0;
        root.backward();
        assert_eq!(a.grad(), 1.0);
    }

    #[test]
    fn test_fan_out_accumulates_both_paths() {
        let a = Value::new(3.0);
        let root = &a * &a;
        root.backward();
        // d(a*a)/da = 2a, the sum of both paths' contributions.
        assert_eq!(a.grad(), 2.0 * a.data());
    }

    #[test]
    fn test_diamond_shared_operands() {
        let a = Value::new(3.0);
        let b = Value::new(2.0);
        let d = &(&a + &b) * &(&a - &b);

        assert_eq!(d.data(), a.data() * a.data() - b.data() * b.data());
        d.backward();
        // d = a^2 - b^2, so da = 2a and db = -2b.
        assert_relative_eq!(a.grad(), 2.0 * a.data());
        assert_relative_eq!(b.grad(), -2.0 * b.data());
    }

    #[test]
    fn test_dead_branch_propagates_zero() {
        let a = Value::new(7.0);
        let b = Value::new(2.0);
        let root = &(&a * 0.0) + &b;
        root.backward();
        assert_eq!(a.grad(), 0.0);
        assert_eq!(b.grad(), 1.0);
    }

    #[test]
    fn test_reset_and_rerun_is_bit_identical() {
        let a = Value::new(-0.7);
        let b = Value::new(1.3);
        let product = &a * &b;
        let root = &product.tanh() + &(&a * &a);

        root.backward();
        let first = (a.grad(), b.grad(), product.grad(), root.grad());

        root.zero_grad_all();
        assert_eq!(a.grad(), 0.0);
        assert_eq!(product.grad(), 0.0);

        root.backward();
        let second = (a.grad(), b.grad(), product.grad(), root.grad());
        assert_eq!(first, second);
    }

    #[test]
    fn test_without_reset_gradients_keep_accumulating() {
        let a = Value::new(2.0);
        let root = &a * 3.0;
        root.backward();
        assert_eq!(a.grad(), 3.0);
        // The root's own gradient is re-seeded, not accumulated, so a second
        // run doubles the leaf gradient.
        root.backward();
        assert_eq!(a.grad(), 6.0);
    }

    #[test]
    fn test_deep_chain_does_not_overflow_the_stack() {
        let x = Value::new(0.0);
        let mut node = x.clone();
        for _ in 0..50_000 {
            node = &node + 1.0;
        }
        assert_eq!(node.data(), 50_000.0);
        node.backward();
        assert_eq!(x.grad(), 1.0);
    }

    // Reference expression from the micrograd readme; pins the interplay of
    // add, sub, mul, div, pow, and relu across a heavily reused graph.
    #[test]
    fn test_mixed_expression_reference_gradients() {
        let a = Value::new(-4.0);
        let b = Value::new(2.0);
        let mut c = &a + &b;
        let mut d = &(&a * &b) + &b.powf(3.0).unwrap();
        c = &c + &(&c + 1.0);
        c = &c + &(&(1.0 + &c) + &(-&a));
        d = &d + &(&(&d * 2.0) + &(&b + &a).relu());
        d = &d + &(&(3.0 * &d) + &(&b - &a).relu());
        let e = &c - &d;
        let f = e.powf(2.0).unwrap();
        let mut g = &f / 2.0;
        g = &g + &(10.0 / &f);

        assert_relative_eq!(g.data(), 24.70408163265306, max_relative = 1e-9);
        g.backward();
        assert_relative_eq!(a.grad(), 138.83381924198252, max_relative = 1e-9);
        assert_relative_eq!(b.grad(), 645.5772594752186, max_relative = 1e-9);
    }
}
