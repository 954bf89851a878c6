use scalargrad_core::Value;

/// The base trait for network building blocks.
///
/// A training loop needs exactly two things from a composed structure: the
/// ability to enumerate its leaf parameter nodes (for gradient reset and
/// optimizer updates), and a gradient reset between optimization steps,
/// since backward only ever accumulates.
pub trait Module {
    /// All learnable leaf parameters of this module, including those of any
    /// sub-modules. The returned handles alias the live parameter nodes.
    fn parameters(&self) -> Vec<Value>;

    /// Resets every parameter's gradient accumulator to zero.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Module;
    use scalargrad_core::Value;

    struct PairModule {
        w: Value,
        b: Value,
    }

    impl Module for PairModule {
        fn parameters(&self) -> Vec<Value> {
            vec![self.w.clone(), self.b.clone()]
        }
    }

    #[test]
    fn test_zero_grad_resets_all_parameters() {
        let module = PairModule {
            w: Value::new(2.0),
            b: Value::new(1.0),
        };
        let root = &(&module.w * 3.0) + &module.b;
        root.backward();
        assert_eq!(module.w.grad(), 3.0);
        assert_eq!(module.b.grad(), 1.0);

        module.zero_grad();
        assert_eq!(module.w.grad(), 0.0);
        assert_eq!(module.b.grad(), 0.0);
    }
}
