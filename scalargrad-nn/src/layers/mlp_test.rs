// src/layers/mlp_test.rs

#[cfg(test)]
mod tests {
    use crate::activation::Activation;
    use crate::layers::mlp::Mlp;
    use crate::module::Module;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use scalargrad_core::{ScalarGradError, Value};

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(31)
    }

    #[test]
    fn test_layer_widths_chain() -> Result<(), ScalarGradError> {
        let mlp = Mlp::new(
            &mut test_rng(),
            2,
            &[
                (16, Activation::Relu),
                (16, Activation::Relu),
                (1, Activation::Sigmoid),
            ],
        )?;
        assert_eq!(mlp.layers().len(), 3);
        assert_eq!(mlp.layers()[0].fan_in(), 2);
        assert_eq!(mlp.layers()[1].fan_in(), 16);
        assert_eq!(mlp.layers()[2].fan_in(), 16);
        // (2+1)*16 + (16+1)*16 + (16+1)*1
        assert_eq!(mlp.parameters().len(), 48 + 272 + 17);

        let outputs = mlp.forward(&[Value::new(0.5), Value::new(-0.5)])?;
        assert_eq!(outputs.len(), 1);
        Ok(())
    }

    #[test]
    fn test_no_layers_is_rejected() {
        let result = Mlp::new(&mut test_rng(), 2, &[]);
        assert!(matches!(
            result,
            Err(ScalarGradError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_backward_then_zero_grad_round_trip() -> Result<(), ScalarGradError> {
        let mlp = Mlp::new(
            &mut test_rng(),
            2,
            &[(4, Activation::Tanh), (1, Activation::Sigmoid)],
        )?;
        let outputs = mlp.forward(&[Value::new(0.3), Value::new(0.9)])?;
        outputs[0].backward();

        // The output layer's bias always receives gradient through sigmoid.
        let some_grad = mlp
            .parameters()
            .iter()
            .any(|parameter| parameter.grad() != 0.0);
        assert!(some_grad);

        mlp.zero_grad();
        assert!(mlp
            .parameters()
            .iter()
            .all(|parameter| parameter.grad() == 0.0));
        Ok(())
    }

    #[test]
    fn test_forward_is_pure_with_respect_to_parameters() -> Result<(), ScalarGradError> {
        let mlp = Mlp::new(&mut test_rng(), 2, &[(3, Activation::Tanh)])?;
        let inputs = [Value::new(0.1), Value::new(0.2)];
        let first: Vec<f64> = mlp.forward(&inputs)?.iter().map(Value::data).collect();
        let second: Vec<f64> = mlp.forward(&inputs)?.iter().map(Value::data).collect();
        assert_eq!(first, second);
        Ok(())
    }
}
