use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Numerical gradient is not finite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is not finite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },
}

// Map ScalarGradError to GradCheckError::ForwardPassError
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must rebuild its expression from the leaf nodes it is handed, so
/// perturbed evaluations never touch a previously constructed graph. The
/// analytical gradients come from one backward pass over an unperturbed
/// build; each is then compared against
/// `(f(x + eps) - f(x - eps)) / (2 eps)` within `tolerance`
/// (absolute or relative, whichever is looser).
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let leaves: Vec<Value> = inputs.iter().copied().map(Value::from).collect();
    let output = func(&leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    for (i, &x) in inputs.iter().enumerate() {
        let analytical_grad = analytical[i];
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let eval_at = |shifted: f64| -> Result<f64, GradCheckError> {
            let mut perturbed = inputs.to_vec();
            perturbed[i] = shifted;
            let leaves: Vec<Value> = perturbed.into_iter().map(Value::from).collect();
            Ok(func(&leaves)?.data())
        };
        let loss_plus = eval_at(x + epsilon)?;
        let loss_minus = eval_at(x - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: analytical_grad,
                numerical: numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
