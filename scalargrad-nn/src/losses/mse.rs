use scalargrad_core::{ScalarGradError, Value};

/// Mean squared error between predictions and targets:
/// `mean((p_i - t_i)^2)`.
///
/// Targets are usually plain leaves; gradients flow back through the
/// predictions into whatever network produced them.
pub fn mse_loss(predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
    if predictions.is_empty() || predictions.len() != targets.len() {
        return Err(ScalarGradError::InvalidArgument {
            operation: "mse_loss".to_string(),
            reason: format!(
                "predictions ({}) and targets ({}) must be non-empty and equal in length",
                predictions.len(),
                targets.len()
            ),
        });
    }
    let mut total = Value::new(0.0);
    for (prediction, target) in predictions.iter().zip(targets) {
        total = &total + &(prediction - target).powf(2.0)?;
    }
    Ok(&total / predictions.len() as f64)
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
