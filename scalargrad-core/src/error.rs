use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// Both variants are immediately-detectable precondition violations raised
/// at node-construction time; no graph node exists for the failed operation.
/// Gradient propagation itself has no failure modes.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// The input lies outside the mathematical domain of the operation
    /// (e.g. `ln` of a non-positive value).
    #[error("Domain error in '{operation}': input {value} is outside the valid domain")]
    DomainError { operation: String, value: f64 },

    /// A structurally invalid argument, e.g. a non-finite power exponent or
    /// an activation name the composition layer does not recognize.
    #[error("Invalid argument for '{operation}': {reason}")]
    InvalidArgument { operation: String, reason: String },
}
