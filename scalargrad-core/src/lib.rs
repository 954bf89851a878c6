// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod error;

// Ré-exporte les types de base pour qu'ils soient accessibles directement
// via `scalargrad_core::Value` etc.
pub use error::ScalarGradError;
pub use value::Value;
pub use value_data::Op;
