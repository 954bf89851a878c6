// src/value/debug.rs

use crate::value::Value;
use std::fmt;

// Debug and Display expose the current value (and label) only: gradients
// and graph shape stay out of the representation.

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = self.data.borrow();
        match &payload.label {
            Some(label) => write!(f, "Value(data={}, label={:?})", payload.data, label),
            None => write!(f, "Value(data={})", payload.data),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data())
    }
}
