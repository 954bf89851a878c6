// Element-wise math functions with domain restrictions.

pub mod ln;

pub use ln::ln_op;
