//! Built-in calculators, one per arithmetic operation.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;
