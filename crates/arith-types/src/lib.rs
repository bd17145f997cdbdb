//! Arith Types
//!
//! This crate defines the numeric value shared by the arith crates. Operands
//! and results are both `Number`, so `arith-calculator` and any caller agree on
//! a single representation without depending on each other.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]
#![deny(missing_docs)]

mod types;
pub use types::Number;
