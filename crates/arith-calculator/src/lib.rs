#![deny(warnings)]
//! A four-function arithmetic calculator.
//!
//! The free functions [`add`], [`subtract`], [`multiply`] and [`divide`] are
//! the core of the crate. [`Calculator`] wraps them as named calculator
//! plugins so an operation can be chosen by name at runtime and fed a map of
//! named operands, and carries the [`CalculatorConfig`] that decides how two
//! integers are divided.

pub mod built_in;
pub mod calculator;
pub mod config;
pub mod error;
pub mod operation;
pub mod ops;
pub mod plugin;
pub mod plugin_manager;

pub use arith_types::Number;
pub use calculator::Calculator;
pub use config::{CalculatorConfig, DivisionMode};
pub use error::{CalculatorError, CalculatorResult, ErrorKind};
pub use operation::Operation;
pub use ops::{add, divide, divide_with, multiply, subtract};
