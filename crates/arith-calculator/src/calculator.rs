use crate::built_in::{
    add::AddCalculator, divide::DivideCalculator, multiply::MultiplyCalculator,
    subtract::SubtractCalculator,
};
use crate::config::CalculatorConfig;
use crate::error::CalculatorError;
use crate::operation::Operation;
use crate::plugin::{CalculationResult, CalculatorPlugin};
use crate::plugin_manager::PluginManager;
use arith_types::Number;
use std::collections::HashMap;
use tracing::debug;

pub struct Calculator {
    config: CalculatorConfig,
    plugin_manager: PluginManager,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        let mut plugin_manager = PluginManager::new();
        plugin_manager.register(Box::new(AddCalculator));
        plugin_manager.register(Box::new(SubtractCalculator));
        plugin_manager.register(Box::new(MultiplyCalculator));
        plugin_manager.register(Box::new(DivideCalculator::new(config.division)));
        Self { config, plugin_manager }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Registers an additional calculator. A plugin with a built-in name replaces it.
    pub fn register(&mut self, plugin: Box<dyn CalculatorPlugin>) {
        self.plugin_manager.register(plugin);
    }

    pub fn calculators(&self) -> Vec<&str> {
        self.plugin_manager.names()
    }

    /// Runs the calculator registered as `calculator_name` over named operands.
    pub fn calculate(
        &self,
        calculator_name: &str,
        args: &HashMap<String, &Number>,
    ) -> CalculationResult {
        debug!(calculator = calculator_name, args = args.len(), "dispatching calculation");
        match self.plugin_manager.get(calculator_name) {
            Some(plugin) => plugin.calculate(args),
            None => Err(CalculatorError::UnknownCalculator { name: calculator_name.to_string() }),
        }
    }

    /// Applies `operation` to positional operands through its registered calculator.
    pub fn evaluate(
        &self,
        operation: Operation,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> CalculationResult {
        let (a, b) = (a.into(), b.into());
        let args: HashMap<String, &Number> =
            [("a".to_string(), &a), ("b".to_string(), &b)].into_iter().collect();
        self.calculate(operation.name(), &args)
    }

    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalculationResult {
        self.evaluate(Operation::Add, a, b)
    }

    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalculationResult {
        self.evaluate(Operation::Subtract, a, b)
    }

    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalculationResult {
        self.evaluate(Operation::Multiply, a, b)
    }

    /// Divides using the configured [`crate::DivisionMode`].
    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalculationResult {
        self.evaluate(Operation::Divide, a, b)
    }
}
