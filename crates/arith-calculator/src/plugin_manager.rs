use crate::plugin::CalculatorPlugin;
use std::collections::HashMap;
use tracing::debug;

pub struct PluginManager {
    plugins: HashMap<String, Box<dyn CalculatorPlugin>>,
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginManager {
    pub fn new() -> Self {
        Self { plugins: HashMap::new() }
    }

    /// Registers `plugin`, replacing any plugin already registered under its name.
    pub fn register(&mut self, plugin: Box<dyn CalculatorPlugin>) {
        debug!(calculator = plugin.name(), "registering calculator");
        self.plugins.insert(plugin.name().to_string(), plugin);
    }

    pub fn get(&self, name: &str) -> Option<&dyn CalculatorPlugin> {
        self.plugins.get(name).map(|p| p.as_ref())
    }

    /// Registered calculator names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
