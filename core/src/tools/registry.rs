//! Tool registry for managing available tools

use crate::tools::{Tool, ToolExecutor};

/// Registry for managing tool creation and registration.
///
/// Factories are kept in registration order so tool descriptors are always
/// presented to the model in a stable order.
pub struct ToolRegistry {
    factories: Vec<Box<dyn ToolFactory>>,
}

/// Factory trait for creating tools
pub trait ToolFactory: Send + Sync {
    /// Create a new instance of the tool
    fn create(&self) -> Box<dyn Tool>;

    /// Get the name of the tool this factory creates
    fn tool_name(&self) -> &str;

    /// Get the description of the tool this factory creates
    fn tool_description(&self) -> &str;
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Register a tool factory
    pub fn register_factory(&mut self, factory: Box<dyn ToolFactory>) {
        self.factories
            .retain(|f| f.tool_name() != factory.tool_name());
        self.factories.push(factory);
    }

    /// Create a tool by name
    pub fn create_tool(&self, name: &str) -> Option<Box<dyn Tool>> {
        self.factories
            .iter()
            .find(|factory| factory.tool_name() == name)
            .map(|factory| factory.create())
    }

    /// List all available tool names, in registration order
    pub fn list_tools(&self) -> Vec<&str> {
        self.factories.iter().map(|f| f.tool_name()).collect()
    }

    /// Get tool information
    pub fn get_tool_info(&self, name: &str) -> Option<(&str, &str)> {
        self.factories
            .iter()
            .find(|factory| factory.tool_name() == name)
            .map(|factory| (factory.tool_name(), factory.tool_description()))
    }

    /// Create a tool executor with the specified tools
    pub fn create_executor(&self, tool_names: &[String]) -> ToolExecutor {
        let mut executor = ToolExecutor::new();

        for name in tool_names {
            if let Some(tool) = self.create_tool(name) {
                executor.register_tool(tool);
            }
        }

        executor
    }

    /// Create a tool executor with all available tools
    pub fn create_executor_with_all(&self) -> ToolExecutor {
        let mut executor = ToolExecutor::new();

        for factory in &self.factories {
            executor.register_tool(factory.create());
        }

        executor
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        // Register built-in travel tools
        registry.register_factory(Box::new(crate::tools::builtin::BookHotelToolFactory));
        registry.register_factory(Box::new(crate::tools::builtin::GetWeatherToolFactory));
        registry.register_factory(Box::new(crate::tools::builtin::ConvertCurrencyToolFactory));

        registry
    }
}

/// Macro to help implement tool factories
#[macro_export]
macro_rules! impl_tool_factory {
    ($factory:ident, $tool:ident, $name:expr, $description:expr) => {
        pub struct $factory;

        impl $crate::tools::ToolFactory for $factory {
            fn create(&self) -> Box<dyn $crate::tools::Tool> {
                Box::new($tool::new())
            }

            fn tool_name(&self) -> &str {
                $name
            }

            fn tool_description(&self) -> &str {
                $description
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::tools::registry::ToolRegistry;

    #[test]
    fn default_registry_has_all_travel_tools() {
        let registry = ToolRegistry::default();
        let tools = registry.list_tools();

        assert_eq!(tools, vec!["book_hotel", "get_weather", "convert_currency"]);
    }

    #[test]
    fn tool_creation() {
        let registry = ToolRegistry::default();

        for tool_name in registry.list_tools() {
            let tool = registry
                .create_tool(tool_name)
                .unwrap_or_else(|| panic!("Failed to create tool '{}'", tool_name));

            assert_eq!(tool.name(), tool_name);
            assert!(
                !tool.description().is_empty(),
                "Tool '{}' has empty description",
                tool_name
            );

            let schema = tool.parameters_schema();
            assert_eq!(
                schema.get("type").and_then(|v| v.as_str()),
                Some("object"),
                "Tool '{}' schema is not an object schema",
                tool_name
            );
            assert!(
                schema
                    .get("properties")
                    .and_then(|v| v.as_object())
                    .map(|props| !props.is_empty())
                    .unwrap_or(false),
                "Tool '{}' has no properties in schema",
                tool_name
            );
        }
    }

    #[test]
    fn tool_info() {
        let registry = ToolRegistry::default();

        for tool_name in registry.list_tools() {
            let (name, description) = registry
                .get_tool_info(tool_name)
                .unwrap_or_else(|| panic!("Failed to get info for tool '{}'", tool_name));

            assert_eq!(name, tool_name);
            assert!(!description.is_empty());
        }
    }

    #[test]
    fn executor_creation_with_subset() {
        let registry = ToolRegistry::default();

        let tool_names = vec!["get_weather".to_string(), "missing_tool".to_string()];
        let executor = registry.create_executor(&tool_names);
        assert_eq!(executor.list_tools(), vec!["get_weather"]);

        let all_executor = registry.create_executor_with_all();
        assert_eq!(all_executor.list_tools().len(), 3);
    }
}
