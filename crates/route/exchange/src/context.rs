use std::sync::Arc;

use crate::converter::{DefaultTypeConverter, TypeConverter};

/// Shared services for the exchanges of one route.
///
/// Every exchange holds an `Arc` to its context; snapshots derived from an
/// exchange share the same context.
pub struct RouteContext {
    name: String,
    converter: Arc<dyn TypeConverter>,
}

impl RouteContext {
    /// Create a context using the [`DefaultTypeConverter`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            converter: Arc::new(DefaultTypeConverter::default()),
        }
    }

    /// Replace the type converter.
    pub fn with_converter(mut self, converter: Arc<dyn TypeConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_converter(&self) -> &dyn TypeConverter {
        self.converter.as_ref()
    }
}

impl std::fmt::Debug for RouteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteContext")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    struct NeverTrue;

    impl TypeConverter for NeverTrue {
        fn to_boolean(&self, _value: &Value) -> Option<bool> {
            Some(false)
        }
    }

    #[test]
    fn default_context_uses_default_converter() {
        let ctx = RouteContext::new("orders");
        assert_eq!(ctx.name(), "orders");
        assert_eq!(ctx.type_converter().to_boolean(&json!("true")), Some(true));
    }

    #[test]
    fn custom_converter_replaces_default() {
        let ctx = RouteContext::new("orders").with_converter(Arc::new(NeverTrue));
        assert_eq!(ctx.type_converter().to_boolean(&json!(true)), Some(false));
    }
}
