use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Converts dynamically typed exchange values into typed values.
///
/// Conversions return `None` when the value has no representation in the
/// target type; callers decide what an unconvertible value means.
pub trait TypeConverter: Send + Sync {
    /// Interpret a value as a boolean.
    fn to_boolean(&self, value: &Value) -> Option<bool>;
}

/// Accepted boolean representations for [`DefaultTypeConverter`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// String literals read as `true` (default: `["true"]`)
    pub true_literals: Vec<String>,
    /// String literals read as `false` (default: `["false"]`)
    pub false_literals: Vec<String>,
    /// Compare string literals ignoring ASCII case (default: true)
    pub case_insensitive: bool,
    /// Read the numbers 1 and 0 as true and false (default: true)
    pub numeric_booleans: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            true_literals: vec!["true".into()],
            false_literals: vec!["false".into()],
            case_insensitive: true,
            numeric_booleans: true,
        }
    }
}

/// Table-driven converter.
///
/// Booleans map to themselves. Strings are trimmed and matched against the
/// configured literals. Numbers 1 and 0 map to true and false when
/// `numeric_booleans` is set. Null, arrays and objects never convert.
#[derive(Clone, Debug, Default)]
pub struct DefaultTypeConverter {
    config: ConverterConfig,
}

impl DefaultTypeConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    fn literal_matches(&self, literals: &[String], candidate: &str) -> bool {
        literals.iter().any(|lit| {
            if self.config.case_insensitive {
                lit.eq_ignore_ascii_case(candidate)
            } else {
                lit == candidate
            }
        })
    }
}

impl TypeConverter for DefaultTypeConverter {
    fn to_boolean(&self, value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => {
                let s = s.trim();
                if self.literal_matches(&self.config.true_literals, s) {
                    Some(true)
                } else if self.literal_matches(&self.config.false_literals, s) {
                    Some(false)
                } else {
                    None
                }
            }
            Value::Number(n) if self.config.numeric_booleans => match n.as_f64() {
                Some(v) if v == 1.0 => Some(true),
                Some(v) if v == 0.0 => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn booleans_convert_to_themselves() {
        let conv = DefaultTypeConverter::default();
        assert_eq!(conv.to_boolean(&json!(true)), Some(true));
        assert_eq!(conv.to_boolean(&json!(false)), Some(false));
    }

    #[test]
    fn strings_match_literals_ignoring_case() {
        let conv = DefaultTypeConverter::default();
        assert_eq!(conv.to_boolean(&json!("true")), Some(true));
        assert_eq!(conv.to_boolean(&json!("  TRUE ")), Some(true));
        assert_eq!(conv.to_boolean(&json!("False")), Some(false));
        assert_eq!(conv.to_boolean(&json!("yes")), None);
        assert_eq!(conv.to_boolean(&json!("")), None);
    }

    #[test]
    fn case_sensitive_literals() {
        let conv = DefaultTypeConverter::new(ConverterConfig {
            case_insensitive: false,
            ..ConverterConfig::default()
        });
        assert_eq!(conv.to_boolean(&json!("true")), Some(true));
        assert_eq!(conv.to_boolean(&json!("TRUE")), None);
    }

    #[test]
    fn numeric_booleans() {
        let conv = DefaultTypeConverter::default();
        assert_eq!(conv.to_boolean(&json!(1)), Some(true));
        assert_eq!(conv.to_boolean(&json!(0)), Some(false));
        assert_eq!(conv.to_boolean(&json!(1.0)), Some(true));
        assert_eq!(conv.to_boolean(&json!(2)), None);

        let strict = DefaultTypeConverter::new(ConverterConfig {
            numeric_booleans: false,
            ..ConverterConfig::default()
        });
        assert_eq!(strict.to_boolean(&json!(1)), None);
    }

    #[test]
    fn structured_values_never_convert() {
        let conv = DefaultTypeConverter::default();
        assert_eq!(conv.to_boolean(&Value::Null), None);
        assert_eq!(conv.to_boolean(&json!([true])), None);
        assert_eq!(conv.to_boolean(&json!({"stop": true})), None);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"true_literals": ["true", "yes", "on"]}"#).unwrap();
        assert_eq!(config.true_literals.len(), 3);
        assert_eq!(config.false_literals, vec!["false".to_string()]);
        assert!(config.case_insensitive);

        let conv = DefaultTypeConverter::new(config);
        assert_eq!(conv.to_boolean(&json!("On")), Some(true));
    }
}
