//! Filter rule building
//!
//! A grid's filter bar produces a map of named values; the backend wants
//! a flat AND-combined rule list with empty entries pruned. The builder
//! is pure: building twice from the same inputs yields structurally
//! equal specs, and no field appears twice unless the caller duplicates
//! it through static rules.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use stratus_core::{FilterOperator, QueryRule, QuerySpec};

/// Builds a [`QuerySpec`] from named filter values.
///
/// Operators and static rules are configured once per view; values are
/// replaced wholesale whenever the filter bar changes. Value order is
/// insertion order and is preserved in the emitted rule list.
#[derive(Debug, Clone, Default)]
pub struct FilterRuleBuilder {
    values: IndexMap<String, Value>,
    operators: HashMap<String, FilterOperator>,
    static_rules: Vec<QueryRule>,
}

impl FilterRuleBuilder {
    /// Create an empty builder (every field defaults to `Equal`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the operator for a field
    pub fn operator(mut self, field: impl Into<String>, operator: FilterOperator) -> Self {
        self.operators.insert(field.into(), operator);
        self
    }

    /// Append a rule that is sent regardless of filter values
    /// (vendor pinning, account scoping, ...)
    pub fn static_rule(mut self, rule: QueryRule) -> Self {
        self.static_rules.push(rule);
        self
    }

    /// Set one filter value, keeping insertion order for new fields
    pub fn set_value(&mut self, field: impl Into<String>, value: Value) {
        self.values.insert(field.into(), value);
    }

    /// Chaining variant of [`set_value`](Self::set_value)
    pub fn value(mut self, field: impl Into<String>, value: Value) -> Self {
        self.set_value(field, value);
        self
    }

    /// Replace all filter values at once
    pub fn replace_values(&mut self, values: IndexMap<String, Value>) {
        self.values = values;
    }

    /// Remove every filter value, keeping operators and static rules
    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    /// The operator a field resolves to
    pub fn operator_of(&self, field: &str) -> FilterOperator {
        self.operators.get(field).copied().unwrap_or_default()
    }

    /// Build the normalized spec: empty/absent values emit no rule,
    /// static rules are appended, condition is always AND.
    pub fn build(&self) -> QuerySpec {
        let mut rules: Vec<QueryRule> = self
            .values
            .iter()
            .filter(|(_, value)| !is_empty_value(value))
            .map(|(field, value)| {
                QueryRule::new(field.clone(), self.operator_of(field), value.clone())
            })
            .collect();

        rules.extend(self.static_rules.iter().cloned());
        QuerySpec::new(rules)
    }
}

/// An empty value contributes no rule: null, empty string, empty
/// collection.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn region_zone_builder() -> FilterRuleBuilder {
        FilterRuleBuilder::new()
            .operator("region", FilterOperator::In)
            .operator("zone", FilterOperator::In)
            .operator("name", FilterOperator::Contains)
    }

    #[test]
    fn test_empty_values_emit_no_rule() {
        let builder = region_zone_builder()
            .value("region", json!(["ap-guangzhou"]))
            .value("zone", json!([]))
            .value("name", json!(""))
            .value("status", json!(null));

        let spec = builder.build();
        assert_eq!(spec.rules.len(), 1);
        assert_eq!(spec.rules[0].field, "region");
        assert_eq!(spec.rules[0].operator, FilterOperator::In);
        assert_eq!(spec.rules[0].value, json!(["ap-guangzhou"]));
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = region_zone_builder()
            .value("region", json!(["ap-shanghai"]))
            .value("name", json!("web"));

        assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn test_rule_order_is_insertion_order() {
        let builder = FilterRuleBuilder::new()
            .value("b", json!("2"))
            .value("a", json!("1"))
            .value("c", json!("3"));

        let fields: Vec<_> = builder.build().rules.iter().map(|r| r.field.clone()).collect();
        assert_eq!(fields, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_static_rules_are_appended() {
        let builder = FilterRuleBuilder::new()
            .static_rule(QueryRule::new("vendor", FilterOperator::Equal, json!("tcloud")))
            .value("name", json!("web"));

        let spec = builder.build();
        assert_eq!(spec.rules.len(), 2);
        assert_eq!(spec.rules[0].field, "name");
        assert_eq!(spec.rules[1].field, "vendor");
    }

    #[test]
    fn test_unknown_field_defaults_to_equal() {
        let builder = FilterRuleBuilder::new().value("status", json!("RUNNING"));
        let spec = builder.build();
        assert_eq!(spec.rules[0].operator, FilterOperator::Equal);
    }

    #[test]
    fn test_replace_values_drops_previous() {
        let mut builder = region_zone_builder().value("region", json!(["ap-guangzhou"]));

        let mut next = IndexMap::new();
        next.insert("name".to_string(), json!("db"));
        builder.replace_values(next);

        let spec = builder.build();
        assert_eq!(spec.rules.len(), 1);
        assert_eq!(spec.rules[0].field, "name");
    }

    #[test]
    fn test_no_values_builds_empty_and_spec() {
        let spec = FilterRuleBuilder::new().build();
        assert!(spec.is_empty());
        assert_eq!(serde_json::to_value(&spec).unwrap()["condition"], "AND");
    }

    #[test]
    fn test_zero_and_false_are_not_empty() {
        let builder = FilterRuleBuilder::new()
            .value("bk_biz_id", json!(0))
            .value("is_default", json!(false));

        assert_eq!(builder.build().rules.len(), 2);
    }
}
