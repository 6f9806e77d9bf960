//! User-togglable column settings

use crate::ColumnDescriptor;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One entry in the settings panel's column list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsField {
    pub label: Cow<'static, str>,
    pub field: Cow<'static, str>,
    /// The user cannot toggle this column off (primary keys and the like)
    pub disabled: bool,
}

/// The user-configurable subset of columns currently visible in a grid.
///
/// Derived from a (possibly context-filtered) column list; mutated by the
/// settings panel at runtime, scoped to one mounted view, never persisted
/// by this core.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Every togglable column, in column-list order
    pub fields: Vec<SettingsField>,
    /// Fields currently checked (initially the `is_default_show` set)
    pub checked: Vec<Cow<'static, str>>,
}

impl ViewSettings {
    /// Whether a field is currently checked
    pub fn is_checked(&self, field: &str) -> bool {
        self.checked.iter().any(|f| f == field)
    }

    /// Toggle a field, ignoring disabled entries
    pub fn toggle(&mut self, field: &str) {
        let Some(entry) = self.fields.iter().find(|f| f.field == field) else {
            return;
        };
        if entry.disabled {
            return;
        }
        if let Some(index) = self.checked.iter().position(|f| f == field) {
            self.checked.remove(index);
        } else {
            self.checked.push(entry.field.clone());
        }
    }
}

/// Derive settings from a column list.
///
/// `immutable_fields` marks columns the caller refuses to let the user
/// toggle; they come out `disabled`. Initial visibility follows
/// `is_default_show` alone, so a column that must always be visible
/// carries both the default-show flag and an immutable entry. Pure:
/// identical inputs yield a value-equal result.
pub fn generate_settings(
    columns: &[ColumnDescriptor],
    immutable_fields: &[&str],
) -> ViewSettings {
    let fields = columns
        .iter()
        .map(|column| SettingsField {
            label: column.label.clone(),
            field: column.field.clone(),
            disabled: immutable_fields.contains(&column.field.as_ref()),
        })
        .collect();

    let checked = columns
        .iter()
        .filter(|column| column.is_default_show)
        .map(|column| column.field.clone())
        .collect();

    ViewSettings { fields, checked }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", "ID"),
            ColumnDescriptor::new("name", "Name").default_show(),
            ColumnDescriptor::new("status", "Status").default_show(),
            ColumnDescriptor::new("created_at", "Created"),
        ]
    }

    #[test]
    fn test_checked_follows_default_show() {
        let settings = generate_settings(&sample_columns(), &[]);
        assert_eq!(settings.checked, vec!["name", "status"]);
        assert_eq!(settings.fields.len(), 4);
    }

    #[test]
    fn test_immutable_fields_are_disabled() {
        let settings = generate_settings(&sample_columns(), &["id"]);

        let id = settings.fields.iter().find(|f| f.field == "id").unwrap();
        assert!(id.disabled);
    }

    #[test]
    fn test_checked_ignores_immutable_flag() {
        // "id" is immutable but not default-show; it must not leak into
        // the initial checked set.
        let settings = generate_settings(&sample_columns(), &["id"]);
        assert_eq!(settings.checked, vec!["name", "status"]);

        let always_visible = vec![
            ColumnDescriptor::new("id", "ID").default_show(),
            ColumnDescriptor::new("name", "Name").default_show(),
        ];
        let settings = generate_settings(&always_visible, &["id"]);
        assert_eq!(settings.checked, vec!["id", "name"]);
    }

    #[test]
    fn test_generation_is_pure() {
        let columns = sample_columns();
        let a = generate_settings(&columns, &["id"]);
        let b = generate_settings(&columns, &["id"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_toggle_respects_disabled() {
        let mut settings = generate_settings(&sample_columns(), &["id"]);

        settings.toggle("status");
        assert!(!settings.is_checked("status"));

        settings.toggle("status");
        assert!(settings.is_checked("status"));

        settings.toggle("id");
        assert!(!settings.is_checked("id"));

        settings.toggle("no_such_field");
        assert_eq!(settings.checked.len(), 2);
    }
}
