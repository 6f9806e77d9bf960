//! Column descriptors and resolution context

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Renderer capability flag for a column.
///
/// Opaque to this core: the view layer maps it to an actual cell
/// component (plain text, status dot, region-name lookup, ...). Nothing
/// in fetch or selection logic ever inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRenderer {
    #[default]
    Text,
    Link,
    Status,
    Region,
    Zone,
    Business,
    CloudArea,
    Timestamp,
    Tags,
    Capacity,
}

/// Option for a column's dropdown filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: Cow<'static, str>,
    pub label: Cow<'static, str>,
}

impl FilterOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
            label: Cow::Borrowed(label),
        }
    }
}

/// One column of a resource grid.
///
/// Descriptors are immutable once registered; per-view visibility lives
/// in [`ViewSettings`], not here.
///
/// [`ViewSettings`]: crate::ViewSettings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Field name, unique within one resource's column list
    pub field: Cow<'static, str>,
    /// Display label
    pub label: Cow<'static, str>,
    /// Renderer capability flag
    pub renderer: CellRenderer,
    /// Visible by default (seeds the checked set of the settings panel)
    pub is_default_show: bool,
    /// Only rendered in grid/list context, dropped on detail pages
    pub only_show_on_list: bool,
    /// Only rendered under resource-admin scope, dropped in business scope
    pub is_only_show_in_resource: bool,
    /// Whether the backend accepts this field as a sort column
    pub sortable: bool,
    /// Predefined dropdown values for the filter bar
    pub filter_options: Option<Vec<FilterOption>>,
}

impl ColumnDescriptor {
    /// Create a plain text column, hidden by default
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self {
            field: Cow::Borrowed(field),
            label: Cow::Borrowed(label),
            renderer: CellRenderer::Text,
            is_default_show: false,
            only_show_on_list: false,
            is_only_show_in_resource: false,
            sortable: false,
            filter_options: None,
        }
    }

    /// Set the renderer capability flag
    pub fn renderer(mut self, renderer: CellRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Show this column by default
    pub fn default_show(mut self) -> Self {
        self.is_default_show = true;
        self
    }

    /// Restrict to list context
    pub fn list_only(mut self) -> Self {
        self.only_show_on_list = true;
        self
    }

    /// Restrict to resource-admin scope
    pub fn resource_only(mut self) -> Self {
        self.is_only_show_in_resource = true;
        self
    }

    /// Mark as a valid sort column
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Attach dropdown filter options
    pub fn filter_options(mut self, options: Vec<FilterOption>) -> Self {
        self.filter_options = Some(options);
        self
    }
}

/// Where a column list is being resolved for.
///
/// The same resource renders in several places (the main grid, a detail
/// page, the business-scoped console vs. the resource-admin console);
/// context decides which descriptors survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnContext {
    /// Grid/list view (true) vs. detail view (false)
    pub is_list_context: bool,
    /// Resource-admin scope (true) vs. business scope (false)
    pub is_resource_admin_context: bool,
}

impl ColumnContext {
    /// Context for the main resource grid under admin scope
    pub const fn admin_list() -> Self {
        Self {
            is_list_context: true,
            is_resource_admin_context: true,
        }
    }

    /// Context for the business-scoped grid
    pub const fn business_list() -> Self {
        Self {
            is_list_context: true,
            is_resource_admin_context: false,
        }
    }

    /// Context for a detail page under admin scope
    pub const fn admin_detail() -> Self {
        Self {
            is_list_context: false,
            is_resource_admin_context: true,
        }
    }
}
