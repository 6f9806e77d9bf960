//! Machine image columns

use crate::{CellRenderer, ColumnDescriptor, FilterOption};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("cloud_id", "Image ID")
            .renderer(CellRenderer::Link)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("name", "Name")
            .default_show()
            .sortable(),
        ColumnDescriptor::new("state", "State")
            .renderer(CellRenderer::Status)
            .default_show()
            .filter_options(vec![
                FilterOption::new("NORMAL", "Normal"),
                FilterOption::new("CREATING", "Creating"),
                FilterOption::new("CREATEFAILED", "Create Failed"),
            ]),
        ColumnDescriptor::new("platform", "Platform").default_show(),
        ColumnDescriptor::new("architecture", "Architecture").filter_options(vec![
            FilterOption::new("x86_64", "x86_64"),
            FilterOption::new("arm64", "ARM64"),
        ]),
        ColumnDescriptor::new("image_size", "Size")
            .renderer(CellRenderer::Capacity)
            .sortable(),
        ColumnDescriptor::new("image_source", "Source").list_only(),
        ColumnDescriptor::new("region", "Region").renderer(CellRenderer::Region),
        ColumnDescriptor::new("created_at", "Created")
            .renderer(CellRenderer::Timestamp)
            .sortable(),
    ]
}
