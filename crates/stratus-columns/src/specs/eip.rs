//! Elastic IP columns

use crate::{CellRenderer, ColumnDescriptor, FilterOption};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("cloud_id", "EIP ID")
            .renderer(CellRenderer::Link)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("public_ip", "Public IP").default_show(),
        ColumnDescriptor::new("status", "Status")
            .renderer(CellRenderer::Status)
            .default_show()
            .filter_options(vec![
                FilterOption::new("CREATING", "Creating"),
                FilterOption::new("BIND", "Bound"),
                FilterOption::new("UNBIND", "Unbound"),
                FilterOption::new("OFFLINING", "Releasing"),
            ]),
        ColumnDescriptor::new("cvm_id", "Bound Host").list_only(),
        ColumnDescriptor::new("region", "Region")
            .renderer(CellRenderer::Region)
            .default_show(),
        ColumnDescriptor::new("bk_biz_id", "Business")
            .renderer(CellRenderer::Business)
            .resource_only()
            .default_show(),
        ColumnDescriptor::new("created_at", "Created")
            .renderer(CellRenderer::Timestamp)
            .sortable(),
    ]
}
