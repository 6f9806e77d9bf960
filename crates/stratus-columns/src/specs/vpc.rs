//! VPC columns

use crate::{CellRenderer, ColumnDescriptor};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("cloud_id", "VPC ID")
            .renderer(CellRenderer::Link)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("name", "Name")
            .default_show()
            .sortable(),
        ColumnDescriptor::new("cidr", "IPv4 CIDR").default_show(),
        ColumnDescriptor::new("region", "Region")
            .renderer(CellRenderer::Region)
            .default_show(),
        ColumnDescriptor::new("bk_biz_id", "Business")
            .renderer(CellRenderer::Business)
            .resource_only()
            .default_show(),
        ColumnDescriptor::new("bk_cloud_id", "Cloud Area")
            .renderer(CellRenderer::CloudArea)
            .resource_only(),
        ColumnDescriptor::new("is_default", "Default VPC"),
        ColumnDescriptor::new("subnet_count", "Subnets").list_only(),
        ColumnDescriptor::new("created_at", "Created")
            .renderer(CellRenderer::Timestamp)
            .sortable(),
    ]
}
