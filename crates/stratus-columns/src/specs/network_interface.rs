//! Elastic network interface columns

use crate::{CellRenderer, ColumnDescriptor};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("cloud_id", "Interface ID")
            .renderer(CellRenderer::Link)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("name", "Name")
            .default_show()
            .sortable(),
        ColumnDescriptor::new("private_ipv4", "Private IP").default_show(),
        ColumnDescriptor::new("public_ipv4", "Public IP"),
        ColumnDescriptor::new("cloud_vpc_id", "VPC").default_show(),
        ColumnDescriptor::new("cloud_subnet_id", "Subnet"),
        ColumnDescriptor::new("instance_id", "Bound Host").list_only(),
        ColumnDescriptor::new("region", "Region")
            .renderer(CellRenderer::Region)
            .default_show(),
        ColumnDescriptor::new("zone", "Zone").renderer(CellRenderer::Zone),
        ColumnDescriptor::new("bk_biz_id", "Business")
            .renderer(CellRenderer::Business)
            .resource_only(),
        ColumnDescriptor::new("created_at", "Created")
            .renderer(CellRenderer::Timestamp)
            .sortable(),
    ]
}
