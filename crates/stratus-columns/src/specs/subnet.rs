//! Subnet columns

use crate::{CellRenderer, ColumnDescriptor};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("cloud_id", "Subnet ID")
            .renderer(CellRenderer::Link)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("name", "Name")
            .default_show()
            .sortable(),
        ColumnDescriptor::new("cloud_vpc_id", "VPC").default_show(),
        ColumnDescriptor::new("ipv4_cidr", "IPv4 CIDR").default_show(),
        ColumnDescriptor::new("available_ip_count", "Free IPs").list_only(),
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
