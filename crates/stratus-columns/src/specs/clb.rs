//! Load balancer (CLB) columns

use crate::{CellRenderer, ColumnDescriptor, FilterOption};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("cloud_id", "CLB ID")
            .renderer(CellRenderer::Link)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("name", "Name")
            .default_show()
            .sortable(),
        ColumnDescriptor::new("status", "Status")
            .renderer(CellRenderer::Status)
            .default_show()
            .filter_options(vec![
                FilterOption::new("0", "Creating"),
                FilterOption::new("1", "Normal"),
            ]),
        ColumnDescriptor::new("lb_type", "Network Type")
            .default_show()
            .filter_options(vec![
                FilterOption::new("OPEN", "Public"),
                FilterOption::new("INTERNAL", "Internal"),
            ]),
        ColumnDescriptor::new("vip", "VIP").default_show(),
        ColumnDescriptor::new("ip_version", "IP Version").filter_options(vec![
            FilterOption::new("ipv4", "IPv4"),
            FilterOption::new("ipv6", "IPv6"),
        ]),
        ColumnDescriptor::new("listener_count", "Listeners").list_only(),
        ColumnDescriptor::new("region", "Region")
            .renderer(CellRenderer::Region)
            .default_show(),
        ColumnDescriptor::new("zones", "Zones").renderer(CellRenderer::Zone),
        ColumnDescriptor::new("cloud_vpc_id", "VPC"),
        ColumnDescriptor::new("bk_biz_id", "Business")
            .renderer(CellRenderer::Business)
            .resource_only()
            .default_show(),
        ColumnDescriptor::new("created_at", "Created")
            .renderer(CellRenderer::Timestamp)
            .sortable(),
    ]
}
