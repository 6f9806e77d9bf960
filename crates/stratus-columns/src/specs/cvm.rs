//! Cloud host (CVM) columns

use crate::{CellRenderer, ColumnDescriptor, FilterOption};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("cloud_id", "Host ID")
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
                FilterOption::new("RUNNING", "Running"),
                FilterOption::new("STOPPED", "Stopped"),
                FilterOption::new("STARTING", "Starting"),
                FilterOption::new("STOPPING", "Stopping"),
                FilterOption::new("REBOOTING", "Rebooting"),
                FilterOption::new("TERMINATED", "Terminated"),
            ]),
        ColumnDescriptor::new("private_ipv4_addresses", "Private IP").default_show(),
        ColumnDescriptor::new("public_ipv4_addresses", "Public IP").default_show(),
        ColumnDescriptor::new("region", "Region")
            .renderer(CellRenderer::Region)
            .default_show(),
        ColumnDescriptor::new("zone", "Zone").renderer(CellRenderer::Zone),
        ColumnDescriptor::new("bk_biz_id", "Business")
            .renderer(CellRenderer::Business)
            .resource_only()
            .default_show(),
        ColumnDescriptor::new("bk_cloud_id", "Cloud Area")
            .renderer(CellRenderer::CloudArea)
            .resource_only(),
        ColumnDescriptor::new("machine_type", "Instance Type").sortable(),
        ColumnDescriptor::new("os_name", "OS"),
        ColumnDescriptor::new("cloud_vpc_ids", "VPC").list_only(),
        ColumnDescriptor::new("cloud_subnet_ids", "Subnet").list_only(),
        ColumnDescriptor::new("cloud_created_time", "Created")
            .renderer(CellRenderer::Timestamp)
            .sortable(),
        ColumnDescriptor::new("cloud_expired_time", "Expires")
            .renderer(CellRenderer::Timestamp)
            .list_only()
            .sortable(),
    ]
}
