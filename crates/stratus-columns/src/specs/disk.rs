//! Cloud disk columns

use crate::{CellRenderer, ColumnDescriptor, FilterOption};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("cloud_id", "Disk ID")
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
                FilterOption::new("ATTACHED", "Attached"),
                FilterOption::new("UNATTACHED", "Unattached"),
                FilterOption::new("ATTACHING", "Attaching"),
                FilterOption::new("DETACHING", "Detaching"),
            ]),
        ColumnDescriptor::new("disk_type", "Type").filter_options(vec![
            FilterOption::new("SYSTEM_DISK", "System Disk"),
            FilterOption::new("DATA_DISK", "Data Disk"),
        ]),
        ColumnDescriptor::new("disk_size", "Capacity")
            .renderer(CellRenderer::Capacity)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("instance_id", "Attached Host").list_only(),
        ColumnDescriptor::new("region", "Region")
            .renderer(CellRenderer::Region)
            .default_show(),
        ColumnDescriptor::new("zone", "Zone").renderer(CellRenderer::Zone),
        ColumnDescriptor::new("bk_biz_id", "Business")
            .renderer(CellRenderer::Business)
            .resource_only()
            .default_show(),
        ColumnDescriptor::new("created_at", "Created")
            .renderer(CellRenderer::Timestamp)
            .sortable(),
    ]
}
