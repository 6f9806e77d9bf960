//! Recycle-bin order columns
//!
//! Recycled resources sit in a grace window before destruction; rows here
//! are orders, not live resources, which is why the identity field is the
//! order id rather than a cloud id.

use crate::{CellRenderer, ColumnDescriptor, FilterOption};

pub(crate) fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", "Order ID")
            .renderer(CellRenderer::Link)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("res_type", "Resource Type")
            .default_show()
            .filter_options(vec![
                FilterOption::new("cvm", "Host"),
                FilterOption::new("disk", "Disk"),
            ]),
        ColumnDescriptor::new("res_id", "Resource ID").default_show(),
        ColumnDescriptor::new("res_name", "Resource Name").default_show(),
        ColumnDescriptor::new("status", "Status")
            .renderer(CellRenderer::Status)
            .default_show()
            .filter_options(vec![
                FilterOption::new("wait_recycle", "Awaiting Recycle"),
                FilterOption::new("recycled", "Recycled"),
                FilterOption::new("recovered", "Recovered"),
                FilterOption::new("failed", "Failed"),
            ]),
        ColumnDescriptor::new("bk_biz_id", "Business")
            .renderer(CellRenderer::Business)
            .resource_only()
            .default_show(),
        ColumnDescriptor::new("recycled_at", "Recycled")
            .renderer(CellRenderer::Timestamp)
            .default_show()
            .sortable(),
        ColumnDescriptor::new("expired_at", "Destroys")
            .renderer(CellRenderer::Timestamp)
            .list_only()
            .sortable(),
    ]
}
