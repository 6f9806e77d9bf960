//! Per-resource column lists
//!
//! One module per resource kind. Ordering inside each list is the render
//! order of the grid; field names are the backend's response field names.

pub(crate) mod clb;
pub(crate) mod cvm;
pub(crate) mod disk;
pub(crate) mod eip;
pub(crate) mod image;
pub(crate) mod network_interface;
pub(crate) mod recycle;
pub(crate) mod route_table;
pub(crate) mod security_group;
pub(crate) mod subnet;
pub(crate) mod vpc;
