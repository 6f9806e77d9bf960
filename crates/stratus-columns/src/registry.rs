//! Resource-kind keyed column registry
//!
//! The registry is static data resolved through an exhaustive match:
//! adding a [`ResourceKind`] variant without a column list is a compile
//! error. The string keys only exist at the routing boundary, where an
//! unknown key is non-fatal and resolves to an empty grid.

use crate::{ColumnContext, ColumnDescriptor};
use crate::specs;
use serde::{Deserialize, Serialize};

/// The resource types the console renders grids for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Cloud hosts
    Cvm,
    /// Virtual private clouds
    Vpc,
    /// VPC subnets
    Subnet,
    /// Security groups
    SecurityGroup,
    /// Load balancers
    Clb,
    /// Elastic public IPs
    Eip,
    /// Cloud disks
    Disk,
    /// Elastic network interfaces
    NetworkInterface,
    /// VPC route tables
    RouteTable,
    /// Machine images
    Image,
    /// Recycle-bin orders awaiting destruction
    Recycle,
}

impl ResourceKind {
    /// The wire/route key for this resource
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::Cvm => "cvms",
            Self::Vpc => "vpc",
            Self::Subnet => "subnet",
            Self::SecurityGroup => "security_group",
            Self::Clb => "clb",
            Self::Eip => "eip",
            Self::Disk => "disk",
            Self::NetworkInterface => "network_interface",
            Self::RouteTable => "route_table",
            Self::Image => "image",
            Self::Recycle => "recycle",
        }
    }

    /// Parse a wire/route key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "cvms" => Some(Self::Cvm),
            "vpc" => Some(Self::Vpc),
            "subnet" => Some(Self::Subnet),
            "security_group" => Some(Self::SecurityGroup),
            "clb" => Some(Self::Clb),
            "eip" => Some(Self::Eip),
            "disk" => Some(Self::Disk),
            "network_interface" => Some(Self::NetworkInterface),
            "route_table" => Some(Self::RouteTable),
            "image" => Some(Self::Image),
            "recycle" => Some(Self::Recycle),
            _ => None,
        }
    }

    /// All resource kinds, in console navigation order
    pub const fn all() -> &'static [ResourceKind] {
        &[
            Self::Cvm,
            Self::Vpc,
            Self::Subnet,
            Self::SecurityGroup,
            Self::Clb,
            Self::Eip,
            Self::Disk,
            Self::NetworkInterface,
            Self::RouteTable,
            Self::Image,
            Self::Recycle,
        ]
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// Resolve the ordered column list for a resource under the given context.
///
/// Filtering is applied in order:
/// 1. outside list context, drop `only_show_on_list` columns;
/// 2. outside resource-admin scope, drop `is_only_show_in_resource` columns.
pub fn resolve(kind: ResourceKind, context: &ColumnContext) -> Vec<ColumnDescriptor> {
    let columns = match kind {
        ResourceKind::Cvm => specs::cvm::columns(),
        ResourceKind::Vpc => specs::vpc::columns(),
        ResourceKind::Subnet => specs::subnet::columns(),
        ResourceKind::SecurityGroup => specs::security_group::columns(),
        ResourceKind::Clb => specs::clb::columns(),
        ResourceKind::Eip => specs::eip::columns(),
        ResourceKind::Disk => specs::disk::columns(),
        ResourceKind::NetworkInterface => specs::network_interface::columns(),
        ResourceKind::RouteTable => specs::route_table::columns(),
        ResourceKind::Image => specs::image::columns(),
        ResourceKind::Recycle => specs::recycle::columns(),
    };

    columns
        .into_iter()
        .filter(|column| context.is_list_context || !column.only_show_on_list)
        .filter(|column| context.is_resource_admin_context || !column.is_only_show_in_resource)
        .collect()
}

/// Resolve by wire key.
///
/// Unknown keys resolve to an empty list: callers render an empty grid,
/// not an error.
pub fn resolve_key(key: &str, context: &ColumnContext) -> Vec<ColumnDescriptor> {
    match ResourceKind::from_key(key) {
        Some(kind) => resolve(kind, context),
        None => {
            tracing::warn!(key, "unknown resource key, resolving to empty column list");
            Vec::new()
        }
    }
}
