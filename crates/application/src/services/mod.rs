mod routing_table;
mod static_overrides;

pub use routing_table::RoutingTable;
pub use static_overrides::StaticOverrides;
