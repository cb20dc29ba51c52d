//! Route descriptors and role-based route resolution for the navrail
//! sidebar.
//!
//! A [`RouteCatalog`] is the full navigation tree of an application. The
//! sidebar never reads it directly; it asks [`active_route_details`] for the
//! subset of routes visible to the current role list and renders that.

mod catalog;
mod errors;
mod model;
mod resolve;

pub use catalog::{load_catalog, parse_catalog};
pub use errors::RouteCatalogError;
pub use model::{RouteCatalog, RouteDescriptor, RouteIcon};
pub use resolve::{active_route_details, find_route, is_visible_for};
