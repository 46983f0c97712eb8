//! Route table and route registration.
//!
//! Routes are plain configuration data: exact path fragments mapped to a
//! (view template, controller) pair, with a designated fallback route.
//! Consumers receive the table through the [`RouteRegistrar`] trait rather
//! than through any shared global registry.

mod registrar;
mod table;

pub use registrar::{RouteRegistrar, RouteTarget};
pub use table::{RouteEntry, RouteTable};
