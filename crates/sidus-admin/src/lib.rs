//! # sidus-admin
//!
//! Declarative admin definitions for admin panels. An [`Admin`] describes one
//! manageable entity type and owns an ordered set of [`Action`]s (list, edit,
//! create, ...). Every action builds a [`Route`] under the admin prefix, and the
//! [`AdminRouteLoader`] flattens all of them into a single [`RouteCollection`]
//! for the host router. The [`AdminRegistry`] is built once at startup; each
//! request gets its own [`RequestContext`] to track the current admin and
//! action.
//!
//! ## Quick Start
//!
//! ```
//! use sidus_admin::{Admin, AdminRegistry, AdminRouteLoader, Loader};
//! use sidus_admin_core::config::{ActionConfig, AdminConfig};
//!
//! let config = AdminConfig::new()
//!     .prefix("/products")
//!     .controller_pattern(vec!["{{Admin}}Controller::{{action}}Action"])
//!     .action("list", ActionConfig::new("/list"));
//!
//! let mut registry = AdminRegistry::new();
//! registry.add_admin(Admin::new("product", config).unwrap());
//!
//! let routes = AdminRouteLoader::new(&registry).load(".", Some("sidus_admin")).unwrap();
//! let route = routes.get("sidus_admin.product.list").unwrap();
//! assert_eq!(route.path(), "/products/list");
//! ```

pub mod action;
pub mod admin;
pub mod checks;
pub mod context;
pub mod factory;
pub mod loader;
pub mod patterns;
pub mod registry;
pub mod route;

pub use action::{Action, ROUTE_NAMESPACE};
pub use admin::Admin;
pub use context::{ActionRef, RequestContext};
pub use factory::{ActionFactories, ActionFactory, DefaultActionFactory};
pub use loader::{AdminRouteLoader, Loader, LoaderResolver, LOADER_TYPE};
pub use registry::{build_registry, AdminRegistry};
pub use route::{Route, RouteCollection};
