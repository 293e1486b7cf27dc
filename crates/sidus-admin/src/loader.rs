//! Route loading.
//!
//! The host router asks a [`LoaderResolver`] for a loader able to handle a
//! resource/type pair; the [`AdminRouteLoader`] answers for the
//! `"sidus_admin"` type and flattens every admin action into one
//! [`RouteCollection`].

use sidus_admin_core::{AdminError, AdminResult};

use crate::registry::AdminRegistry;
use crate::route::RouteCollection;

/// The resource type handled by [`AdminRouteLoader`].
pub const LOADER_TYPE: &str = "sidus_admin";

/// A source of routes.
pub trait Loader {
    /// Loads the routes of `resource`.
    fn load(&self, resource: &str, loader_type: Option<&str>) -> AdminResult<RouteCollection>;

    /// Returns whether this loader handles `resource` with the given type.
    fn supports(&self, resource: &str, loader_type: Option<&str>) -> bool;
}

/// Flattens the actions of every registered admin into one route table.
#[derive(Debug, Clone, Copy)]
pub struct AdminRouteLoader<'a> {
    registry: &'a AdminRegistry,
}

impl<'a> AdminRouteLoader<'a> {
    /// Creates a loader over the given registry.
    pub const fn new(registry: &'a AdminRegistry) -> Self {
        Self { registry }
    }
}

impl Loader for AdminRouteLoader<'_> {
    /// Returns one route per action, named after the action's route name.
    /// Admins are visited in registry order and actions in admin order; the
    /// resource is ignored.
    fn load(&self, _resource: &str, _loader_type: Option<&str>) -> AdminResult<RouteCollection> {
        let mut routes = RouteCollection::new();

        for admin in self.registry.admins().values() {
            for action in admin.actions().values() {
                routes.add(action.route_name(), action.route().clone());
            }
        }

        tracing::debug!(routes = routes.len(), "loaded admin routes");
        Ok(routes)
    }

    fn supports(&self, _resource: &str, loader_type: Option<&str>) -> bool {
        loader_type == Some(LOADER_TYPE)
    }
}

/// Picks the loader for a resource among registered loaders.
#[derive(Default)]
pub struct LoaderResolver<'a> {
    loaders: Vec<Box<dyn Loader + 'a>>,
}

impl<'a> LoaderResolver<'a> {
    /// Creates a resolver with no loader.
    pub fn new() -> Self {
        Self {
            loaders: Vec::new(),
        }
    }

    /// Adds a loader. Loaders are tried in the order they are added.
    pub fn add_loader(&mut self, loader: Box<dyn Loader + 'a>) {
        self.loaders.push(loader);
    }

    /// Returns the first loader supporting the resource/type pair.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no loader supports it.
    pub fn resolve(&self, resource: &str, loader_type: Option<&str>) -> AdminResult<&(dyn Loader + 'a)> {
        self.loaders
            .iter()
            .find(|loader| loader.supports(resource, loader_type))
            .map(AsRef::as_ref)
            .ok_or_else(|| {
                AdminError::NotFound(format!(
                    "No loader for resource '{resource}' with type '{}'",
                    loader_type.unwrap_or_default()
                ))
            })
    }

    /// Resolves a loader and loads the resource with it.
    pub fn load(&self, resource: &str, loader_type: Option<&str>) -> AdminResult<RouteCollection> {
        self.resolve(resource, loader_type)?.load(resource, loader_type)
    }

    /// Returns the number of loaders.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Returns `true` if no loader is registered.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl std::fmt::Debug for LoaderResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderResolver")
            .field("loader_count", &self.loaders.len())
            .finish()
    }
}
