//! Route descriptors and route tables.
//!
//! A [`Route`] is the immutable matching description of one action: path,
//! default parameters, placeholder requirements, options, host, schemes,
//! methods and condition. A [`RouteCollection`] is the ordered, name-keyed
//! table handed to the host router.

use indexmap::IndexMap;
use serde::Serialize;
use sidus_admin_core::Parameters;

/// The matching description of a single route.
///
/// Paths always start with a single `/`, methods are stored upper-case and
/// schemes lower-case. Requirements are stored without `^`/`$` anchors.
///
/// # Examples
///
/// ```
/// use sidus_admin::route::Route;
///
/// let route = Route::new("products/{id}")
///     .methods(vec!["get", "post"])
///     .schemes(vec!["HTTPS"])
///     .requirement("id", "^\\d+$");
///
/// assert_eq!(route.path(), "/products/{id}");
/// assert!(route.has_method("GET"));
/// assert!(route.has_scheme("https"));
/// assert_eq!(route.requirement_for("id"), Some("\\d+"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    path: String,
    defaults: Parameters,
    requirements: IndexMap<String, String>,
    options: Parameters,
    host: String,
    schemes: Vec<String>,
    methods: Vec<String>,
    condition: String,
}

impl Route {
    /// Creates a route for the given path with no constraints.
    pub fn new(path: &str) -> Self {
        let mut route = Self::default();
        route.set_path(path);
        route
    }

    /// Replaces the path, normalizing it to start with a single `/`.
    pub fn set_path(&mut self, path: &str) {
        self.path = format!("/{}", path.trim().trim_start_matches('/'));
    }

    /// Sets the default parameters.
    #[must_use]
    pub fn defaults(mut self, defaults: Parameters) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the placeholder requirements.
    #[must_use]
    pub fn requirements(mut self, requirements: IndexMap<String, String>) -> Self {
        self.requirements = requirements
            .into_iter()
            .map(|(key, regex)| (key, sanitize_requirement(&regex)))
            .collect();
        self
    }

    /// Sets a single placeholder requirement.
    #[must_use]
    pub fn requirement(mut self, key: impl Into<String>, regex: &str) -> Self {
        self.requirements.insert(key.into(), sanitize_requirement(regex));
        self
    }

    /// Sets the route options.
    #[must_use]
    pub fn options(mut self, options: Parameters) -> Self {
        self.options = options;
        self
    }

    /// Sets the host pattern.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the allowed schemes (stored lower-case).
    #[must_use]
    pub fn schemes<S: AsRef<str>>(mut self, schemes: Vec<S>) -> Self {
        self.schemes = schemes
            .iter()
            .map(|s| s.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    /// Sets the allowed methods (stored upper-case).
    #[must_use]
    pub fn methods<S: AsRef<str>>(mut self, methods: Vec<S>) -> Self {
        self.methods = methods
            .iter()
            .map(|m| m.as_ref().to_ascii_uppercase())
            .collect();
        self
    }

    /// Sets the matching condition.
    #[must_use]
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    /// Returns the path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the default parameters.
    pub const fn get_defaults(&self) -> &Parameters {
        &self.defaults
    }

    /// Returns a default parameter.
    pub fn default_param(&self, key: &str) -> Option<&serde_json::Value> {
        self.defaults.get(key)
    }

    /// Returns whether a default parameter is set.
    pub fn has_default(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    /// Returns the placeholder requirements.
    pub const fn get_requirements(&self) -> &IndexMap<String, String> {
        &self.requirements
    }

    /// Returns the requirement for a placeholder.
    pub fn requirement_for(&self, key: &str) -> Option<&str> {
        self.requirements.get(key).map(String::as_str)
    }

    /// Returns the route options.
    pub const fn get_options(&self) -> &Parameters {
        &self.options
    }

    /// Returns a route option.
    pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
        self.options.get(key)
    }

    /// Returns the host pattern (empty when unrestricted).
    pub fn get_host(&self) -> &str {
        &self.host
    }

    /// Returns the allowed schemes (empty when unrestricted).
    pub fn get_schemes(&self) -> &[String] {
        &self.schemes
    }

    /// Returns whether the scheme is allowed explicitly.
    pub fn has_scheme(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Returns the allowed methods (empty when every method is allowed).
    pub fn get_methods(&self) -> &[String] {
        &self.methods
    }

    /// Returns whether the method is allowed explicitly.
    pub fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    /// Returns the matching condition (empty when none).
    pub fn get_condition(&self) -> &str {
        &self.condition
    }
}

/// Strips the `^`/`$` anchors from a requirement; the router anchors them itself.
fn sanitize_requirement(regex: &str) -> String {
    let regex = regex.strip_prefix('^').unwrap_or(regex);
    let regex = regex.strip_suffix('$').unwrap_or(regex);
    regex.to_string()
}

/// An ordered table of named routes.
///
/// Adding a route under an existing name replaces it and moves it to the end
/// of the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteCollection {
    routes: IndexMap<String, Route>,
}

impl RouteCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route, replacing any route with the same name.
    pub fn add(&mut self, name: impl Into<String>, route: Route) {
        let name = name.into();
        self.routes.shift_remove(&name);
        self.routes.insert(name, route);
    }

    /// Adds every route of another collection, in its order.
    pub fn add_collection(&mut self, other: Self) {
        for (name, route) in other.routes {
            self.add(name, route);
        }
    }

    /// Prepends a prefix to every route path. An empty prefix is a no-op.
    pub fn add_prefix(&mut self, prefix: &str) {
        let prefix = prefix.trim().trim_matches('/');
        if prefix.is_empty() {
            return;
        }
        for route in self.routes.values_mut() {
            let path = format!("/{prefix}{}", route.path);
            route.set_path(&path);
        }
    }

    /// Returns the route with the given name.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Returns whether a route with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Removes and returns a route, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Route> {
        self.routes.shift_remove(name)
    }

    /// Returns the route names in order.
    pub fn names(&self) -> Vec<&str> {
        self.routes.keys().map(String::as_str).collect()
    }

    /// Iterates over `(name, route)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.routes.iter().map(|(name, route)| (name.as_str(), route))
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the collection holds no route.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl IntoIterator for RouteCollection {
    type Item = (String, Route);
    type IntoIter = indexmap::map::IntoIter<String, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}
